//! Emission state of a beam emitter

/// Whether an emitter is producing particles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitterState {
    /// Not emitting; every emitter is created in this state
    #[default]
    Off,
    /// Emitting while the hilt is held
    On,
}

impl EmitterState {
    /// State for an emitting flag
    pub fn from_emitting(is_emitting: bool) -> Self {
        if is_emitting {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Whether particles are being emitted
    pub fn is_emitting(self) -> bool {
        self == Self::On
    }

    /// Move to the state for `is_emitting`
    ///
    /// Returns `true` when the state actually changed.
    pub fn transition(&mut self, is_emitting: bool) -> bool {
        let next = Self::from_emitting(is_emitting);
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}
