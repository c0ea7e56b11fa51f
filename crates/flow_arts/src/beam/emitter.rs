//! Handle to a spawned beam emitter

use super::EmitterState;
use crate::entities::{Color, EntityEdit, EntityHost, EntityId};

/// A particle emitter this script created and still owns
///
/// Host failures on edit or delete are logged and otherwise ignored: the
/// host may already have removed the entity along with its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeamEmitter {
    id: EntityId,
    color: Color,
    state: EmitterState,
}

impl BeamEmitter {
    /// Track a freshly created, switched-off emitter
    pub fn new(id: EntityId, color: Color) -> Self {
        Self {
            id,
            color,
            state: EmitterState::Off,
        }
    }

    /// Host handle of the emitter
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Color bound at creation
    pub fn color(&self) -> Color {
        self.color
    }

    /// Last emission state requested
    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Whether emission was last switched on
    pub fn is_emitting(&self) -> bool {
        self.state.is_emitting()
    }

    /// Switch emission on or off
    ///
    /// An edit is only sent when the state changes.
    pub fn set_emitting(&mut self, host: &mut dyn EntityHost, is_emitting: bool) {
        if !self.state.transition(is_emitting) {
            return;
        }

        if let Err(e) = host.edit_entity(self.id, EntityEdit::emitting(is_emitting)) {
            log::warn!("Failed to set emitting={} on {}: {}", is_emitting, self.id, e);
        }
    }

    /// Delete the emitter
    pub fn destroy(self, host: &mut dyn EntityHost) {
        match host.delete_entity(self.id) {
            Ok(()) => log::debug!("Deleted emitter {}", self.id),
            Err(e) => log::warn!("Failed to delete emitter {}: {}", self.id, e),
        }
    }
}
