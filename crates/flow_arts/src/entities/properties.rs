//! Entity property bags
//!
//! Pure data exchanged with the host: the full property set a particle
//! effect is created with, the partial edits applied afterwards, and the
//! transform read back from an existing entity.

use super::EntityId;
use crate::foundation::math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// 8-bit RGB color as the host expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// World transform of an existing entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityProperties {
    /// World space position
    pub position: Vec3,
    /// World space rotation
    pub rotation: Quat,
}

/// Static particle simulation parameters
///
/// Everything about an emitter that is configured once and never computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSimulation {
    /// Base color of the effect, blended by start/finish colors
    pub color: Color,
    /// Upper bound on live particles
    pub max_particles: u32,
    /// Seconds each particle lives
    pub lifespan: f32,
    /// Particles emitted per second
    pub emit_rate: f32,
    /// Initial particle speed
    pub emit_speed: f32,
    /// Random variation applied to `emit_speed`
    pub speed_spread: f32,
    /// Size of the emission volume
    pub emit_dimensions: Vec3,
    /// Polar emission angle range start (radians)
    pub polar_start: f32,
    /// Polar emission angle range finish (radians)
    pub polar_finish: f32,
    /// Azimuth emission angle range start (radians)
    pub azimuth_start: f32,
    /// Azimuth emission angle range finish (radians)
    pub azimuth_finish: f32,
    /// Constant acceleration on every particle
    pub emit_acceleration: Vec3,
    /// Random variation applied to `emit_acceleration`
    pub acceleration_spread: Vec3,
    /// Particle radius at birth
    pub radius_start: f32,
    /// Particle radius at death
    pub radius_finish: f32,
    /// Mid-life alpha
    pub alpha: f32,
    /// Random variation applied to `alpha`
    pub alpha_spread: f32,
    /// Alpha at birth
    pub alpha_start: f32,
    /// Alpha at death
    pub alpha_finish: f32,
}

impl ParticleSimulation {
    /// Parameter table for the saber beam
    ///
    /// Tuned against the beam sprite; treat as data.
    pub fn beam() -> Self {
        Self {
            color: Color::new(200, 200, 255),
            max_particles: 100_000,
            lifespan: 2.0,
            emit_rate: 1000.0,
            emit_speed: 0.4,
            speed_spread: 0.0,
            emit_dimensions: Vec3::zeros(),
            polar_start: 0.0,
            polar_finish: 0.0,
            azimuth_start: 0.1,
            azimuth_finish: 0.01,
            emit_acceleration: Vec3::zeros(),
            acceleration_spread: Vec3::zeros(),
            radius_start: 0.03,
            radius_finish: 0.025,
            alpha: 0.7,
            alpha_spread: 0.1,
            alpha_start: 0.5,
            alpha_finish: 0.5,
        }
    }
}

impl Default for ParticleSimulation {
    fn default() -> Self {
        Self::beam()
    }
}

/// Complete property set for creating a particle effect entity
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleEffectProperties {
    /// Spawn position in world space
    pub position: Vec3,
    /// Orientation whose front axis is the emission direction
    pub emit_orientation: Quat,
    /// Entity this effect is rigidly attached to
    pub parent_id: Option<EntityId>,
    /// Whether particles are currently being emitted
    pub is_emitting: bool,
    /// Particle color at birth
    pub color_start: Color,
    /// Particle color at death
    pub color_finish: Color,
    /// Sprite texture asset reference
    pub textures: String,
    /// Whether particles stay in world space after emission
    pub emitter_should_trail: bool,
    /// Static simulation parameters
    pub simulation: ParticleSimulation,
}

/// Partial property update
///
/// Fields left as `None` are untouched by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityEdit {
    /// New emitting flag
    pub is_emitting: Option<bool>,
}

impl EntityEdit {
    /// Edit that only toggles emission
    pub fn emitting(is_emitting: bool) -> Self {
        Self {
            is_emitting: Some(is_emitting),
        }
    }

    /// Apply the edit to a full property set
    pub fn apply(&self, properties: &mut ParticleEffectProperties) {
        if let Some(is_emitting) = self.is_emitting {
            properties.is_emitting = is_emitting;
        }
    }
}
