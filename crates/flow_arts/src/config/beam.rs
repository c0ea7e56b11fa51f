//! Light saber beam configuration

use super::{Config, ConfigError};
use crate::beam::ColorPalette;
use crate::entities::ParticleSimulation;
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Default sprite for beam particles
pub const DEFAULT_BEAM_TEXTURE: &str = "assets/textures/beam_particle.png";

/// Where the beam sits relative to the hilt
///
/// These numbers belong to the hilt model's modeling space. They have to be
/// re-derived if the mesh changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Pitch (degrees) applied in the hilt's frame before taking its front axis
    pub pitch_correction_degrees: f32,
    /// Distance along the hilt's front axis to the emitter
    pub forward_offset: f32,
    /// Fixed offset added in world axes, not hilt axes
    pub world_nudge: Vec3,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            pitch_correction_degrees: -90.0,
            forward_offset: 0.1,
            world_nudge: Vec3::new(-0.035, 0.0, 0.1),
        }
    }
}

/// Everything the light saber script reads at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// Sprite texture asset reference
    pub texture: String,
    /// Also spawn a world-space trail emitter next to the beam
    pub trail: bool,
    /// Start/finish color choices
    pub palette: ColorPalette,
    /// Spawn placement relative to the hilt
    pub placement: PlacementConfig,
    /// Static particle parameters
    pub particles: ParticleSimulation,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            texture: DEFAULT_BEAM_TEXTURE.to_string(),
            trail: false,
            palette: ColorPalette::default(),
            placement: PlacementConfig::default(),
            particles: ParticleSimulation::beam(),
        }
    }
}

impl BeamConfig {
    /// Enable or disable the trail emitter
    pub fn with_trail(mut self, trail: bool) -> Self {
        self.trail = trail;
        self
    }

    /// Set the sprite texture
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = texture.into();
        self
    }

    /// Reject values the host cannot simulate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.texture.trim().is_empty() {
            return Err(ConfigError::Invalid("texture cannot be empty".to_string()));
        }

        let particles = &self.particles;
        if particles.lifespan.is_nan() || particles.lifespan <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "lifespan must be positive, got {}",
                particles.lifespan
            )));
        }
        if particles.emit_rate.is_nan() || particles.emit_rate < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "emit_rate cannot be negative, got {}",
                particles.emit_rate
            )));
        }
        if particles.max_particles == 0 {
            return Err(ConfigError::Invalid("max_particles must be at least 1".to_string()));
        }

        let placement = &self.placement;
        let finite = placement.pitch_correction_degrees.is_finite()
            && placement.forward_offset.is_finite()
            && placement.world_nudge.iter().all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::Invalid("placement values must be finite".to_string()));
        }

        Ok(())
    }
}

impl Config for BeamConfig {}
