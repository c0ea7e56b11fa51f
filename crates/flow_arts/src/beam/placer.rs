//! Beam placement
//!
//! Turns the hilt's world transform into the emitter's spawn transform and
//! issues the create request for it.

use super::BeamEmitter;
use crate::config::{BeamConfig, PlacementConfig};
use crate::entities::{Color, EntityHost, EntityId, EntityProperties, ParticleEffectProperties};
use crate::foundation::math::{front_of, from_pitch_yaw_roll_degrees, orientation_of, Quat, Vec3};

/// Where and how an emitter is spawned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTransform {
    /// World space spawn position
    pub position: Vec3,
    /// Orientation whose front axis is the emission direction
    pub emit_orientation: Quat,
}

/// Computes beam spawn transforms and creates beam emitters
#[derive(Debug, Clone)]
pub struct BeamPlacer {
    config: BeamConfig,
}

impl BeamPlacer {
    /// Create a placer for the given configuration
    pub fn new(config: BeamConfig) -> Self {
        Self { config }
    }

    /// Configuration this placer spawns with
    pub fn config(&self) -> &BeamConfig {
        &self.config
    }

    /// Placement parameters
    pub fn placement(&self) -> &PlacementConfig {
        &self.config.placement
    }

    /// Spawn transform for a hilt at `parent_position` / `parent_rotation`
    ///
    /// Pure: equal inputs give equal outputs.
    pub fn compute_spawn_transform(&self, parent_position: Vec3, parent_rotation: Quat) -> SpawnTransform {
        let placement = self.placement();

        let correction = from_pitch_yaw_roll_degrees(placement.pitch_correction_degrees, 0.0, 0.0);
        let beam_direction = front_of(&(parent_rotation * correction));

        // The nudge is in world axes, so it does not follow the hilt's rotation
        let position = parent_position
            + front_of(&parent_rotation) * placement.forward_offset
            + placement.world_nudge;

        SpawnTransform {
            position,
            emit_orientation: orientation_of(beam_direction),
        }
    }

    /// Full property set for an emitter attached to `parent_id`
    pub fn emitter_properties(
        &self,
        parent_id: EntityId,
        transform: &SpawnTransform,
        color: Color,
        should_trail: bool,
    ) -> ParticleEffectProperties {
        ParticleEffectProperties {
            position: transform.position,
            emit_orientation: transform.emit_orientation,
            parent_id: Some(parent_id),
            is_emitting: false,
            color_start: color,
            color_finish: color,
            textures: self.config.texture.clone(),
            emitter_should_trail: should_trail,
            simulation: self.config.particles.clone(),
        }
    }

    /// Create an emitter for a hilt and return its handle
    ///
    /// The emitter starts switched off.
    pub fn spawn(
        &self,
        host: &mut dyn EntityHost,
        parent_id: EntityId,
        parent: &EntityProperties,
        color: Color,
        should_trail: bool,
    ) -> BeamEmitter {
        let transform = self.compute_spawn_transform(parent.position, parent.rotation);
        let properties = self.emitter_properties(parent_id, &transform, color, should_trail);
        let id = host.add_entity(properties);

        log::debug!(
            "Spawned {} emitter {} for {} at ({:.3}, {:.3}, {:.3})",
            if should_trail { "trail" } else { "beam" },
            id,
            parent_id,
            transform.position.x,
            transform.position.y,
            transform.position.z
        );

        BeamEmitter::new(id, color)
    }
}

impl Default for BeamPlacer {
    fn default() -> Self {
        Self::new(BeamConfig::default())
    }
}
