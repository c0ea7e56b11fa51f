//! Light saber entity script
//!
//! Spawns a beam emitter on the hilt when it loads, lights it while the hilt
//! is held, and removes it when the hilt unloads.

use super::EntityScript;
use crate::beam::{BeamEmitter, BeamPlacer};
use crate::config::BeamConfig;
use crate::entities::{Color, EntityHost, EntityId};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-hilt script state
#[derive(Debug)]
pub struct LightSaber {
    placer: BeamPlacer,
    rng: StdRng,
    entity: Option<EntityId>,
    beam: Option<BeamEmitter>,
    trail: Option<BeamEmitter>,
    is_grabbed: bool,
}

impl LightSaber {
    /// Create a script with an entropy-seeded color pick
    pub fn new(config: BeamConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a script whose color pick is reproducible
    pub fn with_seed(config: BeamConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: BeamConfig, rng: StdRng) -> Self {
        Self {
            placer: BeamPlacer::new(config),
            rng,
            entity: None,
            beam: None,
            trail: None,
            is_grabbed: false,
        }
    }

    /// Hilt entity the script is attached to
    pub fn entity(&self) -> Option<EntityId> {
        self.entity
    }

    /// Beam emitter, once created
    pub fn beam(&self) -> Option<&BeamEmitter> {
        self.beam.as_ref()
    }

    /// Trail emitter, when enabled and created
    pub fn trail(&self) -> Option<&BeamEmitter> {
        self.trail.as_ref()
    }

    /// Color bound to the blade
    pub fn color(&self) -> Option<Color> {
        self.beam.as_ref().map(BeamEmitter::color)
    }

    /// Whether a hand is holding the hilt
    pub fn is_grabbed(&self) -> bool {
        self.is_grabbed
    }

    /// Whether the beam is lit
    pub fn is_emitting(&self) -> bool {
        self.beam.as_ref().is_some_and(BeamEmitter::is_emitting)
    }

    fn emitters_mut(&mut self) -> impl Iterator<Item = &mut BeamEmitter> {
        self.beam.iter_mut().chain(self.trail.iter_mut())
    }

    fn set_emitting(&mut self, host: &mut dyn EntityHost, is_emitting: bool) {
        for emitter in self.emitters_mut() {
            emitter.set_emitting(host, is_emitting);
        }
    }

    fn create_beam(&mut self, entity: EntityId, host: &mut dyn EntityHost) {
        let Some(parent) = host.get_entity_properties(entity) else {
            log::warn!("Light saber {} vanished before its beam was created", entity);
            return;
        };

        // Picked once; the trail shares the blade color
        let color = self.placer.config().palette.pick(&mut self.rng);

        self.beam = Some(self.placer.spawn(host, entity, &parent, color, false));
        if self.placer.config().trail {
            self.trail = Some(self.placer.spawn(host, entity, &parent, color, true));
        }

        log::info!(
            "Light saber {} ready, blade color ({}, {}, {})",
            entity,
            color.red,
            color.green,
            color.blue
        );
    }
}

impl Default for LightSaber {
    fn default() -> Self {
        Self::new(BeamConfig::default())
    }
}

impl EntityScript for LightSaber {
    fn preload(&mut self, entity: EntityId, host: &mut dyn EntityHost) {
        if self.beam.is_some() {
            log::warn!("Light saber {} preloaded twice; keeping existing beam", entity);
            return;
        }
        self.entity = Some(entity);
        self.create_beam(entity, host);
    }

    fn unload(&mut self, host: &mut dyn EntityHost) {
        for emitter in [self.beam.take(), self.trail.take()].into_iter().flatten() {
            emitter.destroy(host);
        }
        self.is_grabbed = false;
    }

    fn start_near_grab(&mut self, host: &mut dyn EntityHost) {
        self.is_grabbed = true;
        self.set_emitting(host, true);
    }

    fn release_grab(&mut self, host: &mut dyn EntityHost) {
        self.is_grabbed = false;
        self.set_emitting(host, false);
    }
}
