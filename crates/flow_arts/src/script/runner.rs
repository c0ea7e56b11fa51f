//! Script runner
//!
//! Owns one script instance per entity and forwards lifecycle calls to it,
//! playing the part of the host engine's script manager.

use super::{EntityScript, ScriptError, ScriptEvent};
use crate::entities::{EntityHost, EntityId, HostError};
use std::collections::HashMap;

/// Per-entity script registry and dispatcher
#[derive(Default)]
pub struct ScriptRunner {
    scripts: HashMap<EntityId, Box<dyn EntityScript>>,
}

impl ScriptRunner {
    /// Create an empty runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a script to a live entity and preload it
    pub fn attach(
        &mut self,
        entity: EntityId,
        mut script: Box<dyn EntityScript>,
        host: &mut dyn EntityHost,
    ) -> Result<(), ScriptError> {
        if self.scripts.contains_key(&entity) {
            return Err(ScriptError::AlreadyAttached(entity));
        }
        if host.get_entity_properties(entity).is_none() {
            return Err(HostError::EntityNotFound(entity).into());
        }

        log::debug!("Preloading script for {}", entity);
        script.preload(entity, host);
        self.scripts.insert(entity, script);
        Ok(())
    }

    /// Forward a grab event to the entity's script
    pub fn dispatch(
        &mut self,
        entity: EntityId,
        event: ScriptEvent,
        host: &mut dyn EntityHost,
    ) -> Result<(), ScriptError> {
        let script = self
            .scripts
            .get_mut(&entity)
            .ok_or(ScriptError::NotAttached(entity))?;

        log::trace!("Dispatching {:?} to {}", event, entity);
        match event {
            ScriptEvent::StartNearGrab => script.start_near_grab(host),
            ScriptEvent::ContinueNearGrab => script.continue_near_grab(host),
            ScriptEvent::ReleaseGrab => script.release_grab(host),
        }
        Ok(())
    }

    /// Unload the entity's script and drop it
    pub fn detach(&mut self, entity: EntityId, host: &mut dyn EntityHost) -> Result<(), ScriptError> {
        let mut script = self
            .scripts
            .remove(&entity)
            .ok_or(ScriptError::NotAttached(entity))?;

        log::debug!("Unloading script for {}", entity);
        script.unload(host);
        Ok(())
    }

    /// Unload every script, e.g. on shutdown
    pub fn detach_all(&mut self, host: &mut dyn EntityHost) {
        for (entity, mut script) in self.scripts.drain() {
            log::debug!("Unloading script for {}", entity);
            script.unload(host);
        }
    }

    /// Whether a script is attached to the entity
    pub fn is_attached(&self, entity: EntityId) -> bool {
        self.scripts.contains_key(&entity)
    }

    /// Number of attached scripts
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Whether no scripts are attached
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}
