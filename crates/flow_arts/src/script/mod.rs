//! Entity scripts and their lifecycle

pub mod light_saber;
pub mod runner;

#[cfg(test)]
mod tests;

pub use light_saber::LightSaber;
pub use runner::ScriptRunner;

use crate::entities::{EntityHost, EntityId, HostError};
use thiserror::Error;

/// Entity script lifecycle trait
///
/// The host creates one instance per entity and calls these hooks on a
/// single thread, one at a time.
pub trait EntityScript {
    /// Called once after the script is attached to `entity`
    fn preload(&mut self, entity: EntityId, host: &mut dyn EntityHost);

    /// Called once before the script is dropped
    fn unload(&mut self, host: &mut dyn EntityHost);

    /// A hand started holding the entity
    fn start_near_grab(&mut self, _host: &mut dyn EntityHost) {}

    /// The entity is still held; sent every frame while grabbed
    fn continue_near_grab(&mut self, _host: &mut dyn EntityHost) {}

    /// The entity was let go
    fn release_grab(&mut self, _host: &mut dyn EntityHost) {}
}

/// Grab events the host dispatches to scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptEvent {
    /// See [`EntityScript::start_near_grab`]
    StartNearGrab,
    /// See [`EntityScript::continue_near_grab`]
    ContinueNearGrab,
    /// See [`EntityScript::release_grab`]
    ReleaseGrab,
}

/// Script lifecycle errors
#[derive(Error, Debug)]
pub enum ScriptError {
    /// No script is attached to the entity
    #[error("No script attached to entity {0}")]
    NotAttached(EntityId),

    /// A script is already attached to the entity
    #[error("Entity {0} already has a script attached")]
    AlreadyAttached(EntityId),

    /// Host error propagated to script level
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}
