//! Host entity interface
//!
//! The capability set a host engine exposes to entity scripts. Mutations are
//! fire-and-forget from the script's point of view: callers may inspect the
//! returned error, but nothing in the host's state depends on them doing so.

use super::{EntityEdit, EntityId, EntityProperties, ParticleEffectProperties};
use thiserror::Error;

/// Errors reported by a host for a rejected request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No live entity has this handle
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// The entity exists but does not accept this kind of edit
    #[error("Entity {0} does not accept particle edits")]
    WrongEntityType(EntityId),
}

/// Entity store and mutation API provided by the host engine
pub trait EntityHost {
    /// Create a particle effect entity and return its handle
    fn add_entity(&mut self, properties: ParticleEffectProperties) -> EntityId;

    /// Apply a partial property update
    fn edit_entity(&mut self, id: EntityId, edit: EntityEdit) -> Result<(), HostError>;

    /// Delete an entity and everything parented to it
    fn delete_entity(&mut self, id: EntityId) -> Result<(), HostError>;

    /// Read the world transform of an entity, if it still exists
    fn get_entity_properties(&self, id: EntityId) -> Option<EntityProperties>;
}
