//! In-memory reference host
//!
//! Stores entities in a slot map and records every request it receives, so
//! scripts can be exercised without a running engine. No simulation happens
//! here: particle effects are just property bags.

use super::{
    EntityEdit, EntityHost, EntityId, EntityProperties, HostError, ParticleEffectProperties,
};
use crate::foundation::math::{Quat, Vec3};
use slotmap::SlotMap;

/// Stored entity
#[derive(Debug, Clone)]
enum EntityRecord {
    /// Plain model entity, e.g. the saber hilt
    Model(EntityProperties),
    /// Particle effect entity
    ParticleEffect(Box<ParticleEffectProperties>),
}

impl EntityRecord {
    fn parent_id(&self) -> Option<EntityId> {
        match self {
            Self::Model(_) => None,
            Self::ParticleEffect(properties) => properties.parent_id,
        }
    }

    fn transform(&self) -> EntityProperties {
        match self {
            Self::Model(properties) => *properties,
            Self::ParticleEffect(properties) => EntityProperties {
                position: properties.position,
                rotation: properties.emit_orientation,
            },
        }
    }
}

/// A request received by the host, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    /// `add_entity` created this entity
    Add(EntityId),
    /// `edit_entity` was called, whether or not it succeeded
    Edit(EntityId, EntityEdit),
    /// `delete_entity` was called, whether or not it succeeded
    Delete(EntityId),
}

/// Entity host backed by a slot map
#[derive(Debug, Default)]
pub struct InMemoryHost {
    entities: SlotMap<EntityId, EntityRecord>,
    ops: Vec<HostOp>,
}

impl InMemoryHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model entity that scripts can attach to
    ///
    /// Not recorded in the request log; it stands in for content the host
    /// loaded on its own.
    pub fn add_model(&mut self, position: Vec3, rotation: Quat) -> EntityId {
        let id = self
            .entities
            .insert(EntityRecord::Model(EntityProperties { position, rotation }));
        log::debug!("Host created model {}", id);
        id
    }

    /// Look up a stored particle effect
    pub fn particle_effect(&self, id: EntityId) -> Option<&ParticleEffectProperties> {
        match self.entities.get(id)? {
            EntityRecord::ParticleEffect(properties) => Some(&**properties),
            EntityRecord::Model(_) => None,
        }
    }

    /// Whether the handle refers to a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the host holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Handles of the entities directly parented to `id`
    pub fn children(&self, id: EntityId) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, record)| record.parent_id() == Some(id))
            .map(|(child, _)| child)
            .collect()
    }

    /// Every request received so far
    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    /// Number of edit requests addressed to `id`
    pub fn edit_count(&self, id: EntityId) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, HostOp::Edit(target, _) if *target == id))
            .count()
    }

    /// Number of delete requests addressed to `id`
    pub fn delete_count(&self, id: EntityId) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, HostOp::Delete(target) if *target == id))
            .count()
    }

    /// Forget the request log
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn remove_tree(&mut self, id: EntityId) {
        for child in self.children(id) {
            self.remove_tree(child);
        }
        self.entities.remove(id);
    }
}

impl EntityHost for InMemoryHost {
    fn add_entity(&mut self, properties: ParticleEffectProperties) -> EntityId {
        let id = self
            .entities
            .insert(EntityRecord::ParticleEffect(Box::new(properties)));
        self.ops.push(HostOp::Add(id));
        log::debug!("Host created particle effect {}", id);
        id
    }

    fn edit_entity(&mut self, id: EntityId, edit: EntityEdit) -> Result<(), HostError> {
        self.ops.push(HostOp::Edit(id, edit.clone()));

        match self.entities.get_mut(id) {
            Some(EntityRecord::ParticleEffect(properties)) => {
                edit.apply(properties);
                Ok(())
            }
            Some(EntityRecord::Model(_)) => Err(HostError::WrongEntityType(id)),
            None => Err(HostError::EntityNotFound(id)),
        }
    }

    fn delete_entity(&mut self, id: EntityId) -> Result<(), HostError> {
        self.ops.push(HostOp::Delete(id));

        if !self.entities.contains_key(id) {
            return Err(HostError::EntityNotFound(id));
        }
        self.remove_tree(id);
        log::debug!("Host deleted {}", id);
        Ok(())
    }

    fn get_entity_properties(&self, id: EntityId) -> Option<EntityProperties> {
        self.entities.get(id).map(EntityRecord::transform)
    }
}
