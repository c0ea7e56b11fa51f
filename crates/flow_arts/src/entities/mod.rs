//! Host entity model
//!
//! Handles, property bags and the host interface scripts talk to, plus an
//! in-memory host for tests and demos.

pub mod id;
pub mod properties;
pub mod host;
pub mod memory;

pub use id::EntityId;
pub use properties::{Color, EntityEdit, EntityProperties, ParticleEffectProperties, ParticleSimulation};
pub use host::{EntityHost, HostError};
pub use memory::{HostOp, InMemoryHost};
