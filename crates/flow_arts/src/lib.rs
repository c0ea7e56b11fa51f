//! # Flow Arts
//!
//! Entity scripts for grabbable flow-arts props. The light saber script
//! parents a particle beam to a hilt entity, lights it while the hilt is held
//! and removes it when the hilt unloads.
//!
//! ## Quick Start
//!
//! ```rust
//! use flow_arts::prelude::*;
//!
//! let mut host = InMemoryHost::new();
//! let hilt = host.add_model(Vec3::new(0.0, 1.0, 0.0), Quat::identity());
//!
//! let mut runner = ScriptRunner::new();
//! runner.attach(hilt, Box::new(LightSaber::new(BeamConfig::default())), &mut host)?;
//! runner.dispatch(hilt, ScriptEvent::StartNearGrab, &mut host)?;
//! runner.dispatch(hilt, ScriptEvent::ReleaseGrab, &mut host)?;
//! runner.detach(hilt, &mut host)?;
//! # Ok::<(), ScriptError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod entities;
pub mod beam;
pub mod script;

/// Common imports for script users
pub mod prelude {
    pub use crate::{
        beam::{BeamEmitter, BeamPlacer, ColorPalette, EmitterState, SpawnTransform},
        config::{BeamConfig, Config, ConfigError, PlacementConfig},
        entities::{
            Color, EntityEdit, EntityHost, EntityId, EntityProperties, HostError, InMemoryHost,
            ParticleEffectProperties, ParticleSimulation,
        },
        foundation::math::{Quat, Vec3},
        script::{EntityScript, LightSaber, ScriptError, ScriptEvent, ScriptRunner},
    };
}
