//! Light saber beam
//!
//! Placement math, color choice and emission state for the particle emitter
//! parented to a saber hilt.

pub mod palette;
pub mod state;
pub mod placer;
pub mod emitter;

pub use palette::ColorPalette;
pub use state::EmitterState;
pub use placer::{BeamPlacer, SpawnTransform};
pub use emitter::BeamEmitter;
