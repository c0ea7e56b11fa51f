//! Light saber demo
//!
//! Drives one hilt through load, grab, hold, release and unload against the
//! in-memory host and logs what the script asked the host to do.
//!
//! Usage: `saber_demo [CONFIG.toml|CONFIG.ron] [--seed N] [--trail]`

use clap::Parser;
use flow_arts::entities::HostOp;
use flow_arts::foundation::logging;
use flow_arts::foundation::math::from_pitch_yaw_roll_degrees;
use flow_arts::prelude::*;
use std::path::PathBuf;

/// Frames the hilt stays held between grab and release
const HOLD_FRAMES: usize = 3;

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "saber_demo")]
#[command(about = "Runs a light saber hilt through load, grab, release and unload")]
struct DemoArgs {
    /// Beam config file (.toml or .ron); built-in defaults when omitted
    config: Option<PathBuf>,

    /// Seed for the blade color pick
    #[arg(long)]
    seed: Option<u64>,

    /// Spawn the trail emitter alongside the beam
    #[arg(long)]
    trail: bool,
}

impl DemoArgs {
    fn load_config(&self) -> Result<BeamConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => {
                log::info!("Loading beam config from {}", path.display());
                BeamConfig::load_from_file(path)?
            }
            None => BeamConfig::default(),
        };
        let config = if self.trail { config.with_trail(true) } else { config };
        config.validate()?;
        Ok(config)
    }
}

fn run(args: &DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.load_config()?;
    let saber = match args.seed {
        Some(seed) => LightSaber::with_seed(config, seed),
        None => LightSaber::new(config),
    };

    let mut host = InMemoryHost::new();
    let hilt = host.add_model(
        Vec3::new(0.0, 1.0, -0.6),
        from_pitch_yaw_roll_degrees(0.0, 30.0, 0.0),
    );
    let mut runner = ScriptRunner::new();

    runner.attach(hilt, Box::new(saber), &mut host)?;
    for child in host.children(hilt) {
        if let Some(effect) = host.particle_effect(child) {
            log::info!(
                "Emitter {} at ({:.3}, {:.3}, {:.3}), color ({}, {}, {}), trail={}",
                child,
                effect.position.x,
                effect.position.y,
                effect.position.z,
                effect.color_start.red,
                effect.color_start.green,
                effect.color_start.blue,
                effect.emitter_should_trail
            );
        }
    }

    runner.dispatch(hilt, ScriptEvent::StartNearGrab, &mut host)?;
    for _ in 0..HOLD_FRAMES {
        runner.dispatch(hilt, ScriptEvent::ContinueNearGrab, &mut host)?;
    }
    runner.dispatch(hilt, ScriptEvent::ReleaseGrab, &mut host)?;
    runner.detach(hilt, &mut host)?;

    for op in host.ops() {
        match op {
            HostOp::Add(id) => log::info!("add    {}", id),
            HostOp::Edit(id, edit) => log::info!("edit   {} {:?}", id, edit),
            HostOp::Delete(id) => log::info!("delete {}", id),
        }
    }
    log::info!("{} host requests, {} entities left", host.ops().len(), host.len());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args = DemoArgs::parse();
    run(&args)
}
