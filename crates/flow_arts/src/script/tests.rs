//! Light saber lifecycle scenarios against the in-memory host

use super::*;
use crate::beam::ColorPalette;
use crate::config::BeamConfig;
use crate::entities::{EntityHost, HostOp, InMemoryHost};
use crate::foundation::math::{Quat, Vec3};
use approx::assert_relative_eq;

fn hilt(host: &mut InMemoryHost) -> EntityId {
    host.add_model(Vec3::new(0.0, 1.2, -0.5), Quat::identity())
}

fn loaded_saber(host: &mut InMemoryHost, config: BeamConfig) -> (EntityId, LightSaber) {
    let entity = hilt(host);
    let mut saber = LightSaber::with_seed(config, 1);
    saber.preload(entity, host);
    (entity, saber)
}

fn emitting(host: &InMemoryHost, saber: &LightSaber) -> bool {
    let beam = saber.beam().expect("beam created");
    host.particle_effect(beam.id()).expect("beam alive").is_emitting
}

#[test]
fn test_load_creates_one_switched_off_beam() {
    let mut host = InMemoryHost::new();
    let (entity, saber) = loaded_saber(&mut host, BeamConfig::default());

    let beam = saber.beam().unwrap();
    assert_eq!(host.ops(), &[HostOp::Add(beam.id())]);
    assert_eq!(host.children(entity), vec![beam.id()]);
    assert!(!emitting(&host, &saber));
    assert!(!saber.is_emitting());
    assert!(!saber.is_grabbed());
    assert_eq!(saber.entity(), Some(entity));
    assert!(saber.trail().is_none());
}

#[test]
fn test_load_places_beam_off_the_hilt() {
    let mut host = InMemoryHost::new();
    let (_, saber) = loaded_saber(&mut host, BeamConfig::default());

    let stored = host.particle_effect(saber.beam().unwrap().id()).unwrap();
    let expected = Vec3::new(0.0, 1.2, -0.5) + Vec3::new(0.0, 0.0, -0.1) + Vec3::new(-0.035, 0.0, 0.1);
    assert_relative_eq!(stored.position, expected, epsilon = 1e-5);
}

#[test]
fn test_color_comes_from_palette_and_is_used_for_start_and_finish() {
    let mut host = InMemoryHost::new();
    let (_, saber) = loaded_saber(&mut host, BeamConfig::default());

    let color = saber.color().unwrap();
    assert!(ColorPalette::default().entries().contains(&color));

    let stored = host.particle_effect(saber.beam().unwrap().id()).unwrap();
    assert_eq!(stored.color_start, color);
    assert_eq!(stored.color_finish, color);
}

#[test]
fn test_both_palette_entries_get_used() {
    let mut seen = Vec::new();
    for seed in 0..64 {
        let mut host = InMemoryHost::new();
        let entity = hilt(&mut host);
        let mut saber = LightSaber::with_seed(BeamConfig::default(), seed);
        saber.preload(entity, &mut host);

        let color = saber.color().unwrap();
        if !seen.contains(&color) {
            seen.push(color);
        }
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_grab_and_release() {
    let mut host = InMemoryHost::new();
    let (_, mut saber) = loaded_saber(&mut host, BeamConfig::default());

    saber.start_near_grab(&mut host);
    assert!(emitting(&host, &saber));
    assert!(saber.is_grabbed());

    saber.continue_near_grab(&mut host);
    assert!(emitting(&host, &saber));

    saber.release_grab(&mut host);
    assert!(!emitting(&host, &saber));
    assert!(!saber.is_grabbed());
}

#[test]
fn test_double_grab_sends_single_edit() {
    let mut host = InMemoryHost::new();
    let (_, mut saber) = loaded_saber(&mut host, BeamConfig::default());
    let beam = saber.beam().unwrap().id();

    saber.start_near_grab(&mut host);
    saber.start_near_grab(&mut host);

    assert!(emitting(&host, &saber));
    assert_eq!(host.edit_count(beam), 1);
}

#[test]
fn test_release_without_grab_is_a_no_op() {
    let mut host = InMemoryHost::new();
    let (_, mut saber) = loaded_saber(&mut host, BeamConfig::default());
    let beam = saber.beam().unwrap().id();

    saber.release_grab(&mut host);

    assert!(!emitting(&host, &saber));
    assert_eq!(host.edit_count(beam), 0);
}

#[test]
fn test_unload_deletes_beam_once() {
    let mut host = InMemoryHost::new();
    let (entity, mut saber) = loaded_saber(&mut host, BeamConfig::default());
    let beam = saber.beam().unwrap().id();

    saber.start_near_grab(&mut host);
    saber.unload(&mut host);
    saber.unload(&mut host);

    assert_eq!(host.delete_count(beam), 1);
    assert!(!host.contains(beam));
    assert!(host.contains(entity));
    assert!(saber.beam().is_none());
}

#[test]
fn test_callbacks_after_unload_are_no_ops() {
    let mut host = InMemoryHost::new();
    let (_, mut saber) = loaded_saber(&mut host, BeamConfig::default());
    saber.unload(&mut host);
    host.clear_ops();

    saber.start_near_grab(&mut host);
    saber.release_grab(&mut host);

    assert!(host.ops().is_empty());
}

#[test]
fn test_second_preload_keeps_first_hilt_and_beam() {
    let mut host = InMemoryHost::new();
    let (first, mut saber) = loaded_saber(&mut host, BeamConfig::default());
    let beam = saber.beam().unwrap().id();
    let second = hilt(&mut host);

    saber.preload(second, &mut host);

    assert_eq!(saber.entity(), Some(first));
    assert_eq!(saber.beam().unwrap().id(), beam);
    assert_eq!(host.children(first), vec![beam]);
    assert!(host.children(second).is_empty());
    assert_eq!(host.ops(), &[HostOp::Add(beam)]);
}

#[test]
fn test_preload_of_missing_entity_leaves_script_inert() {
    let mut host = InMemoryHost::new();
    let entity = hilt(&mut host);
    host.delete_entity(entity).unwrap();
    host.clear_ops();

    let mut saber = LightSaber::with_seed(BeamConfig::default(), 3);
    saber.preload(entity, &mut host);
    saber.start_near_grab(&mut host);
    saber.release_grab(&mut host);
    saber.unload(&mut host);

    assert!(saber.beam().is_none());
    assert!(host.ops().is_empty());
}

#[test]
fn test_unload_after_host_removed_parent_is_tolerated() {
    let mut host = InMemoryHost::new();
    let (entity, mut saber) = loaded_saber(&mut host, BeamConfig::default());
    let beam = saber.beam().unwrap().id();

    // Deleting the hilt takes the beam with it
    host.delete_entity(entity).unwrap();
    assert!(!host.contains(beam));

    saber.start_near_grab(&mut host);
    saber.unload(&mut host);
    assert_eq!(host.delete_count(beam), 1);
}

#[test]
fn test_trail_follows_beam() {
    let mut host = InMemoryHost::new();
    let (entity, mut saber) = loaded_saber(&mut host, BeamConfig::default().with_trail(true));

    let beam = saber.beam().unwrap().id();
    let trail = saber.trail().unwrap().id();
    assert_eq!(host.children(entity).len(), 2);

    let trail_props = host.particle_effect(trail).unwrap();
    assert!(trail_props.emitter_should_trail);
    assert_eq!(trail_props.color_start, saber.color().unwrap());
    assert!(!host.particle_effect(beam).unwrap().emitter_should_trail);

    saber.start_near_grab(&mut host);
    assert!(host.particle_effect(trail).unwrap().is_emitting);

    saber.release_grab(&mut host);
    assert!(!host.particle_effect(trail).unwrap().is_emitting);

    saber.unload(&mut host);
    assert_eq!(host.delete_count(beam), 1);
    assert_eq!(host.delete_count(trail), 1);
    assert!(host.children(entity).is_empty());
}

#[test]
fn test_runner_lifecycle() {
    let mut host = InMemoryHost::new();
    let entity = hilt(&mut host);
    let mut runner = ScriptRunner::new();

    runner
        .attach(entity, Box::new(LightSaber::with_seed(BeamConfig::default(), 9)), &mut host)
        .unwrap();
    assert!(runner.is_attached(entity));

    let beam = host.children(entity)[0];
    assert!(!host.particle_effect(beam).unwrap().is_emitting);

    runner.dispatch(entity, ScriptEvent::StartNearGrab, &mut host).unwrap();
    runner.dispatch(entity, ScriptEvent::ContinueNearGrab, &mut host).unwrap();
    assert!(host.particle_effect(beam).unwrap().is_emitting);

    runner.dispatch(entity, ScriptEvent::ReleaseGrab, &mut host).unwrap();
    assert!(!host.particle_effect(beam).unwrap().is_emitting);

    runner.detach(entity, &mut host).unwrap();
    assert!(!host.contains(beam));
    assert!(runner.is_empty());
}

#[test]
fn test_runner_rejects_double_attach() {
    let mut host = InMemoryHost::new();
    let entity = hilt(&mut host);
    let mut runner = ScriptRunner::new();

    runner.attach(entity, Box::new(LightSaber::default()), &mut host).unwrap();
    let result = runner.attach(entity, Box::new(LightSaber::default()), &mut host);

    assert!(matches!(result, Err(ScriptError::AlreadyAttached(id)) if id == entity));
    assert_eq!(host.children(entity).len(), 1);
}

#[test]
fn test_runner_rejects_missing_entity() {
    let mut host = InMemoryHost::new();
    let entity = hilt(&mut host);
    host.delete_entity(entity).unwrap();
    let mut runner = ScriptRunner::new();

    let result = runner.attach(entity, Box::new(LightSaber::default()), &mut host);
    assert!(matches!(result, Err(ScriptError::Host(HostError::EntityNotFound(_)))));
    assert!(!runner.is_attached(entity));
}

#[test]
fn test_runner_unknown_entity() {
    let mut host = InMemoryHost::new();
    let entity = hilt(&mut host);
    let mut runner = ScriptRunner::new();

    assert!(matches!(
        runner.dispatch(entity, ScriptEvent::StartNearGrab, &mut host),
        Err(ScriptError::NotAttached(_))
    ));
    assert!(matches!(runner.detach(entity, &mut host), Err(ScriptError::NotAttached(_))));
}

#[test]
fn test_runner_detach_all() {
    let mut host = InMemoryHost::new();
    let first = hilt(&mut host);
    let second = hilt(&mut host);
    let mut runner = ScriptRunner::new();
    runner.attach(first, Box::new(LightSaber::default()), &mut host).unwrap();
    runner.attach(second, Box::new(LightSaber::new(BeamConfig::default().with_trail(true))), &mut host).unwrap();

    runner.detach_all(&mut host);

    assert!(runner.is_empty());
    assert!(host.children(first).is_empty());
    assert!(host.children(second).is_empty());
    assert_eq!(host.len(), 2);
}
