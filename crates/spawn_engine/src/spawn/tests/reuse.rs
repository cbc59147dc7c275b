//! Recycled objects must look exactly like fresh ones

use approx::assert_relative_eq;

use crate::foundation::math::Transform;
use crate::render::{CommandRecorder, RenderCommand};
use crate::spawn::{ObjectState, SpawnArea, SpawnAreaConfig, SpawnRange};

fn single_object_config() -> SpawnAreaConfig {
    SpawnAreaConfig {
        target_count: 1,
        pool_buffer: 0,
        fade_rate: 1.0,
        seed: Some(23),
        ..Default::default()
    }
}

/// Strip payloads so command sequences can be compared by shape
fn kinds(commands: &[RenderCommand]) -> Vec<&'static str> {
    commands
        .iter()
        .map(|cmd| match cmd {
            RenderCommand::Instantiate(_) => "instantiate",
            RenderCommand::Destroy(_) => "destroy",
            RenderCommand::SetActive(_, true) => "activate",
            RenderCommand::SetActive(_, false) => "deactivate",
            RenderCommand::SetTransform(..) => "transform",
            RenderCommand::SetColor(..) => "color",
            RenderCommand::SetAreaTransform(_) => "area",
        })
        .collect()
}

#[test]
fn test_reacquired_matches_fresh_except_identity() {
    let mut host = CommandRecorder::new();
    let mut area = SpawnArea::from_config(single_object_config(), &mut host).unwrap();
    let (handle, _) = area.active_objects().next().unwrap();
    let fresh: Vec<_> = host.commands_for(handle).cloned().collect();

    area.tick(0.25, &mut host);
    area.retire(handle, &mut host).unwrap();
    host.drain();

    let reused = area.acquire_from_pool(&mut host);
    assert_eq!(reused, handle);
    let recycled: Vec<_> = host.commands_for(handle).cloned().collect();

    assert_eq!(kinds(&fresh[..1]), ["instantiate"]);
    assert_eq!(kinds(&fresh[1..]), kinds(&recycled));
    assert_eq!(kinds(&recycled), ["transform", "color", "activate"]);

    if let RenderCommand::SetColor(_, color) = &recycled[1] {
        assert_relative_eq!(color.w, 1.0);
    } else {
        panic!("expected color command, got {:?}", recycled[1]);
    }
    if let RenderCommand::SetTransform(_, transform) = &recycled[0] {
        assert_eq!(transform.rotation, Transform::identity().rotation);
    } else {
        panic!("expected transform command, got {:?}", recycled[0]);
    }
}

#[test]
fn test_reacquire_resets_mid_fade_object() {
    let config = SpawnAreaConfig { lifetime: SpawnRange::fixed(2.0), ..single_object_config() };
    let mut host = CommandRecorder::new();
    let mut area = SpawnArea::from_config(config, &mut host).unwrap();
    let (handle, _) = area.active_objects().next().unwrap();

    // Into the fade, not finished
    for _ in 0..5 {
        area.tick(0.5, &mut host);
    }
    let faded = area.object(handle).unwrap().clone();
    assert_eq!(faded.state(), ObjectState::Fading);
    assert!(faded.color().alpha < 1.0);

    area.retire(handle, &mut host).unwrap();
    assert_eq!(area.object(handle).unwrap().state(), ObjectState::Pooled);
    area.tick(0.0, &mut host);

    let object = area.object(handle).unwrap();
    assert_eq!(object.state(), ObjectState::Alive);
    assert_relative_eq!(object.color().alpha, 1.0);
    assert_relative_eq!(object.remaining_lifetime(), 2.0);
    assert_ne!(object.transform().position, faded.transform().position);
    assert_ne!(object.rotation_rate(), faded.rotation_rate());
}

#[test]
fn test_pinned_lifetime_is_deterministic() {
    let config = SpawnAreaConfig {
        target_count: 20,
        lifetime: SpawnRange::fixed(3.5),
        ..single_object_config()
    };
    let area = SpawnArea::from_config(config, &mut CommandRecorder::new()).unwrap();
    for (_, object) in area.active_objects() {
        assert_relative_eq!(object.remaining_lifetime(), 3.5);
    }
}

#[test]
fn test_pinned_channel_is_constant() {
    let config = SpawnAreaConfig {
        target_count: 20,
        red: SpawnRange::fixed(17),
        blue: SpawnRange::new(0, 255),
        ..single_object_config()
    };
    let area = SpawnArea::from_config(config, &mut CommandRecorder::new()).unwrap();
    for (_, object) in area.active_objects() {
        assert_eq!(object.color().rgb[0], 17);
    }
}

#[test]
fn test_spawned_objects_stay_in_bounds() {
    let config = SpawnAreaConfig {
        target_count: 200,
        radius: 5.0,
        size: SpawnRange::new(0.5, 2.0),
        ..single_object_config()
    };
    let area = SpawnArea::from_config(config, &mut CommandRecorder::new()).unwrap();
    for (_, object) in area.active_objects() {
        let transform = object.transform();
        assert!(transform.position.norm() <= 5.0 + 1e-4);
        assert!((0.5..=2.0).contains(&transform.scale.x));
        assert_eq!(object.owner(), area.id());
    }
}
