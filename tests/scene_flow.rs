#![allow(clippy::unwrap_used)]

use parascene::scene::{
    Command, Direction, InputMapper, LightGroup, LightKind, RingId, Scene, SceneConfig, Shading,
    ShadingMode, LANE_MAX, LANE_MIN,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn scene() -> Scene {
    init_tracing();
    Scene::new(SceneConfig::default()).unwrap()
}

fn press(scene: &mut Scene, input: &mut InputMapper, key: char) {
    if let Some(command) = input.key_down(key) {
        scene.apply(command);
    }
}

fn release(scene: &mut Scene, input: &mut InputMapper, key: char) {
    if let Some(command) = input.key_up(key) {
        scene.apply(command);
    }
}

#[test]
fn held_ring_key_bounces_after_three_hundred_frames() {
    let mut s = scene();
    let mut input = InputMapper::new();
    press(&mut s, &mut input, '1');
    for _ in 0..300 {
        s.tick(1.0 / 60.0);
    }
    let big = s.ring(RingId::Big).unwrap();
    assert!((big.oscillator().position() - LANE_MAX).abs() < f64::EPSILON);
    assert_eq!(big.oscillator().direction(), Direction::Down);

    release(&mut s, &mut input, '1');
    s.tick(1.0 / 60.0);
    let big = s.ring(RingId::Big).unwrap();
    assert!(!big.is_active());
    assert!((big.oscillator().position() - LANE_MAX).abs() < f64::EPSILON);
}

#[test]
fn rings_stay_in_lane_under_random_input() {
    let mut s = scene();
    let mut input = InputMapper::new();
    let keys = ['1', '2', '3'];
    for frame in 0..4_000usize {
        let key = keys[frame % 3];
        if frame % 97 < 60 {
            press(&mut s, &mut input, key);
        } else {
            release(&mut s, &mut input, key);
        }
        s.tick(1.0 / 60.0);
        for ring in RingId::ALL {
            let p = s.ring(ring).unwrap().oscillator().position();
            assert!((LANE_MIN..=LANE_MAX).contains(&p));
            let y = s.entity(s.ring(ring).unwrap().entity()).unwrap().transform.position.y;
            assert!((y - p).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn rings_move_independently() {
    let mut s = scene();
    s.apply(Command::SetRingMotion {
        ring: RingId::Small,
        active: true,
    });
    for _ in 0..20 {
        s.tick(0.016);
    }
    s.apply(Command::SetRingMotion {
        ring: RingId::Big,
        active: true,
    });
    for _ in 0..10 {
        s.tick(0.016);
    }
    let small = s.ring(RingId::Small).unwrap().oscillator().position();
    let big = s.ring(RingId::Big).unwrap().oscillator().position();
    let medium = s.ring(RingId::Medium).unwrap().oscillator().position();
    assert!((small - 9.0).abs() < 1e-9);
    assert!((big - 3.0).abs() < 1e-9);
    assert!(medium.abs() < f64::EPSILON);
}

#[test]
fn surfaces_ride_with_their_ring() {
    let mut s = scene();
    let small = s.ring(RingId::Small).unwrap().entity();
    let child = s.children(small).next().unwrap();
    let before = s.world_position(child).unwrap();
    s.apply(Command::SetRingMotion {
        ring: RingId::Small,
        active: true,
    });
    for _ in 0..100 {
        s.tick(0.0);
    }
    let after = s.world_position(child).unwrap();
    assert!((after.y - before.y - 30.0).abs() < 1e-9);
    assert!((after.x - before.x).abs() < 1e-9);
}

#[test]
fn keyboard_session_drives_materials_and_lights() {
    let mut s = scene();
    let mut input = InputMapper::new();

    press(&mut s, &mut input, 'q');
    let mobius = s.mobius();
    assert_eq!(
        s.active_material(mobius).unwrap().shading,
        Shading::Lit(ShadingMode::Lambert)
    );

    press(&mut s, &mut input, 'p');
    press(&mut s, &mut input, 's');
    s.tick(0.0);
    assert!(!s.light_group_on(LightGroup::Point));
    assert!(s
        .lights()
        .filter(|(_, l)| matches!(l.kind, LightKind::Spot { .. } | LightKind::Point { .. }))
        .all(|(_, l)| l.effective_intensity().abs() < f64::EPSILON));

    press(&mut s, &mut input, 't');
    assert_eq!(s.active_material(mobius).unwrap().shading, Shading::Basic);
    press(&mut s, &mut input, 't');
    assert_eq!(
        s.active_material(mobius).unwrap().shading,
        Shading::Lit(ShadingMode::Lambert)
    );
}

#[test]
fn holding_wireframe_key_toggles_once() {
    let mut s = scene();
    let mut input = InputMapper::new();
    for _ in 0..5 {
        press(&mut s, &mut input, '4');
    }
    assert!(s.wireframe());
    release(&mut s, &mut input, '4');
    press(&mut s, &mut input, '4');
    assert!(!s.wireframe());
}
