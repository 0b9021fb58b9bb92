// Host-side tests for the particle field: population, bounds, connections, resize.

mod common;

use common::{still_particle, DrawCall, RecordingSurface};
use glam::Vec2;
use glowfield_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(seed: u64, width: f32, height: f32) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(FieldParams::default(), width, height, &mut rng).expect("valid params")
}

fn assert_in_bounds(field: &ParticleField) {
    let b = field.bounds();
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            (0.0..=b.x).contains(&p.position.x) && (0.0..=b.y).contains(&p.position.y),
            "particle {i} at {:?} escaped {:?}",
            p.position,
            b
        );
        assert!(p.radius() >= p.base_radius());
    }
}

#[test]
fn new_field_has_fixed_population() {
    let field = make_field(1, 800.0, 600.0);
    assert_eq!(field.particles().len(), 40);
    assert_eq!(field.pointer(), Pointer::Absent);
    assert_in_bounds(&field);
}

#[test]
fn invalid_params_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let params = FieldParams::default().with_particle_count(0);
    let err = ParticleField::new(params, 800.0, 600.0, &mut rng).err();
    assert_eq!(err, Some(ParamsError::NoParticles));
}

#[test]
fn hundred_frames_without_pointer_stay_in_bounds() {
    let mut field = make_field(42, 800.0, 600.0);
    let mut surface = RecordingSurface::default();
    for _ in 0..100 {
        field.tick(&mut surface);
        assert_in_bounds(&field);
    }
    assert_eq!(field.particles().len(), 40);
}

#[test]
fn pointer_sweeps_keep_invariants() {
    let mut field = make_field(9, 800.0, 600.0);
    for frame in 0..300 {
        if frame % 50 == 49 {
            field.pointer_left();
        } else {
            let t = frame as f32 / 300.0;
            field.pointer_moved(800.0 * t, 300.0 + 200.0 * (t * 6.0).sin());
        }
        field.update();
        assert_in_bounds(&field);
    }
}

#[test]
fn pointer_slot_is_last_writer_wins() {
    let mut field = make_field(3, 800.0, 600.0);
    field.pointer_moved(10.0, 20.0);
    field.pointer_moved(30.0, 40.0);
    assert_eq!(field.pointer(), Pointer::Present(Vec2::new(30.0, 40.0)));
    assert_eq!(field.pointer().position(), Some(Vec2::new(30.0, 40.0)));
    field.update();
    // Reading the pointer does not consume it.
    assert_eq!(field.pointer(), Pointer::Present(Vec2::new(30.0, 40.0)));
    field.pointer_left();
    assert_eq!(field.pointer().position(), None);
}

#[test]
fn resize_mid_run_clamps_to_new_bounds() {
    let mut field = make_field(5, 800.0, 600.0);
    let mut surface = RecordingSurface::default();
    for _ in 0..20 {
        field.tick(&mut surface);
    }
    field.resize(400.0, 300.0);
    assert_eq!(field.bounds(), Vec2::new(400.0, 300.0));
    for _ in 0..10 {
        field.tick(&mut surface);
        assert_in_bounds(&field);
    }
}

#[test]
fn far_pairs_are_not_connected() {
    let params = FieldParams::default();
    let field = ParticleField::from_particles(
        params,
        vec![
            still_particle(100.0, 100.0, 2.0, PASTEL_PALETTE[0]),
            still_particle(250.0, 100.0, 2.0, PASTEL_PALETTE[1]),
            still_particle(100.0, 400.0, 2.0, PASTEL_PALETTE[2]),
        ],
        800.0,
        600.0,
    );
    assert!(field.connections().is_empty());
}

#[test]
fn connection_alpha_fades_with_distance() {
    let field = ParticleField::from_particles(
        FieldParams::default(),
        vec![
            still_particle(100.0, 100.0, 2.0, PASTEL_PALETTE[0]),
            still_particle(175.0, 100.0, 2.0, PASTEL_PALETTE[4]),
        ],
        800.0,
        600.0,
    );
    let conns = field.connections();
    assert_eq!(conns.len(), 1);
    let c = conns[0];
    assert!((c.from_color.a - 0.075).abs() < 1e-6);
    assert!((c.to_color.a - 0.075).abs() < 1e-6);
    assert!((c.alpha() - 0.075).abs() < 1e-6);
    assert_eq!((c.from_color.r, c.from_color.g, c.from_color.b), (255, 223, 223));
    assert_eq!((c.to_color.r, c.to_color.g, c.to_color.b), (230, 230, 250));
    assert_eq!(c.from, Vec2::new(100.0, 100.0));
    assert_eq!(c.to, Vec2::new(175.0, 100.0));
}

#[test]
fn every_close_pair_is_connected_once() {
    // Three particles in a tight cluster: all three pairs are close.
    let field = ParticleField::from_particles(
        FieldParams::default(),
        vec![
            still_particle(100.0, 100.0, 2.0, PASTEL_PALETTE[0]),
            still_particle(110.0, 100.0, 2.0, PASTEL_PALETTE[1]),
            still_particle(100.0, 110.0, 2.0, PASTEL_PALETTE[2]),
        ],
        800.0,
        600.0,
    );
    assert_eq!(field.connections().len(), 3);
}

#[test]
fn tick_draws_trail_first_then_particles_then_lines() {
    let mut field = ParticleField::from_particles(
        FieldParams::default(),
        vec![
            still_particle(100.0, 100.0, 2.0, PASTEL_PALETTE[0]),
            still_particle(150.0, 100.0, 3.0, PASTEL_PALETTE[1]),
        ],
        800.0,
        600.0,
    );
    let mut surface = RecordingSurface::default();
    field.tick(&mut surface);

    assert_eq!(surface.calls.len(), 1 + 2 * 2 + 1);
    assert_eq!(
        surface.calls[0],
        DrawCall::Rect {
            origin: Vec2::ZERO,
            size: Vec2::new(800.0, 600.0),
            color: TRAIL_WHITE,
        }
    );
    assert!(matches!(surface.calls[1], DrawCall::Circle { .. }));
    assert!(matches!(surface.calls[2], DrawCall::Halo { .. }));
    assert!(matches!(surface.calls[3], DrawCall::Circle { .. }));
    assert!(matches!(surface.calls[4], DrawCall::Halo { .. }));
    match surface.lines()[0] {
        DrawCall::Line { width, .. } => assert_eq!(*width, 0.5),
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn tick_moves_particles_exactly_like_update() {
    let mut ticked = make_field(11, 800.0, 600.0);
    let mut updated = make_field(11, 800.0, 600.0);
    ticked.pointer_moved(400.0, 300.0);
    updated.pointer_moved(400.0, 300.0);
    let mut surface = RecordingSurface::default();
    for _ in 0..30 {
        ticked.tick(&mut surface);
        updated.update();
    }
    for (a, b) in ticked.particles().iter().zip(updated.particles()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.radius(), b.radius());
    }
    assert_eq!(
        surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .count(),
        30 * 40
    );
}

#[test]
fn same_seed_same_field() {
    let a = make_field(77, 640.0, 480.0);
    let b = make_field(77, 640.0, 480.0);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.color(), pb.color());
    }
}
