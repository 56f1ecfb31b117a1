#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn config() -> FieldConfig {
    FieldConfig::default()
}

fn at(x: f64, y: f64) -> Particle {
    Particle {
        x,
        y,
        start_x: x,
        start_y: y,
        vx: 0.0,
        vy: 0.0,
        size: 2.0,
    }
}

fn field_of(particles: Vec<Particle>) -> FieldCore {
    FieldCore::with_particles(&config(), 800.0, 400.0, particles)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_spawns_exactly_one_hundred_particles() {
    let mut rng = SmallRng::seed_from_u64(42);
    let field = FieldCore::new(&config(), 800.0, 400.0, &mut rng);
    assert_eq!(field.particles().len(), 100);
}

#[test]
fn new_spawns_inside_bounds() {
    let mut rng = SmallRng::seed_from_u64(42);
    let field = FieldCore::new(&config(), 640.0, 400.0, &mut rng);
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x <= 640.0);
        assert!(p.y >= 0.0 && p.y <= 400.0);
    }
}

#[test]
fn new_respects_configured_count() {
    let mut rng = SmallRng::seed_from_u64(1);
    let cfg = FieldConfig {
        particle_count: 7,
        ..config()
    };
    let field = FieldCore::new(&cfg, 800.0, 400.0, &mut rng);
    assert_eq!(field.particles().len(), 7);
}

#[test]
fn new_field_has_no_pointer() {
    let mut rng = SmallRng::seed_from_u64(1);
    let field = FieldCore::new(&config(), 800.0, 400.0, &mut rng);
    assert!(field.pointer().position.is_none());
    assert_eq!(field.pointer().radius, 150.0);
}

#[test]
fn new_records_bounds() {
    let mut rng = SmallRng::seed_from_u64(1);
    let field = FieldCore::new(&config(), 1200.0, 400.0, &mut rng);
    let expected = Bounds {
        width: 1200.0,
        height: 400.0,
    };
    assert_eq!(field.bounds(), expected);
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn pointer_moved_then_left_clears_position() {
    let mut field = field_of(vec![]);
    field.pointer_moved(Point::new(10.0, 20.0));
    assert_eq!(field.pointer().position, Some(Point::new(10.0, 20.0)));
    field.pointer_left();
    assert!(field.pointer().position.is_none());
}

#[test]
fn step_applies_pointer_to_every_particle() {
    let mut field = field_of(vec![at(100.0, 100.0), at(120.0, 100.0)]);
    field.pointer_moved(Point::new(110.0, 100.0));
    field.step();
    let ps = field.particles();
    assert!(ps[0].x < 100.0);
    assert!(ps[1].x > 120.0);
}

#[test]
fn step_after_pointer_left_leaves_resting_particles_alone() {
    let mut field = field_of(vec![at(100.0, 100.0)]);
    field.pointer_moved(Point::new(110.0, 100.0));
    field.pointer_left();
    field.step();
    assert_eq!(field.particles()[0], at(100.0, 100.0));
}

// =============================================================
// Connections
// =============================================================

#[test]
fn coincident_particles_connect_at_max_opacity() {
    let field = field_of(vec![at(50.0, 50.0), at(50.0, 50.0)]);
    let links = field.connections().collect::<Vec<_>>();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].opacity, 0.5);
}

#[test]
fn distant_particles_do_not_connect() {
    let field = field_of(vec![at(0.0, 0.0), at(121.0, 0.0)]);
    assert_eq!(field.connections().count(), 0);
}

#[test]
fn particles_exactly_at_connection_distance_do_not_connect() {
    let field = field_of(vec![at(0.0, 0.0), at(120.0, 0.0)]);
    assert_eq!(field.connections().count(), 0);
}

#[test]
fn opacity_falls_off_linearly() {
    let field = field_of(vec![at(0.0, 0.0), at(60.0, 0.0)]);
    let link = field.connections().next().expect("pair within range");
    assert!((link.opacity - 0.25).abs() < 1e-12);
    assert_eq!(link.from, Point::new(0.0, 0.0));
    assert_eq!(link.to, Point::new(60.0, 0.0));
}

#[test]
fn each_unique_pair_is_visited_once() {
    let field = field_of(vec![
        at(0.0, 0.0),
        at(10.0, 0.0),
        at(20.0, 0.0),
        at(500.0, 0.0),
    ]);
    // Three close particles form three pairs; the far one joins none.
    assert_eq!(field.connections().count(), 3);
}

#[test]
fn link_opacity_helper_matches_field() {
    assert_eq!(link_opacity(0.0, 120.0, 0.5), Some(0.5));
    assert_eq!(link_opacity(120.0, 120.0, 0.5), None);
    assert_eq!(link_opacity(500.0, 120.0, 0.5), None);
}

#[test]
fn single_particle_has_no_connections() {
    let field = field_of(vec![at(0.0, 0.0)]);
    assert_eq!(field.connections().count(), 0);
}
