use approx::assert_relative_eq;
use nalgebra::Point2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use star_system::{GalaxyStore, HexCoord};
use stellar_body::{Composition, StellarBody, StellarBodyId, StellarBodySize};
use system_generator::create_random_system;

use crate::frame::{FrameError, OrbitalFrame, ORBIT_RING_SCALE};

fn body(rng: &mut ChaChaRng, distance: f64, rotation_speed: f64) -> StellarBody {
    StellarBody {
        id: StellarBodyId::from_rng(rng),
        name: "test".to_string(),
        size: StellarBodySize::new(2),
        distance_from_center: distance,
        rotation_speed,
        composition: Composition::default(),
        orbit: vec![],
    }
}

#[test]
fn test_tick_rotates_by_speed_scaled_angle() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let mut frame = OrbitalFrame::new();

    let sun = body(&mut rng, 0.0, 0.0);
    let planet = body(&mut rng, 100.0, 100.0);

    let root = frame.insert_root(&sun, Point2::origin());
    let node = frame.attach(root, &planet, Point2::new(100.0, 0.0));

    // (90 * 5000 / 500000) * 100 = 90 degrees
    frame.tick(5000.0);

    let position = frame.world_position(node);
    assert_relative_eq!(position.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(position.y, 100.0, epsilon = 1e-9);
}

#[test]
fn test_tick_preserves_orbit_radius() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let mut frame = OrbitalFrame::new();

    let sun = body(&mut rng, 0.0, 0.0);
    let planet = body(&mut rng, 250.0, 25.0);

    let root = frame.insert_root(&sun, Point2::new(400.0, 300.0));
    let node = frame.attach(root, &planet, Point2::new(250.0, 0.0));

    for _ in 0..100 {
        frame.tick(16.0);
    }

    let offset = frame.world_position(node) - frame.world_position(root);
    assert_relative_eq!(offset.norm(), 250.0, epsilon = 1e-9);
}

#[test]
fn test_roots_and_still_bodies_do_not_move() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let mut frame = OrbitalFrame::new();

    // Root with nonzero speed: no parent, no revolution
    let sun = body(&mut rng, 0.0, 50.0);
    let still = body(&mut rng, 100.0, 0.0);

    let root = frame.insert_root(&sun, Point2::new(10.0, 20.0));
    let node = frame.attach(root, &still, Point2::new(100.0, 0.0));

    frame.tick(10_000.0);

    assert_eq!(frame.world_position(root), Point2::new(10.0, 20.0));
    assert_eq!(frame.local_position(node), Point2::new(100.0, 0.0));
}

#[test]
fn test_translating_a_parent_carries_its_satellites() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let mut frame = OrbitalFrame::new();

    let sun = body(&mut rng, 0.0, 0.0);
    let planet = body(&mut rng, 150.0, 15.0);
    let moon = body(&mut rng, 30.0, 100.0);

    let root = frame.insert_root(&sun, Point2::origin());
    let planet_node = frame.attach(root, &planet, Point2::new(150.0, 0.0));
    let moon_node = frame.attach(planet_node, &moon, Point2::new(30.0, 0.0));

    let moon_local = frame.local_position(moon_node);

    // Rigid-group translation: moving the planet moves the moon with it
    frame.set_local_position(planet_node, Point2::new(0.0, 150.0));

    assert_eq!(frame.local_position(moon_node), moon_local);
    let moon_world = frame.world_position(moon_node);
    assert_relative_eq!(moon_world.x, 30.0, epsilon = 1e-12);
    assert_relative_eq!(moon_world.y, 150.0, epsilon = 1e-12);
}

#[test]
fn test_nested_orbits_compose_root_first() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let mut frame = OrbitalFrame::new();

    let sun = body(&mut rng, 0.0, 0.0);
    let planet = body(&mut rng, 200.0, 100.0);
    let moon = body(&mut rng, 40.0, 100.0);

    let root = frame.insert_root(&sun, Point2::origin());
    let planet_node = frame.attach(root, &planet, Point2::new(200.0, 0.0));
    let moon_node = frame.attach(planet_node, &moon, Point2::new(40.0, 0.0));

    // Both rotate 90 degrees: planet to (0, 200), moon to (0, 40) relative
    frame.tick(5000.0);

    let planet_world = frame.world_position(planet_node);
    assert_relative_eq!(planet_world.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(planet_world.y, 200.0, epsilon = 1e-9);

    // Moon's world position composes with the parent's updated position
    let moon_world = frame.world_position(moon_node);
    assert_relative_eq!(moon_world.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(moon_world.y, 240.0, epsilon = 1e-9);
}

#[test]
fn test_orbit_radius_scales_distance() {
    let mut rng = ChaChaRng::seed_from_u64(6);
    let mut frame = OrbitalFrame::new();

    let planet = body(&mut rng, 250.0, 25.0);
    let root = frame.insert_root(&planet, Point2::origin());
    assert_relative_eq!(frame.orbit_radius(root), 250.0 * ORBIT_RING_SCALE);
}

#[test]
fn test_frame_builds_from_a_generated_system() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut store = GalaxyStore::new();

    let system = create_random_system(&mut rng, &mut store, HexCoord::new(0, 0)).unwrap();
    let frame =
        OrbitalFrame::from_system(&mut rng, &store, &system.record, Point2::origin()).unwrap();

    let moon_count: usize = system
        .planets
        .iter()
        .map(|planet| planet.orbit.len())
        .sum();
    assert_eq!(frame.len(), 1 + system.planets.len() + moon_count);

    let root = frame.roots()[0];
    assert_eq!(frame.node(root).body, system.sun.id);
    assert_eq!(frame.satellites(root).len(), system.planets.len());
}

#[test]
fn test_frame_rejects_unregistered_bodies() {
    let mut rng = ChaChaRng::seed_from_u64(43);
    let mut store = GalaxyStore::new();

    let system = create_random_system(&mut rng, &mut store, HexCoord::new(0, 0)).unwrap();

    // A store missing the system's bodies cannot back a frame
    let empty = GalaxyStore::new();
    let result = OrbitalFrame::from_system(&mut rng, &empty, &system.record, Point2::origin());
    assert_eq!(result.unwrap_err(), FrameError::UnknownBody(system.sun.id));
}

#[test]
fn test_spawn_places_satellites_at_quadrant_corners() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let mut frame = OrbitalFrame::new();

    let sun = body(&mut rng, 0.0, 0.0);
    let planet = body(&mut rng, 300.0, 10.0);

    let root = frame.insert_root(&sun, Point2::origin());
    let node = frame.spawn(&mut rng, root, &planet);

    let position = frame.local_position(node);
    assert_eq!(position.x.abs(), 300.0);
    assert_eq!(position.y.abs(), 300.0);
}
