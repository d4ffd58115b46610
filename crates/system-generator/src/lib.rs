//! Random star-system generation.
//!
//! Given a seeded RNG and an owned galaxy store, builds a tree of stellar
//! bodies (sun, planets, moons) with randomized size, orbit distance, rotation
//! speed, and mineral/gas composition, registering every record into the store
//! and assembling a star-system record that references the bodies by id.
//!
//! Generation runs once per system and produces static data; the per-frame
//! kinematics in the `orbit` crate operates on the result.

pub mod bounds;
pub mod generation;

// Re-export main entry points
pub use bounds::{
    BodyBounds, MAX_ORBIT_DISTANCE, MAX_ROTATION_SPEED, MIN_ORBIT_DISTANCE, MIN_ROTATION_SPEED,
    MOON_MAX_ORBIT_DISTANCE, MOON_MIN_ORBIT_DISTANCE, SUN_MIN_SIZE,
};
pub use generation::{create_random_system, random_stellar_body, GeneratedSystem, GenerationError};
