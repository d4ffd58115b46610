//! Value clamps for random body generation.

use stellar_body::{StellarBodySize, MAX_STELLAR_BODY_SIZE};

/// Closest orbit a planet can occupy, in screen units
pub const MIN_ORBIT_DISTANCE: u32 = 150;
/// Farthest orbit a planet can occupy, in screen units
pub const MAX_ORBIT_DISTANCE: u32 = 1000;

/// Moons sit in a fixed close-orbit band around their planet
pub const MOON_MIN_ORBIT_DISTANCE: u32 = 25;
pub const MOON_MAX_ORBIT_DISTANCE: u32 = 50;

pub const MIN_ROTATION_SPEED: u32 = 10;
pub const MAX_ROTATION_SPEED: u32 = 100;

/// Size floor for a system's sun
pub const SUN_MIN_SIZE: u8 = 3;

/// Per-call clamps and overrides for [`random_stellar_body`]
///
/// Each field is independently defaulted; `BodyBounds::default()` describes a
/// planet-scale body with no satellites. When neither `mineral_count` nor
/// `gas_count` is set, the generator flips a coin: the body comes out either
/// mineral-bearing (1 mineral, 0 gas) or gas-bearing (0 mineral, 1 gas),
/// never both.
///
/// [`random_stellar_body`]: crate::generation::random_stellar_body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyBounds {
    /// Distinct mineral types to draw, if forced
    pub mineral_count: Option<usize>,
    /// Distinct gas types to draw, if forced
    pub gas_count: Option<usize>,
    /// Satellites to generate in this body's orbit
    pub satellite_count: usize,
    pub min_size: u8,
    pub max_size: u8,
    pub min_distance: u32,
    pub max_distance: u32,
    pub min_rotation_speed: u32,
    pub max_rotation_speed: u32,
}

impl Default for BodyBounds {
    fn default() -> Self {
        Self {
            mineral_count: None,
            gas_count: None,
            satellite_count: 0,
            min_size: 0,
            max_size: MAX_STELLAR_BODY_SIZE,
            min_distance: MIN_ORBIT_DISTANCE,
            max_distance: MAX_ORBIT_DISTANCE,
            min_rotation_speed: MIN_ROTATION_SPEED,
            max_rotation_speed: MAX_ROTATION_SPEED,
        }
    }
}

impl BodyBounds {
    /// Bounds for a system's sun: size floor, composition by coin flip
    pub fn sun() -> Self {
        Self {
            min_size: SUN_MIN_SIZE,
            ..Self::default()
        }
    }

    /// Bounds for a planet strictly smaller than its sun
    pub fn planet(sun_size: StellarBodySize, moon_count: usize) -> Self {
        Self {
            satellite_count: moon_count,
            min_size: 1,
            max_size: sun_size.value().saturating_sub(1),
            ..Self::default()
        }
    }

    /// Bounds for a moon capped at `max_size`, mineral-bearing, placed in the
    /// close-orbit band
    ///
    /// Callers derive `max_size` from the parent via
    /// [`StellarBodySize::smaller`], which keeps every satellite strictly
    /// smaller than its parent.
    pub fn moon(max_size: StellarBodySize) -> Self {
        Self {
            mineral_count: Some(1),
            gas_count: Some(0),
            min_size: 0,
            max_size: max_size.value(),
            min_distance: MOON_MIN_ORBIT_DISTANCE,
            max_distance: MOON_MAX_ORBIT_DISTANCE,
            ..Self::default()
        }
    }
}
