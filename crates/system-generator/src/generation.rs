//! Recursive stellar-body and star-system generation.

use log::debug;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::Serialize;
use thiserror::Error;

use star_system::{GalaxyStore, HexCoord, StarSystem, StarSystemId};
use stellar_body::{Composition, CompositionError, StellarBody, StellarBodyId, StellarBodySize};

use crate::bounds::BodyBounds;

/// Planets per system, inclusive
const MIN_PLANETS: usize = 1;
const MAX_PLANETS: usize = 10;

/// Moons per planet, inclusive
const MAX_MOONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Composition(#[from] CompositionError),
    #[error("size bounds are inverted: min {min} exceeds max {max}")]
    InvalidSizeBounds { min: u8, max: u8 },
    #[error("distance bounds are inverted: min {min} exceeds max {max}")]
    InvalidDistanceBounds { min: u32, max: u32 },
    #[error("rotation-speed bounds are inverted: min {min} exceeds max {max}")]
    InvalidRotationBounds { min: u32, max: u32 },
    #[error("a body of the smallest size class cannot carry satellites")]
    SatellitesOnSmallestBody,
}

/// The in-memory object graph returned by [`create_random_system`]
///
/// Everything here is also registered in the store; moons appear only as ids
/// in their planet's orbit list and resolve through the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSystem {
    pub record: StarSystem,
    pub sun: StellarBody,
    pub planets: Vec<StellarBody>,
}

fn validate(bounds: &BodyBounds) -> Result<(), GenerationError> {
    if bounds.min_size > bounds.max_size {
        return Err(GenerationError::InvalidSizeBounds {
            min: bounds.min_size,
            max: bounds.max_size,
        });
    }
    if bounds.min_distance > bounds.max_distance {
        return Err(GenerationError::InvalidDistanceBounds {
            min: bounds.min_distance,
            max: bounds.max_distance,
        });
    }
    if bounds.min_rotation_speed > bounds.max_rotation_speed {
        return Err(GenerationError::InvalidRotationBounds {
            min: bounds.min_rotation_speed,
            max: bounds.max_rotation_speed,
        });
    }
    Ok(())
}

/// Create a random stellar body within the given clamps and register it
///
/// Satellites are generated recursively, each strictly smaller than this body
/// and placed in the close-orbit band; only their ids land in the returned
/// body's orbit list. Every body in the subtree registers in the store before
/// this returns.
pub fn random_stellar_body(
    rng: &mut ChaChaRng,
    store: &mut GalaxyStore,
    bounds: &BodyBounds,
) -> Result<StellarBody, GenerationError> {
    validate(bounds)?;

    let (mineral_count, gas_count) = match (bounds.mineral_count, bounds.gas_count) {
        // Unspecified composition: a fair coin decides mineral-bearing or
        // gas-bearing, mutually exclusive by construction
        (None, None) => {
            if rng.random_bool(0.5) {
                (1, 0)
            } else {
                (0, 1)
            }
        }
        (minerals, gases) => (minerals.unwrap_or(0), gases.unwrap_or(0)),
    };

    let size = StellarBodySize::new(rng.random_range(bounds.min_size..=bounds.max_size));
    let distance_from_center = rng.random_range(bounds.min_distance..=bounds.max_distance);
    let rotation_speed = rng.random_range(bounds.min_rotation_speed..=bounds.max_rotation_speed);
    let composition = Composition::sample(rng, mineral_count, gas_count)?;

    let mut orbit = Vec::with_capacity(bounds.satellite_count);
    if bounds.satellite_count > 0 {
        // Satellites must be strictly smaller; a size-0 body has no room below it
        let satellite_max = size
            .smaller()
            .ok_or(GenerationError::SatellitesOnSmallestBody)?;
        for _ in 0..bounds.satellite_count {
            let satellite = random_stellar_body(rng, store, &BodyBounds::moon(satellite_max))?;
            orbit.push(satellite.id);
        }
    }

    let id = StellarBodyId::from_rng(rng);
    let body = StellarBody {
        id,
        name: id.catalog_name(),
        size,
        distance_from_center: f64::from(distance_from_center),
        rotation_speed: f64::from(rotation_speed),
        composition,
        orbit,
    };

    store.set_stellar_body_data(body.clone());
    Ok(body)
}

/// Randomly generate a system with a sun, planets, and moons
///
/// Builds one sun (size floor 3), then 1-10 planets each strictly smaller
/// than the sun and each carrying 0-3 moons. The assembled record registers
/// in the store; the in-memory graph goes back to the caller.
pub fn create_random_system(
    rng: &mut ChaChaRng,
    store: &mut GalaxyStore,
    coordinates: HexCoord,
) -> Result<GeneratedSystem, GenerationError> {
    let sun = random_stellar_body(rng, store, &BodyBounds::sun())?;

    let planet_count = rng.random_range(MIN_PLANETS..=MAX_PLANETS);
    let mut planets = Vec::with_capacity(planet_count);
    for _ in 0..planet_count {
        let moon_count = rng.random_range(0..=MAX_MOONS);
        let planet = random_stellar_body(rng, store, &BodyBounds::planet(sun.size, moon_count))?;
        planets.push(planet);
    }

    let record = StarSystem {
        id: StarSystemId::from_rng(rng),
        coordinates,
        sun: sun.id,
        planets: planets.iter().map(|planet| planet.id).collect(),
    };
    store.set_star_system(record.clone());

    debug!(
        "generated system {} at {}: sun size {}, {} planets",
        record.id.as_uuid(),
        coordinates,
        sun.size,
        planets.len()
    );

    Ok(GeneratedSystem {
        record,
        sun,
        planets,
    })
}
