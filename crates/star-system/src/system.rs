//! Star-system records.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stellar_body::StellarBodyId;

use crate::coordinates::HexCoord;

/// Unique identifier for a star system
///
/// Drawn from the generation RNG like [`StellarBodyId`], so seeded runs
/// reproduce the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarSystemId(Uuid);

impl StarSystemId {
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self(Uuid::from_u128(rng.random()))
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// One hex-map star system: a sun and its planets, by id reference
///
/// This is the persisted form. Embedded body objects never appear here; the
/// flat body store resolves the ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub id: StarSystemId,
    pub coordinates: HexCoord,
    /// The system's root body
    pub sun: StellarBodyId,
    /// Top-level planets orbiting the sun
    pub planets: Vec<StellarBodyId>,
}

impl StarSystem {
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}
