//! Stellar-body records and identifiers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composition::Composition;

/// Largest size class a stellar body can have
pub const MAX_STELLAR_BODY_SIZE: u8 = 6;

/// Discrete size class of a stellar body, 0 (moonlet) through 6 (large star)
///
/// The class doubles as the sprite frame index on the rendering side, which is
/// why the range is small and fixed. Satellites must always be strictly
/// smaller than their parent; the generator enforces this by clamping, not by
/// validation after the fact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StellarBodySize(u8);

impl StellarBodySize {
    /// Create a size class, clamping to `MAX_STELLAR_BODY_SIZE`
    pub fn new(size: u8) -> Self {
        Self(size.min(MAX_STELLAR_BODY_SIZE))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The next size class down, or `None` for the smallest class
    ///
    /// Used to bound satellite generation below the parent's size.
    pub fn smaller(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl std::fmt::Display for StellarBodySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a stellar body
///
/// UUIDs are JSON-safe (serialized as strings) and drawn from the generation
/// RNG, so a seeded run reproduces the same ids. This replaces the original
/// timestamp-times-random numeric id whose uniqueness was not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StellarBodyId(Uuid);

impl StellarBodyId {
    /// Draw a new id from the given RNG
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self(Uuid::from_u128(rng.random()))
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Generate a short catalog designation from the id
    ///
    /// Format: two uppercase letters + 4 digits (e.g. "KV-4729").
    /// Deterministic - the same id always produces the same designation.
    pub fn catalog_name(&self) -> String {
        let bytes = self.0.as_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{}{}-{:04}", prefix1, prefix2, number)
    }
}

/// A star, planet, or moon
///
/// Satellites appear in `orbit` as ids only; resolving them goes through the
/// flat body store. Distances and speeds are screen-space values, not physical
/// units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarBody {
    pub id: StellarBodyId,
    pub name: String,
    pub size: StellarBodySize,
    /// Orbit radius around the parent body (screen units)
    pub distance_from_center: f64,
    /// Angular speed factor; zero means the body does not revolve
    pub rotation_speed: f64,
    pub composition: Composition,
    /// Ids of the bodies revolving around this one
    pub orbit: Vec<StellarBodyId>,
}

impl StellarBody {
    pub fn has_satellites(&self) -> bool {
        !self.orbit.is_empty()
    }
}
