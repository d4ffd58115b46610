//! Static per-body visual metadata.
//!
//! Hand-authored "hero" bodies (name, size class, tint color, default orbit
//! children) live in an id-keyed JSON table embedded at compile time and
//! parsed once at startup. Ids are strings so that satellite entries can nest
//! under their parent's id ("1.1" orbits "1").

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::body::StellarBodySize;

const BODY_TABLE: &str = include_str!("../data/bodies.json");

/// Default sprite tint when an entry does not name a color
pub const DEFAULT_TINT: u32 = 0xffffff;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed body table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("entry {entry:?} has invalid tint color {color:?}")]
    InvalidColor { entry: String, color: String },
    #[error("entry {entry:?} lists unknown orbit entry {orbit:?}")]
    DanglingOrbit { entry: String, orbit: String },
}

/// Raw table row as it appears in the JSON
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawEntry {
    name: String,
    size: u8,
    color: Option<String>,
    #[serde(default)]
    distance_from_center: f64,
    #[serde(default)]
    rotation_speed: f64,
    #[serde(default)]
    orbit: Vec<String>,
}

/// Visual metadata for one hand-authored body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub size: StellarBodySize,
    /// Sprite tint as 0xRRGGBB
    pub tint: u32,
    pub distance_from_center: f64,
    pub rotation_speed: f64,
    /// Ids of the catalog entries orbiting this one
    pub orbit: Vec<String>,
}

/// The parsed id-keyed body table
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct BodyCatalog {
    entries: AHashMap<String, CatalogEntry>,
}

impl BodyCatalog {
    /// Parse and validate the embedded body table
    pub fn load() -> Result<Self, CatalogError> {
        Self::parse(BODY_TABLE)
    }

    /// Parse a body table from JSON text
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let raw: AHashMap<String, RawEntry> = serde_json::from_str(json)?;

        let mut entries = AHashMap::with_capacity(raw.len());
        for (id, row) in &raw {
            let tint = match &row.color {
                Some(color) => u32::from_str_radix(color, 16).map_err(|_| {
                    CatalogError::InvalidColor {
                        entry: id.clone(),
                        color: color.clone(),
                    }
                })?,
                None => DEFAULT_TINT,
            };
            for orbit_id in &row.orbit {
                if !raw.contains_key(orbit_id) {
                    return Err(CatalogError::DanglingOrbit {
                        entry: id.clone(),
                        orbit: orbit_id.clone(),
                    });
                }
            }
            entries.insert(
                id.clone(),
                CatalogEntry {
                    name: row.name.clone(),
                    size: StellarBodySize::new(row.size),
                    tint,
                    distance_from_center: row.distance_from_center,
                    rotation_speed: row.rotation_speed,
                    orbit: row.orbit.clone(),
                },
            );
        }
        Ok(Self { entries })
    }

    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
