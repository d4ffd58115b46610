//! Core data model for Starhex stellar bodies.
//!
//! A stellar body is a star, planet, or moon: a record of physical attributes
//! (size, orbit distance, rotation speed) and economic attributes (mineral and
//! gas composition). Bodies reference the satellites in their orbit by id only;
//! the flat id-keyed store lives in the `star-system` crate.

pub mod body;
pub mod catalog;
pub mod composition;
pub mod resource;

// Re-export main types at crate root
pub use body::{StellarBody, StellarBodyId, StellarBodySize, MAX_STELLAR_BODY_SIZE};
pub use catalog::{BodyCatalog, CatalogEntry, CatalogError};
pub use composition::{Composition, CompositionError};
pub use resource::{GasType, MineralType, ResourceType};

#[cfg(test)]
mod body_test;
