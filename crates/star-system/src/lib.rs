//! Star-system records and the galaxy store.
//!
//! A star system is a hex-map cell holding one sun and its planets, recorded
//! by id reference only. The [`GalaxyStore`] is the single persistence
//! boundary: generated bodies and systems register into it, and everything
//! downstream (kinematics, UI state) resolves ids through it.

pub mod coordinates;
pub mod store;
pub mod system;

// Re-export main types at crate root
pub use coordinates::HexCoord;
pub use store::GalaxyStore;
pub use system::{StarSystem, StarSystemId};
