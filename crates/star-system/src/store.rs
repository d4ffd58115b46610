//! The owned galaxy store.
//!
//! The original kept module-level mutable maps as its id-to-object lookup.
//! Here the store is an explicitly owned value passed to callers: generators
//! register into it, readers resolve ids through it. Registration is the only
//! mutation path; nothing is ever deleted.

use ahash::AHashMap;

use stellar_body::{StellarBody, StellarBodyId};

use crate::coordinates::HexCoord;
use crate::system::{StarSystem, StarSystemId};

/// Flat lookup store for every generated body and system
#[derive(Debug, Clone, Default)]
pub struct GalaxyStore {
    bodies: AHashMap<StellarBodyId, StellarBody>,
    systems: AHashMap<StarSystemId, StarSystem>,
    by_coordinates: AHashMap<HexCoord, StarSystemId>,
}

impl GalaxyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stellar body, replacing any previous record with the same id
    pub fn set_stellar_body_data(&mut self, body: StellarBody) {
        self.bodies.insert(body.id, body);
    }

    pub fn stellar_body(&self, id: StellarBodyId) -> Option<&StellarBody> {
        self.bodies.get(&id)
    }

    /// Register a star system and index it by hex coordinate
    pub fn set_star_system(&mut self, system: StarSystem) {
        self.by_coordinates.insert(system.coordinates, system.id);
        self.systems.insert(system.id, system);
    }

    pub fn star_system(&self, id: StarSystemId) -> Option<&StarSystem> {
        self.systems.get(&id)
    }

    /// The system occupying the given hex cell, if one was generated there
    pub fn system_at(&self, coordinates: HexCoord) -> Option<&StarSystem> {
        self.by_coordinates
            .get(&coordinates)
            .and_then(|id| self.systems.get(id))
    }

    /// Resolve a body's orbit list to the registered satellite records
    ///
    /// Ids missing from the store are skipped.
    pub fn satellites_of<'a>(
        &'a self,
        body: &'a StellarBody,
    ) -> impl Iterator<Item = &'a StellarBody> {
        body.orbit.iter().filter_map(move |id| self.bodies.get(id))
    }

    pub fn bodies(&self) -> impl Iterator<Item = &StellarBody> {
        self.bodies.values()
    }

    pub fn systems(&self) -> impl Iterator<Item = &StarSystem> {
        self.systems.values()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }
}
