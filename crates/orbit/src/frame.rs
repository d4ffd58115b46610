//! The orbital frame: an arena of nested orbiting bodies.
//!
//! Parent links are arena indices rather than references, so the cyclic
//! parent/satellite relationship costs nothing to own. Node positions are
//! stored relative to their parent: a body that carries satellites is the
//! rigid-group container of the original design, because translating it moves
//! the whole subtree without touching any satellite, while each satellite
//! still applies its own rotation about the shared origin.

use nalgebra::Point2;
use rand::Rng;
use thiserror::Error;

use star_system::{GalaxyStore, StarSystem};
use stellar_body::{StellarBody, StellarBodyId};

use crate::rotate::rotate_point;

/// Rotation applied per tick: (90 * delta_ms / 500000) * rotation_speed degrees
const DEGREES_PER_MS: f64 = 90.0 / 500_000.0;

/// Display ring radius relative to a body's orbit distance
pub const ORBIT_RING_SCALE: f64 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("body {0:?} is not registered in the galaxy store")]
    UnknownBody(StellarBodyId),
}

/// Index of a node within its [`OrbitalFrame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// One body's kinematic state
#[derive(Debug, Clone)]
pub struct OrbitNode {
    pub body: StellarBodyId,
    pub rotation_speed: f64,
    pub distance_from_center: f64,
    /// Position relative to the parent node; world position for roots
    position: Point2<f64>,
    parent: Option<NodeId>,
    satellites: Vec<NodeId>,
}

/// Kinematic state of one star system's bodies
#[derive(Debug, Clone, Default)]
pub struct OrbitalFrame {
    nodes: Vec<OrbitNode>,
    roots: Vec<NodeId>,
}

impl OrbitalFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the frame for a whole system: sun at `origin`, planets around
    /// the sun, moons around their planets
    ///
    /// Satellite placement draws orbit quadrants from the RNG.
    pub fn from_system(
        rng: &mut impl Rng,
        store: &GalaxyStore,
        system: &StarSystem,
        origin: Point2<f64>,
    ) -> Result<Self, FrameError> {
        let mut frame = Self::new();
        let sun = store
            .stellar_body(system.sun)
            .ok_or(FrameError::UnknownBody(system.sun))?;
        let root = frame.insert_root(sun, origin);

        for planet_id in &system.planets {
            let planet = store
                .stellar_body(*planet_id)
                .ok_or(FrameError::UnknownBody(*planet_id))?;
            let node = frame.spawn(rng, root, planet);
            for moon_id in &planet.orbit {
                let moon = store
                    .stellar_body(*moon_id)
                    .ok_or(FrameError::UnknownBody(*moon_id))?;
                frame.spawn(rng, node, moon);
            }
        }
        Ok(frame)
    }

    /// Insert a body with no parent at a fixed world position
    pub fn insert_root(&mut self, body: &StellarBody, position: Point2<f64>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(OrbitNode {
            body: body.id,
            rotation_speed: body.rotation_speed,
            distance_from_center: body.distance_from_center,
            position,
            parent: None,
            satellites: Vec::new(),
        });
        self.roots.push(id);
        id
    }

    /// Attach a body to a parent's orbit at a random quadrant
    ///
    /// The body lands at (±distance, ±distance) from the parent, signs drawn
    /// from the RNG.
    pub fn spawn(&mut self, rng: &mut impl Rng, parent: NodeId, body: &StellarBody) -> NodeId {
        let distance = body.distance_from_center;
        let x = if rng.random_bool(0.5) { distance } else { -distance };
        let y = if rng.random_bool(0.5) { distance } else { -distance };
        self.attach(parent, body, Point2::new(x, y))
    }

    /// Attach a body to a parent's orbit at a fixed parent-relative offset
    pub fn attach(&mut self, parent: NodeId, body: &StellarBody, offset: Point2<f64>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(OrbitNode {
            body: body.id,
            rotation_speed: body.rotation_speed,
            distance_from_center: body.distance_from_center,
            position: offset,
            parent: Some(parent),
            satellites: Vec::new(),
        });
        self.nodes[parent.0 as usize].satellites.push(id);
        id
    }

    /// Advance every orbit by `delta_ms` of simulated time
    ///
    /// Traversal is recursive root-first, so a satellite's world position this
    /// frame always composes with its parent's already-updated position.
    pub fn tick(&mut self, delta_ms: f64) {
        let roots = self.roots.clone();
        for root in roots {
            self.advance(root, delta_ms);
        }
    }

    fn advance(&mut self, id: NodeId, delta_ms: f64) {
        let node = &mut self.nodes[id.0 as usize];
        if node.parent.is_some() && node.rotation_speed != 0.0 {
            let degrees = DEGREES_PER_MS * delta_ms * node.rotation_speed;
            node.position = rotate_point(node.position, Point2::origin(), degrees);
        }

        let satellites = self.nodes[id.0 as usize].satellites.clone();
        for satellite in satellites {
            self.advance(satellite, delta_ms);
        }
    }

    /// Parent-relative position (world position for roots)
    pub fn local_position(&self, id: NodeId) -> Point2<f64> {
        self.nodes[id.0 as usize].position
    }

    /// Move a node, carrying its whole subtree rigidly
    pub fn set_local_position(&mut self, id: NodeId, position: Point2<f64>) {
        self.nodes[id.0 as usize].position = position;
    }

    /// World position, composing ancestor offsets
    pub fn world_position(&self, id: NodeId) -> Point2<f64> {
        let mut position = self.nodes[id.0 as usize].position;
        let mut current = self.nodes[id.0 as usize].parent;
        while let Some(parent) = current {
            let node = &self.nodes[parent.0 as usize];
            position += node.position.coords;
            current = node.parent;
        }
        position
    }

    /// Radius of the display ring drawn for a node's orbit
    pub fn orbit_radius(&self, id: NodeId) -> f64 {
        self.nodes[id.0 as usize].distance_from_center * ORBIT_RING_SCALE
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0 as usize].parent
    }

    pub fn satellites(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0 as usize].satellites
    }

    pub fn node(&self, id: NodeId) -> &OrbitNode {
        &self.nodes[id.0 as usize]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
