//! Orbital-frame simulation exports.
//!
//! Frame state is stored in thread-local storage (WASM is single-threaded).
//! Functions return opaque ids for referencing mutable state and serializable
//! snapshots for reading positions back out.

use std::cell::RefCell;
use std::collections::HashMap;

use nalgebra::Point2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use orbit::OrbitalFrame;
use star_system::{GalaxyStore, HexCoord};
use system_generator::create_random_system;

use crate::to_js;

thread_local! {
    static FRAMES: RefCell<HashMap<u32, OrbitalFrame>> = RefCell::new(HashMap::new());
    static NEXT_FRAME_ID: RefCell<u32> = const { RefCell::new(0) };
}

/// One body's world position, as read by the renderer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct BodySnapshot {
    /// Stellar body id (UUID string)
    id: String,
    /// World position [x, y] in screen units
    position: [f64; 2],
    /// Radius of the orbit ring to draw for this body
    orbit_radius: f64,
}

/// Generate a system at the given hex cell and build its orbital frame.
///
/// Returns a frame id for use with `frame_tick` and `frame_get_bodies`.
/// The sun sits at world position (x, y).
#[wasm_bindgen]
pub fn frame_create(q: i32, r: i32, seed: u64, x: f64, y: f64) -> Result<u32, JsError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut store = GalaxyStore::new();

    let generated = create_random_system(&mut rng, &mut store, HexCoord::new(q, r))
        .map_err(|e| JsError::new(&e.to_string()))?;
    let frame = OrbitalFrame::from_system(&mut rng, &store, &generated.record, Point2::new(x, y))
        .map_err(|e| JsError::new(&e.to_string()))?;

    let id = NEXT_FRAME_ID.with(|next_id| {
        let mut next = next_id.borrow_mut();
        let current = *next;
        *next += 1;
        current
    });
    FRAMES.with(|frames| frames.borrow_mut().insert(id, frame));
    Ok(id)
}

/// Advance a frame by `delta_ms` of simulated time.
#[wasm_bindgen]
pub fn frame_tick(frame_id: u32, delta_ms: f64) -> Result<(), JsError> {
    FRAMES.with(|frames| {
        let mut frames = frames.borrow_mut();
        let frame = frames
            .get_mut(&frame_id)
            .ok_or_else(|| JsError::new(&format!("unknown frame id {}", frame_id)))?;
        frame.tick(delta_ms);
        Ok(())
    })
}

/// Read every body's world position from a frame.
#[wasm_bindgen]
pub fn frame_get_bodies(frame_id: u32) -> Result<JsValue, JsError> {
    FRAMES.with(|frames| {
        let frames = frames.borrow();
        let frame = frames
            .get(&frame_id)
            .ok_or_else(|| JsError::new(&format!("unknown frame id {}", frame_id)))?;

        let mut snapshots = Vec::with_capacity(frame.len());
        let mut pending: Vec<_> = frame.roots().to_vec();
        while let Some(node) = pending.pop() {
            let position = frame.world_position(node);
            snapshots.push(BodySnapshot {
                id: frame.node(node).body.as_uuid().to_string(),
                position: [position.x, position.y],
                orbit_radius: frame.orbit_radius(node),
            });
            pending.extend_from_slice(frame.satellites(node));
        }
        to_js(&snapshots)
    })
}

/// Drop a frame's state.
#[wasm_bindgen]
pub fn frame_destroy(frame_id: u32) {
    FRAMES.with(|frames| frames.borrow_mut().remove(&frame_id));
}
