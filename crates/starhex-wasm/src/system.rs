//! System generation exports.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use star_system::{GalaxyStore, HexCoord, StarSystem};
use stellar_body::{BodyCatalog, StellarBody};
use system_generator::create_random_system;

use crate::to_js;

/// Everything the host needs to render one generated system
///
/// `bodies` carries every registered record, moons included, so the host can
/// resolve the id references in `system` and in each body's orbit list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SystemPayload {
    system: StarSystem,
    bodies: Vec<StellarBody>,
}

/// Generate a random star system at the given hex cell.
///
/// The seed controls the whole system: the same (q, r, seed) triple always
/// produces the same sun, planets, moons, and ids.
///
/// # Arguments
/// * `q`, `r` - axial hex-map coordinates of the system
/// * `seed` - random seed for reproducible generation
#[wasm_bindgen]
pub fn generate_system(q: i32, r: i32, seed: u64) -> Result<JsValue, JsError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut store = GalaxyStore::new();

    let generated = create_random_system(&mut rng, &mut store, HexCoord::new(q, r))
        .map_err(|e| JsError::new(&e.to_string()))?;

    let payload = SystemPayload {
        system: generated.record,
        bodies: store.bodies().cloned().collect(),
    };
    to_js(&payload)
}

/// The static body catalog: hand-authored names, sizes, tints, and default
/// orbit children, keyed by id.
#[wasm_bindgen]
pub fn body_catalog() -> Result<JsValue, JsError> {
    let catalog = BodyCatalog::load().map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&catalog)
}
