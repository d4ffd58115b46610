//! Resource economy exports.

use wasm_bindgen::prelude::*;

use economy::{
    calculate_difference_between_resources, player_can_afford_resource_requirement, ResourceTuple,
};

use crate::{from_js, to_js};

/// True iff the holdings contain the price's resource type with at least the
/// price's amount.
///
/// # Arguments
/// * `price` - a `[type, amount]` pair, e.g. `["red", 2]`
/// * `holdings` - an array of `[type, amount]` pairs
#[wasm_bindgen]
pub fn can_afford(price: JsValue, holdings: JsValue) -> Result<bool, JsError> {
    let price: ResourceTuple = from_js(price)?;
    let holdings: Vec<ResourceTuple> = from_js(holdings)?;
    Ok(player_can_afford_resource_requirement(price, &holdings))
}

/// Subtract a price from the holdings, returning the new holdings list.
///
/// Entries the price cannot cover pass through unchanged; see the economy
/// crate for the exact rules.
#[wasm_bindgen]
pub fn resource_difference(price: JsValue, holdings: JsValue) -> Result<JsValue, JsError> {
    let price: ResourceTuple = from_js(price)?;
    let holdings: Vec<ResourceTuple> = from_js(holdings)?;
    to_js(&calculate_difference_between_resources(price, &holdings))
}
