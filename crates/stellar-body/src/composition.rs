//! Mineral and gas composition of a stellar body.
//!
//! Composition is a set of (type, magnitude) pairs per resource family, with
//! magnitudes in `[0, 1)` and no type repeated within a family. Sampling draws
//! types without replacement, so requesting more distinct types than the
//! candidate bank holds is a caller error and fails fast rather than silently
//! coming back empty.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resource::{GasType, MineralType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("requested {requested} distinct resource types but only {available} are available")]
    NotEnoughTypes { requested: usize, available: usize },
}

/// Mineral and gas content of one stellar body
///
/// Magnitudes are abstract richness values in `[0, 1)`, not mass fractions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub minerals: Vec<(MineralType, f64)>,
    pub gases: Vec<(GasType, f64)>,
}

impl Composition {
    /// Sample a composition with the given number of distinct mineral and gas types
    pub fn sample(
        rng: &mut impl Rng,
        mineral_count: usize,
        gas_count: usize,
    ) -> Result<Self, CompositionError> {
        Ok(Self {
            minerals: sample_distinct(rng, mineral_count, &MineralType::ALL)?,
            gases: sample_distinct(rng, gas_count, &GasType::ALL)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.minerals.is_empty() && self.gases.is_empty()
    }

    /// Magnitude of the given mineral, if the body carries it
    pub fn mineral_magnitude(&self, mineral: MineralType) -> Option<f64> {
        self.minerals
            .iter()
            .find(|(kind, _)| *kind == mineral)
            .map(|(_, magnitude)| *magnitude)
    }

    /// Magnitude of the given gas, if the body carries it
    pub fn gas_magnitude(&self, gas: GasType) -> Option<f64> {
        self.gases
            .iter()
            .find(|(kind, _)| *kind == gas)
            .map(|(_, magnitude)| *magnitude)
    }
}

/// Draw `count` distinct types from `bank` without replacement, each paired
/// with a uniform magnitude in `[0, 1)`.
pub fn sample_distinct<T: Copy>(
    rng: &mut impl Rng,
    count: usize,
    bank: &[T],
) -> Result<Vec<(T, f64)>, CompositionError> {
    if count > bank.len() {
        return Err(CompositionError::NotEnoughTypes {
            requested: count,
            available: bank.len(),
        });
    }

    let mut pool = bank.to_vec();
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.random_range(0..pool.len());
        let kind = pool.swap_remove(index);
        drawn.push((kind, rng.random::<f64>()));
    }
    Ok(drawn)
}
