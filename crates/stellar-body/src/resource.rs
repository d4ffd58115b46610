//! Resource type enumerations.
//!
//! Six resources exist in the game economy, split evenly between minerals
//! (mined from rocky bodies) and gases (harvested from gas-bearing bodies).
//! The split is mutually exclusive at generation time: a body rolls as either
//! mineral-bearing or gas-bearing, never both.

use serde::{Deserialize, Serialize};

/// Mineral resources found on rocky stellar bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MineralType {
    Purple,
    Orange,
    Green,
}

impl MineralType {
    /// Every mineral type, in canonical order
    pub const ALL: [MineralType; 3] = [Self::Purple, Self::Orange, Self::Green];
}

/// Gas resources found on gas-bearing stellar bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GasType {
    Red,
    Yellow,
    Blue,
}

impl GasType {
    /// Every gas type, in canonical order
    pub const ALL: [GasType; 3] = [Self::Red, Self::Yellow, Self::Blue];
}

/// Any resource in the game economy, mineral or gas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    Purple,
    Orange,
    Green,
    Red,
    Yellow,
    Blue,
}

impl ResourceType {
    /// Every resource type, minerals first
    pub const ALL: [ResourceType; 6] = [
        Self::Purple,
        Self::Orange,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Blue,
    ];

    pub fn is_mineral(self) -> bool {
        matches!(self, Self::Purple | Self::Orange | Self::Green)
    }

    pub fn is_gas(self) -> bool {
        !self.is_mineral()
    }
}

impl From<MineralType> for ResourceType {
    fn from(mineral: MineralType) -> Self {
        match mineral {
            MineralType::Purple => Self::Purple,
            MineralType::Orange => Self::Orange,
            MineralType::Green => Self::Green,
        }
    }
}

impl From<GasType> for ResourceType {
    fn from(gas: GasType) -> Self {
        match gas {
            GasType::Red => Self::Red,
            GasType::Yellow => Self::Yellow,
            GasType::Blue => Self::Blue,
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}
