//! The resource economy layer.
//!
//! Compares a resource cost against a bag of resources held by the player.

pub mod resources;

pub use resources::{
    calculate_difference_between_resources, player_can_afford_resource_requirement, ResourceTuple,
};

#[cfg(test)]
mod resources_test;
