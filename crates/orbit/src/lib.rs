//! Orbit and rotation kinematics.
//!
//! Generation produces static body records; this crate makes them move. An
//! [`OrbitalFrame`] holds the bodies of one system as an arena of nodes with
//! parent-relative positions, and `tick` advances every orbiting node by an
//! angle proportional to elapsed time and rotation speed. Synchronous and
//! frame-driven by design: the host engine calls `tick` once per update with
//! the elapsed-time delta.

pub mod frame;
pub mod rotate;

// Re-export main types at crate root
pub use frame::{FrameError, NodeId, OrbitNode, OrbitalFrame, ORBIT_RING_SCALE};
pub use rotate::rotate_point;

#[cfg(test)]
mod frame_test;
#[cfg(test)]
mod rotate_test;
