//! # Utilities Module
//!
//! Grid analysis helpers shared by generation, play and tests.

pub mod pathfinding;

pub use pathfinding::*;
