//! Frostreach library crate — re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the actual simulation entry point.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can import game types, systems, and resources without needing a
//! window or GPU.

pub mod shared;
pub mod player;
pub mod inventory;
pub mod equipment;
pub mod world;
pub mod enemies;
pub mod climate;
pub mod settings;
pub mod data;
