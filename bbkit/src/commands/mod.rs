// bbkit/src/commands/mod.rs
//! Command implementations for the bbkit CLI.

pub mod tags;
pub mod transform;
