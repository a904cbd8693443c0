// bbkit-core/src/engines/mod.rs
//! This module contains markup transformation engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `MarkupEngine` trait. To add a new engine, create a new file, define its
//! logic, and declare it here using `pub mod <engine_name>;`.

pub mod bbcode_engine;
