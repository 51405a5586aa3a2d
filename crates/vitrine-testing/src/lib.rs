//! Testing infrastructure for vitrine integration tests.
//!
//! This crate provides utilities for writing deterministic tests:
//! - `ScriptedCatalog`: an in-memory `CatalogSource` with scripted responses
//!   and hold-and-release gates for racing slow fetches against fast ones
//! - `fixtures`: deterministic product data generation

pub mod catalog;
pub mod fixtures;

pub use catalog::{Gate, ScriptedCatalog};
