//! Shared foundation types: error taxonomy and timing primitives.

pub mod core;
pub mod error;
