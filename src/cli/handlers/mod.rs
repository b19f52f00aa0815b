//! Shared command handlers

pub mod fetch;

pub use fetch::{load, load_with_retry};
