//! Display models for CLI output
//!
//! Converts normalized API records into CLI-friendly display formats.

pub mod display;

pub use display::{JobDisplay, ProfileDisplay};
