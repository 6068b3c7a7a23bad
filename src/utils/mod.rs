//! Utility functions and helpers.
//!
//! Environment variable lookup with the SLIPWAY_ prefix convention.

pub mod env;

pub use env::get_env_with_prefix;
