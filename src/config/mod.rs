//! Configuration module for selectcat
//!
//! Precedence:
//! 1. Environment variables (SELECTCAT_*)
//! 2. Config file (selectcat.toml)
//! 3. Built-in defaults

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::Config;
