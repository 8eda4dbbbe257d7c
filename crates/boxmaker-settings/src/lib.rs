//! Boxmaker Settings Crate
//!
//! Handles box configuration files: loading, saving and validating JSON and
//! TOML documents that describe a box and its output options.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, OutputSettings};
pub use error::{SettingsError, SettingsResult};
