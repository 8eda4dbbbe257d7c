//! Configuration file handling for Boxmaker
//!
//! A configuration describes one box: the unit its lengths are written in,
//! the box parameters, the mobile-loader accessory and SVG output options.
//! Supports JSON and TOML files, chosen by file extension.
//!
//! Box lengths are stored in `unit` and converted to millimetres by
//! [`Config::box_parameters_mm`]. Mobile-loader dimensions and output
//! options are always millimetres.

use boxmaker_camtools::{BoxParameters, MobileLoaderParameters, SvgOptions, TabbedBoxMaker};
use boxmaker_core::Unit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))),
        }
    }
}

/// SVG output options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Stroke width of cut lines in millimetres
    pub stroke_width: f64,
    /// Padding around the layout in millimetres
    pub margin: f64,
}

impl Default for OutputSettings {
    fn default() -> Self {
        let svg = SvgOptions::default();
        Self {
            stroke_width: svg.stroke_width,
            margin: svg.margin,
        }
    }
}

impl OutputSettings {
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            stroke_width: self.stroke_width,
            margin: self.margin,
        }
    }
}

/// Complete box configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Unit of the box lengths
    pub unit: Unit,
    /// Box description, lengths in `unit`
    pub box_parameters: BoxParameters,
    /// Mobile-loader accessory, lengths in millimetres
    pub mobile_loader: MobileLoaderParameters,
    /// SVG output options
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config = Self::parse(&content, format)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate and save configuration to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;
        let content = self.render(format)?;

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Parse configuration text without validating it
    pub fn parse(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        Ok(match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        })
    }

    /// Serialize configuration text
    pub fn render(&self, format: ConfigFormat) -> SettingsResult<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Box parameters with every length converted to millimetres
    pub fn box_parameters_mm(&self) -> BoxParameters {
        let p = &self.box_parameters;
        let mm = |value: f64| self.unit.to_mm(value);
        BoxParameters {
            width: mm(p.width),
            depth: mm(p.depth),
            height: mm(p.height),
            thickness: mm(p.thickness),
            frame_edges_min: mm(p.frame_edges_min),
            frame_length: mm(p.frame_length),
            ..p.clone()
        }
    }

    /// Box maker for this configuration
    pub fn box_maker(&self) -> SettingsResult<TabbedBoxMaker> {
        Ok(TabbedBoxMaker::new(self.box_parameters_mm())?
            .with_mobile_loader(self.mobile_loader.clone())?
            .with_label_unit(self.unit))
    }

    /// Validate all configuration values
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.output.stroke_width.is_finite() && self.output.stroke_width > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "output.stroke_width".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        if !(self.output.margin.is_finite() && self.output.margin >= 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "output.margin".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        self.box_maker()?;
        Ok(())
    }
}
