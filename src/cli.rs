//! Command line interface
//!
//! Flags override values from the optional configuration file. All lengths
//! are read in the configured unit (`--unit`, default millimetres) and may be
//! written as fractions ("5 1/8").

use anyhow::Context;
use boxmaker_camtools::BoxType;
use boxmaker_core::{parse_length, Unit};
use boxmaker_settings::Config;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "boxmaker")]
#[command(about = "Generates laser-cut finger-jointed boxes as SVG")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Configuration file (.json or .toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Box type: openBox, withHinge, openBoxWithShelves or mobileLoader
    #[arg(short, long)]
    pub box_type: Option<BoxType>,

    /// Unit of all lengths: mm, cm, in, pt, pc or px
    #[arg(short, long)]
    pub unit: Option<Unit>,

    /// Outer width of the box
    #[arg(long, value_parser = parse_length)]
    pub width: Option<f64>,

    /// Outer depth of the box
    #[arg(long, value_parser = parse_length)]
    pub depth: Option<f64>,

    /// Outer height of the box
    #[arg(long, value_parser = parse_length)]
    pub height: Option<f64>,

    /// Material thickness
    #[arg(short, long, value_parser = parse_length)]
    pub thickness: Option<f64>,

    /// Number of shelf compartments
    #[arg(long)]
    pub shelf_count: Option<u32>,

    /// Minimum straight run at both ends of a jointed edge
    #[arg(long, value_parser = parse_length)]
    pub frame_edges_min: Option<f64>,

    /// Nominal width of one finger
    #[arg(long, value_parser = parse_length)]
    pub frame_length: Option<f64>,

    /// Hinge radius in multiples of the material thickness
    #[arg(long)]
    pub hinge_circle_factor: Option<f64>,

    /// Draw numbered markers at construction points
    #[arg(long)]
    pub debug: bool,

    /// Output SVG file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save the effective configuration to this file
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

impl Cli {
    /// Applies the command line overrides to `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(unit) = self.unit {
            config.unit = unit;
        }

        let params = &mut config.box_parameters;
        if let Some(box_type) = self.box_type {
            params.box_type = box_type;
        }
        for (value, field) in [
            (self.width, &mut params.width),
            (self.depth, &mut params.depth),
            (self.height, &mut params.height),
            (self.thickness, &mut params.thickness),
            (self.frame_edges_min, &mut params.frame_edges_min),
            (self.frame_length, &mut params.frame_length),
            (self.hinge_circle_factor, &mut params.hinge_circle_factor),
        ] {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(shelf_count) = self.shelf_count {
            params.shelf_count = shelf_count;
        }
        if self.debug {
            params.debug = true;
        }
    }

    /// Effective configuration: the config file, if any, plus overrides.
    pub fn effective_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::new(),
        };
        self.apply(&mut config);
        config.validate().context("Invalid box configuration")?;
        Ok(config)
    }
}

/// Lays out the configured box and renders it as an SVG document.
pub fn generate_svg(config: &Config) -> anyhow::Result<String> {
    let mut maker = config.box_maker()?;
    maker.generate().context("Failed to generate box layout")?;
    Ok(maker.to_svg(&config.output.svg_options()))
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.effective_config()?;

    if let Some(path) = &cli.save_config {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to save config {}", path.display()))?;
        info!(path = %path.display(), "saved configuration");
    }

    let svg = generate_svg(&config)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), unit = %config.unit, "wrote box layout");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
