//! # Boxmaker
//!
//! Generates laser-cut finger-jointed boxes as SVG drawings.
//!
//! ## Architecture
//!
//! Boxmaker is organized as a workspace with multiple crates:
//!
//! 1. **boxmaker-core** - Path atoms, path simplification, corner rounding,
//!    finger-joint generation and unit conversion
//! 2. **boxmaker-camtools** - Box layouts and the SVG drawing document
//! 3. **boxmaker-settings** - JSON/TOML configuration files
//! 4. **boxmaker** - Command line binary that integrates all crates

pub mod cli;

pub use boxmaker_camtools::{
    BoxParameters, BoxType, Drawing, MobileLoaderParameters, SvgOptions, TabbedBoxMaker,
};
pub use boxmaker_core::{Direction, FrameSettings, Path, PathAtom, Point, Unit, Vector2};
pub use boxmaker_settings::{Config, OutputSettings};
pub use cli::{generate_svg, run, Cli};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, leaving stdout for the SVG document
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
