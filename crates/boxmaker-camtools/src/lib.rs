//! # Boxmaker CAM Tools
//!
//! Box layouts built on the `boxmaker-core` path engine.
//!
//! - **Tabbed Box Maker**: open, hinged and shelved finger-jointed boxes, and
//!   the mobile-loader stand accessory
//! - **Drawing**: the document the layouts write into, serialized as SVG

pub mod drawing;
pub mod error;
pub mod tabbed_box;

pub use drawing::{Bounds, Color, Drawing, DrawingElement, SvgDocument, SvgOptions};
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use tabbed_box::{BoxParameters, BoxType, MobileLoaderParameters, TabbedBoxMaker};
