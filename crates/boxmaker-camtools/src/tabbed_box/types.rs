//! Type definitions for the Tabbed Box Maker

use boxmaker_core::FrameSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxType {
    #[default]
    #[serde(rename = "openBox")]
    OpenBox = 0,
    #[serde(rename = "withHinge")]
    WithHinges = 1,
    #[serde(rename = "openBoxWithShelves")]
    ShelvedBox = 2,
    #[serde(rename = "mobileLoader")]
    MobileLoader = 3,
}

impl BoxType {
    /// Human readable description used in the info label.
    pub fn description(self) -> &'static str {
        match self {
            BoxType::OpenBox => "just an open Box",
            BoxType::WithHinges => "Box with Hinges",
            BoxType::ShelvedBox => "Box with shelves",
            BoxType::MobileLoader => "box for mobile Loader",
        }
    }

    /// Whether the box gets a hinged lid.
    pub fn has_hinges(self) -> bool {
        matches!(self, BoxType::WithHinges | BoxType::MobileLoader)
    }

    /// Name accepted on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            BoxType::OpenBox => "openBox",
            BoxType::WithHinges => "withHinge",
            BoxType::ShelvedBox => "openBoxWithShelves",
            BoxType::MobileLoader => "mobileLoader",
        }
    }
}

impl From<i32> for BoxType {
    fn from(value: i32) -> Self {
        match value {
            1 => BoxType::WithHinges,
            2 => BoxType::ShelvedBox,
            3 => BoxType::MobileLoader,
            _ => BoxType::OpenBox,
        }
    }
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoxType {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "openBox" => Ok(BoxType::OpenBox),
            "withHinge" => Ok(BoxType::WithHinges),
            "openBoxWithShelves" => Ok(BoxType::ShelvedBox),
            "mobileLoader" => Ok(BoxType::MobileLoader),
            other => Err(ParameterError::InvalidValue {
                name: "box_type".to_string(),
                reason: format!(
                    "unknown box type '{other}' (expected openBox, withHinge, openBoxWithShelves or mobileLoader)"
                ),
            }),
        }
    }
}

/// Box description; all lengths in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    pub box_type: BoxType,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub thickness: f64,
    pub shelf_count: u32,
    /// Minimum straight run at both ends of a jointed edge
    pub frame_edges_min: f64,
    /// Nominal width of one tab or gap
    pub frame_length: f64,
    /// Hinge radius in multiples of the material thickness
    pub hinge_circle_factor: f64,
    /// Emit numbered point markers
    pub debug: bool,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            box_type: BoxType::OpenBox,
            width: 200.0,
            depth: 100.0,
            height: 70.0,
            thickness: 4.0,
            shelf_count: 1,
            frame_edges_min: 5.0,
            frame_length: 10.0,
            hinge_circle_factor: 1.5,
            debug: false,
        }
    }
}

impl BoxParameters {
    /// Tab settings for the finger-joint generator.
    pub fn frame_settings(&self) -> FrameSettings {
        FrameSettings {
            frame_length: self.frame_length,
            frame_edges_min: self.frame_edges_min,
            thickness: self.thickness,
        }
    }

    /// Outer radius of the hinge.
    pub fn hinge_radius(&self) -> f64 {
        self.thickness * self.hinge_circle_factor
    }

    /// Usable height of one shelf compartment along the width.
    pub fn shelf_height(&self) -> f64 {
        let count = f64::from(self.shelf_count.max(1));
        (self.width - 2.0 * self.thickness - (count - 1.0) * self.thickness) / count
    }
}

/// Dimensions of the mobile-loader accessory; lengths in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileLoaderParameters {
    pub back_rest_height: f64,
    pub back_rest_width: f64,
    pub support_distance: f64,
    pub distance_between_supports: f64,
    pub shelf_height: f64,
    pub shelf_length: f64,
    pub usb_width: f64,
    pub usb_depth: f64,
    pub usb_height: f64,
    /// Back rest inclination in degrees
    pub inclination: f64,
}

impl Default for MobileLoaderParameters {
    fn default() -> Self {
        Self {
            back_rest_height: 150.0,
            back_rest_width: 90.0,
            support_distance: 20.0,
            distance_between_supports: 50.0,
            shelf_height: 15.0,
            shelf_length: 20.0,
            usb_width: 10.2,
            usb_depth: 6.0,
            usb_height: 25.0,
            inclination: 75.0,
        }
    }
}

impl MobileLoaderParameters {
    pub fn inclination_rad(&self) -> f64 {
        self.inclination.to_radians()
    }
}
