//! Unit conversion utilities
//!
//! All geometry is computed in millimetres. Lengths given in other units are
//! converted on the way in and, for labels, on the way out.
//! Lengths may be written as decimals or fractions ("1 1/2").

use crate::error::{GeometryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Length unit accepted for box dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Millimetres
    #[default]
    Mm,
    /// Centimetres
    Cm,
    /// Inches
    In,
    /// Points (1/72 in)
    Pt,
    /// Picas (1/6 in)
    Pc,
    /// CSS pixels (1/96 in)
    Px,
}

impl Unit {
    /// Millimetres in one of this unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Unit::Mm => 1.0,
            Unit::Cm => 10.0,
            Unit::In => MM_PER_INCH,
            Unit::Pt => MM_PER_INCH / 72.0,
            Unit::Pc => MM_PER_INCH / 6.0,
            Unit::Px => MM_PER_INCH / 96.0,
        }
    }

    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Unit::Mm => value,
            _ => value * self.mm_per_unit(),
        }
    }

    pub fn from_mm(self, value_mm: f64) -> f64 {
        match self {
            Unit::Mm => value_mm,
            _ => value_mm / self.mm_per_unit(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Px => "px",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = GeometryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimetre" => Ok(Self::Mm),
            "cm" | "centimeter" | "centimetre" => Ok(Self::Cm),
            "in" | "inch" | "\"" => Ok(Self::In),
            "pt" | "point" => Ok(Self::Pt),
            "pc" | "pica" => Ok(Self::Pc),
            "px" | "pixel" => Ok(Self::Px),
            _ => Err(GeometryError::UnknownUnit(s.to_string())),
        }
    }
}

/// Format a millimetre value in `unit` with two decimals and the unit label
pub fn format_length(value_mm: f64, unit: Unit) -> String {
    format!("{:.2}{}", unit.from_mm(value_mm), unit.label())
}

/// Parse a length as written, without converting it
///
/// Accepts a decimal number or a whole number plus fraction ("5 1/8",
/// "3/16"), the usual way of writing inch stock.
pub fn parse_length(input: &str) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GeometryError::InvalidNumber("empty length".to_string()));
    }

    if !input.contains('/') {
        return parse_decimal(input);
    }

    let mut total = 0.0;
    for part in input.split_whitespace() {
        total += if part.contains('/') {
            parse_fraction(part)?
        } else {
            parse_decimal(part)?
        };
    }
    Ok(total)
}

fn parse_decimal(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|e| GeometryError::InvalidNumber(format!("{text}: {e}")))
}

fn parse_fraction(text: &str) -> Result<f64> {
    let (num, den) = text
        .split_once('/')
        .filter(|(_, den)| !den.contains('/'))
        .ok_or_else(|| GeometryError::InvalidNumber(format!("{text}: invalid fraction")))?;
    let num = parse_decimal(num)?;
    let den = parse_decimal(den)?;
    if den == 0.0 {
        return Err(GeometryError::InvalidNumber(format!("{text}: division by zero")));
    }
    Ok(num / den)
}
