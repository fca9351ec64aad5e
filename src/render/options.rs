//! Client-facing render options and their validated form

use image::Rgba;
use qrcode::EcLevel;
use serde::{Deserialize, Serialize};

use super::color::parse_hex_color;
use crate::encoder::ValidationError;

/// Default image side in pixels
pub const DEFAULT_WIDTH: u32 = 300;

/// Upper bound on the image side, keeps allocation bounded
pub const MAX_WIDTH: u32 = 4096;

/// Default quiet zone, in modules
pub const DEFAULT_MARGIN: u32 = 1;

/// Upper bound on the quiet zone, in modules
pub const MAX_MARGIN: u32 = 64;

/// Options as sent by the client. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub error_correction_level: Option<String>,
    pub margin: Option<u32>,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
    pub width: Option<u32>,
}

/// Fully resolved rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub ec_level: EcLevel,
    pub margin: u32,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub width: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::M,
            margin: DEFAULT_MARGIN,
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
            width: DEFAULT_WIDTH,
        }
    }
}

impl RenderOptions {
    /// Apply defaults and check every supplied option
    pub fn resolve(&self) -> Result<RenderSettings, ValidationError> {
        let defaults = RenderSettings::default();

        let ec_level = match non_empty(&self.error_correction_level) {
            Some(level) => parse_ec_level(level).ok_or_else(|| ValidationError::InvalidOption {
                option: "errorCorrectionLevel",
                reason: format!("'{}' is not one of L, M, Q, H", level),
            })?,
            None => defaults.ec_level,
        };

        let margin = self.margin.unwrap_or(defaults.margin);
        if margin > MAX_MARGIN {
            return Err(ValidationError::InvalidOption {
                option: "margin",
                reason: format!("must be at most {}", MAX_MARGIN),
            });
        }

        let width = self.width.unwrap_or(defaults.width);
        if width == 0 || width > MAX_WIDTH {
            return Err(ValidationError::InvalidOption {
                option: "width",
                reason: format!("must be between 1 and {}", MAX_WIDTH),
            });
        }

        Ok(RenderSettings {
            ec_level,
            margin,
            foreground: color(&self.foreground_color, "foregroundColor", defaults.foreground)?,
            background: color(&self.background_color, "backgroundColor", defaults.background)?,
            width,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn color(
    value: &Option<String>,
    option: &'static str,
    default: Rgba<u8>,
) -> Result<Rgba<u8>, ValidationError> {
    match non_empty(value) {
        Some(hex) => parse_hex_color(hex).ok_or_else(|| ValidationError::InvalidOption {
            option,
            reason: format!("'{}' is not a hex colour", hex),
        }),
        None => Ok(default),
    }
}

/// Accepts the single-letter codes and their long names, case-insensitively
pub fn parse_ec_level(level: &str) -> Option<EcLevel> {
    match level.to_ascii_lowercase().as_str() {
        "l" | "low" => Some(EcLevel::L),
        "m" | "medium" => Some(EcLevel::M),
        "q" | "quartile" => Some(EcLevel::Q),
        "h" | "high" => Some(EcLevel::H),
        _ => None,
    }
}
