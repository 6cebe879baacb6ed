//! Color string parsing and validation for config values.
//!
//! Only the `#RRGGBB` / `RRGGBB` form is accepted, case-insensitive.

mod parse;

#[cfg(test)]
mod tests;

use glint_common::{ConfigError, Rgb8};

use parse::HEX_RE;

/// Parse a color string into an [`Rgb8`].
pub fn parse_color(s: &str) -> Result<Rgb8, ConfigError> {
    parse::parse_hex(s).ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")))
}

/// Validate that a string is a 6-hex-digit color.
pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s)
}
