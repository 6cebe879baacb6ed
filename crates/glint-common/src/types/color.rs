use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel RGB color as edited in the debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to `[0, 1]`, the layout the shader `vec3` uniforms expect.
    pub fn to_normalized(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The three tunable scene colors, named as the debug panel names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorName {
    #[serde(rename = "baseColor")]
    Base,
    #[serde(rename = "accentColor")]
    Accent,
    #[serde(rename = "secondColor")]
    Second,
}

impl ColorName {
    pub const ALL: [ColorName; 3] = [ColorName::Base, ColorName::Accent, ColorName::Second];

    /// Parameter name used by the debug panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Base => "baseColor",
            ColorName::Accent => "accentColor",
            ColorName::Second => "secondColor",
        }
    }

    /// Name of the big sphere uniform this color feeds.
    pub fn uniform_name(&self) -> &'static str {
        match self {
            ColorName::Base => "uBaseColor",
            ColorName::Accent => "uAccentColor",
            ColorName::Second => "uSecondColor",
        }
    }
}

impl FromStr for ColorName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseColor" => Ok(ColorName::Base),
            "accentColor" => Ok(ColorName::Accent),
            "secondColor" => Ok(ColorName::Second),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_normalized_scales_channels() {
        let n = Rgb8::new(255, 0, 51).to_normalized();
        assert!((n[0] - 1.0).abs() < 1e-6);
        assert!(n[1].abs() < 1e-6);
        assert!((n[2] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn to_hex_is_lowercase_with_hash() {
        assert_eq!(Rgb8::new(224, 148, 66).to_hex(), "#e09442");
        assert_eq!(Rgb8::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn color_name_parses_panel_names() {
        assert_eq!("baseColor".parse::<ColorName>(), Ok(ColorName::Base));
        assert_eq!("accentColor".parse::<ColorName>(), Ok(ColorName::Accent));
        assert_eq!("secondColor".parse::<ColorName>(), Ok(ColorName::Second));
        assert!("BaseColor".parse::<ColorName>().is_err());
    }

    #[test]
    fn color_name_maps_to_uniforms() {
        assert_eq!(ColorName::Base.uniform_name(), "uBaseColor");
        assert_eq!(ColorName::Accent.uniform_name(), "uAccentColor");
        assert_eq!(ColorName::Second.uniform_name(), "uSecondColor");
    }
}
