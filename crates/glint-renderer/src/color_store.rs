//! Holds the three tunable scene colors edited from the debug panel.

use glint_common::{ColorName, Rgb8};
use glint_config::colors::parse_color;
use glint_config::schema::ColorConfig;

/// Panel defaults, used when a configured value does not parse.
pub const DEFAULT_BASE: Rgb8 = Rgb8::new(0x78, 0x9e, 0x71);
pub const DEFAULT_ACCENT: Rgb8 = Rgb8::new(0x00, 0x00, 0x00);
pub const DEFAULT_SECOND: Rgb8 = Rgb8::new(0xe0, 0x94, 0x42);

/// Notification emitted when `set_color` changes a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChange {
    pub name: ColorName,
    pub value: Rgb8,
}

impl ColorChange {
    pub fn uniform_name(&self) -> &'static str {
        self.name.uniform_name()
    }

    /// The value as the shader's `vec3` expects it.
    pub fn normalized(&self) -> [f32; 3] {
        self.value.to_normalized()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStore {
    base: Rgb8,
    accent: Rgb8,
    second: Rgb8,
}

impl Default for ColorStore {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            accent: DEFAULT_ACCENT,
            second: DEFAULT_SECOND,
        }
    }
}

impl ColorStore {
    /// Seed from config; unparseable entries keep the panel default.
    pub fn from_config(colors: &ColorConfig) -> Self {
        let mut store = Self::default();
        for (name, value) in colors.entries() {
            store.set_color(name, value);
        }
        store
    }

    pub fn get(&self, name: ColorName) -> Rgb8 {
        match name {
            ColorName::Base => self.base,
            ColorName::Accent => self.accent,
            ColorName::Second => self.second,
        }
    }

    pub fn normalized(&self, name: ColorName) -> [f32; 3] {
        self.get(name).to_normalized()
    }

    /// Parse `hex` and store it under the panel parameter `name`.
    ///
    /// Unknown names and strings that are not exactly six hex digits (with
    /// an optional `#`) leave the store untouched. Returns a change only
    /// when the stored value actually changed.
    pub fn set_color(&mut self, name: &str, hex: &str) -> Option<ColorChange> {
        let Ok(color_name) = name.parse::<ColorName>() else {
            tracing::debug!("ignoring unknown color parameter {name:?}");
            return None;
        };
        let Ok(value) = parse_color(hex) else {
            tracing::debug!("ignoring malformed color {hex:?} for {name}");
            return None;
        };

        let slot = match color_name {
            ColorName::Base => &mut self.base,
            ColorName::Accent => &mut self.accent,
            ColorName::Second => &mut self.second,
        };
        if *slot == value {
            return None;
        }
        *slot = value;
        Some(ColorChange {
            name: color_name,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel() {
        let store = ColorStore::default();
        assert_eq!(store.get(ColorName::Base), Rgb8::new(120, 158, 113));
        assert_eq!(store.get(ColorName::Accent), Rgb8::new(0, 0, 0));
        assert_eq!(store.get(ColorName::Second), Rgb8::new(224, 148, 66));
    }

    #[test]
    fn set_color_reports_change() {
        let mut store = ColorStore::default();
        let change = store.set_color("accentColor", "#FF0080").unwrap();
        assert_eq!(change.name, ColorName::Accent);
        assert_eq!(change.value, Rgb8::new(255, 0, 128));
        assert_eq!(change.uniform_name(), "uAccentColor");
        assert_eq!(store.get(ColorName::Accent), Rgb8::new(255, 0, 128));
    }

    #[test]
    fn set_color_accepts_missing_hash_and_lowercase() {
        let mut store = ColorStore::default();
        assert!(store.set_color("baseColor", "0a0b0c").is_some());
        assert_eq!(store.get(ColorName::Base), Rgb8::new(10, 11, 12));
    }

    #[test]
    fn malformed_color_leaves_previous_value() {
        let mut store = ColorStore::default();
        for bad in ["#12345", "#1234567", "red", "#ggg000", "", " #123456"] {
            assert!(store.set_color("secondColor", bad).is_none(), "{bad:?}");
        }
        assert_eq!(store.get(ColorName::Second), DEFAULT_SECOND);
    }

    #[test]
    fn unknown_name_is_ignored() {
        let mut store = ColorStore::default();
        assert!(store.set_color("glowColor", "#ffffff").is_none());
        assert_eq!(store, ColorStore::default());
    }

    #[test]
    fn unchanged_value_is_not_a_change() {
        let mut store = ColorStore::default();
        assert!(store.set_color("baseColor", "#789e71").is_none());
    }

    #[test]
    fn from_config_falls_back_per_entry() {
        let colors = ColorConfig {
            base: "#010203".into(),
            accent: "nope".into(),
            second: "#E09442".into(),
        };
        let store = ColorStore::from_config(&colors);
        assert_eq!(store.get(ColorName::Base), Rgb8::new(1, 2, 3));
        assert_eq!(store.get(ColorName::Accent), DEFAULT_ACCENT);
    }

    #[test]
    fn normalized_change_is_unit_range() {
        let mut store = ColorStore::default();
        let change = store.set_color("baseColor", "#ff3300").unwrap();
        let [r, g, b] = change.normalized();
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 0.2).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }
}
