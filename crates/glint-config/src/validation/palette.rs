//! Color string validation.

use crate::colors::validate_color;
use crate::schema::GlintConfig;

/// Every color key must be a 6-hex-digit string.
pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &GlintConfig) {
    let colors = &config.colors;
    for (name, value) in [
        ("colors.base", &colors.base),
        ("colors.accent", &colors.accent),
        ("colors.second", &colors.second),
        ("light.color", &config.light.color),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a #RRGGBB color"));
        }
    }
}
