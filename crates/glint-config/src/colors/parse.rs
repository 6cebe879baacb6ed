//! Internal color parsing helpers.

use glint_common::Rgb8;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for a 6-digit hex color with optional leading `#`.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").unwrap()
});

/// Decode the three digit pairs captured by [`HEX_RE`].
pub(super) fn parse_hex(s: &str) -> Option<Rgb8> {
    let caps = HEX_RE.captures(s)?;
    let r = u8::from_str_radix(&caps[1], 16).ok()?;
    let g = u8::from_str_radix(&caps[2], 16).ok()?;
    let b = u8::from_str_radix(&caps[3], 16).ok()?;
    Some(Rgb8::new(r, g, b))
}
