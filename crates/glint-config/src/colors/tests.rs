//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_with_hash() {
    let c = parse_color("#789E71").unwrap();
    assert_eq!(c, Rgb8::new(120, 158, 113));
}

#[test]
fn parse_hex_without_hash() {
    let c = parse_color("e09442").unwrap();
    assert_eq!(c, Rgb8::new(224, 148, 66));
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(parse_color("#abcdef").ok(), parse_color("#ABCDEF").ok());
    assert_eq!(parse_color("#aBcDeF").unwrap(), Rgb8::new(0xab, 0xcd, 0xef));
    assert_eq!(parse_color("#0a0B0c").unwrap(), Rgb8::new(10, 11, 12));
}

#[test]
fn parse_rejects_anything_but_six_hex_digits() {
    for bad in [
        "", "#", "#12345", "#1234567", "12345", "#ggg000", "##123456", " #123456",
        "#123456 ", "#+f+f+f", "#12 456", "#ff00ff80", "#fff", "é12345",
    ] {
        assert!(parse_color(bad).is_err(), "accepted {bad:?}");
        assert!(!validate_color(bad), "validated {bad:?}");
    }
}

#[test]
fn parse_reads_back_to_hex_output() {
    let c = Rgb8::new(224, 148, 66);
    assert_eq!(parse_color(&c.to_hex()).unwrap(), c);
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("#fff").is_err());
    assert!(parse_color("#00d4ff80").is_err());
    assert!(parse_color("rgba(0,0,0,1.0)").is_err());
}

#[test]
fn validate_color_accepts_valid() {
    assert!(validate_color("#00d4ff"));
    assert!(validate_color("00D4FF"));
    assert!(validate_color("#E09442"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("#12345"));
    assert!(!validate_color("##123456"));
    assert!(!validate_color(" #123456"));
}

#[test]
fn parse_all_default_colors() {
    let config = crate::schema::GlintConfig::default();
    for (name, value) in config.colors.entries() {
        assert!(parse_color(value).is_ok(), "failed to parse {name}: {value}");
    }
    assert!(parse_color(&config.light.color).is_ok());
}
