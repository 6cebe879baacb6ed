mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_serialization() {
        let c = Rgb8::new(120, 158, 113);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Rgb8 = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }

    #[test]
    fn color_name_serializes_as_panel_name() {
        let json = serde_json::to_string(&ColorName::Accent).unwrap();
        assert_eq!(json, "\"accentColor\"");
    }
}
