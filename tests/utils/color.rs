use ratatui::style::Color;
use todoflow::utils::color::{hex_to_color, DEFAULT_COLOR};

#[test]
fn test_hex_to_color() {
    assert_eq!(hex_to_color("#ef4444"), Color::Rgb(239, 68, 68));
    assert_eq!(hex_to_color("10b981"), Color::Rgb(16, 185, 129));
    assert_eq!(hex_to_color("#FFFFFF"), Color::Rgb(255, 255, 255));
}

#[test]
fn test_malformed_hex_falls_back() {
    assert_eq!(hex_to_color(""), DEFAULT_COLOR);
    assert_eq!(hex_to_color("#fff"), DEFAULT_COLOR);
    assert_eq!(hex_to_color("#gggggg"), DEFAULT_COLOR);
    assert_eq!(hex_to_color("#ééé"), DEFAULT_COLOR);
}
