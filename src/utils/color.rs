use ratatui::style::Color;

/// Fallback used for malformed colour strings
pub const DEFAULT_COLOR: Color = Color::Rgb(59, 130, 246);

/// Convert a `#rrggbb` hex string to a terminal colour
#[must_use]
pub fn hex_to_color(hex: &str) -> Color {
    parse_hex(hex).unwrap_or(DEFAULT_COLOR)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
