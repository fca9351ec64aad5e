//! Hex colour parsing

use image::Rgba;

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex_color(input: &str) -> Option<Rgba<u8>> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16).ok();
    let alpha = if expanded.len() == 8 { channel(3)? } else { 0xff };

    Some(Rgba([channel(0)?, channel(1)?, channel(2)?, alpha]))
}
