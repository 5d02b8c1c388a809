//! Utility functions for color text conversion.

/// Parses a `#RRGGBB` or `#RRGGBBAA` hex string into its channels.
///
/// The leading `#` is optional. Returns `None` for any other length or
/// for non-hex digits.
///
/// # Example
///
/// ```rust
/// use controlstyle::parse_hex_rgba;
///
/// assert_eq!(parse_hex_rgba("#9FB4F2"), Some((0x9F, 0xB4, 0xF2, 0xFF)));
/// assert_eq!(parse_hex_rgba("00000080"), Some((0, 0, 0, 0x80)));
/// assert_eq!(parse_hex_rgba("#fff"), None);
/// ```
pub fn parse_hex_rgba(s: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 0xFF)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Formats channels as an uppercase hex string.
///
/// Opaque colors use the short `#RRGGBB` form; anything else keeps the
/// alpha byte.
pub fn format_hex_rgba((r, g, b, a): (u8, u8, u8, u8)) -> String {
    if a == 0xFF {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgba("#6785B4"), Some((0x67, 0x85, 0xB4, 0xFF)));
        assert_eq!(parse_hex_rgba("7795d4"), Some((0x77, 0x95, 0xD4, 0xFF)));
    }

    #[test]
    fn test_parse_hex_rgba() {
        assert_eq!(parse_hex_rgba("#FFFFFF00"), Some((255, 255, 255, 0)));
    }

    #[test]
    fn test_parse_hex_trims_whitespace() {
        assert_eq!(parse_hex_rgba("  #000000 "), Some((0, 0, 0, 255)));
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert_eq!(parse_hex_rgba(""), None);
        assert_eq!(parse_hex_rgba("#12345"), None);
        assert_eq!(parse_hex_rgba("#GGGGGG"), None);
        assert_eq!(parse_hex_rgba("#ééé"), None);
        assert_eq!(parse_hex_rgba("#+F+F+F"), None);
        assert_eq!(parse_hex_rgba("+1+2+3+4"), None);
    }

    #[test]
    fn test_format_hex_opaque() {
        assert_eq!(format_hex_rgba((0x9F, 0xB4, 0xF2, 0xFF)), "#9FB4F2");
    }

    #[test]
    fn test_format_hex_translucent() {
        assert_eq!(format_hex_rgba((0, 0, 0, 0x80)), "#00000080");
    }
}
