/// Decode a glyph code from the index into the character it draws.
///
/// Codes are hexadecimal Unicode scalar values without prefix, e.g. `"e001"`.
/// A leading `\u`, `U+` or `0x` is tolerated. Returns `None` for anything that
/// is not a valid scalar value.
pub fn decode_glyph(code: &str) -> Option<char> {
    let code = code.trim();
    let hex = ["\\u", "U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|p| code.strip_prefix(p))
        .unwrap_or(code);

    if hex.is_empty() {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_private_use_area() {
        assert_eq!(decode_glyph("e001"), Some('\u{e001}'));
        assert_eq!(decode_glyph("E6A3"), Some('\u{e6a3}'));
    }

    #[test]
    fn test_decode_prefixed() {
        assert_eq!(decode_glyph("\\ue001"), Some('\u{e001}'));
        assert_eq!(decode_glyph("U+E001"), Some('\u{e001}'));
        assert_eq!(decode_glyph("0xe001"), Some('\u{e001}'));
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(decode_glyph(""), None);
        assert_eq!(decode_glyph("0x"), None);
        assert_eq!(decode_glyph("home"), None);
        // surrogate
        assert_eq!(decode_glyph("d800"), None);
        assert_eq!(decode_glyph("110000"), None);
    }
}
