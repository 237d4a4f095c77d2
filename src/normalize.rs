use unicode_normalization::UnicodeNormalization;

// Unicode White_Space minus NEL, plus the BOM.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Canonicalizes text for comparison.
///
/// Applies NFC, collapses every whitespace run to one ASCII space, trims both
/// ends and lowercases. Khmer has no case, so only mixed-in Latin (or other
/// cased scripts) is affected by the last step.
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed
        .split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_and_trim() {
        assert_eq!(normalize_text("  Hello   World  "), "hello world");
        assert_eq!(normalize_text("a\t\n b"), "a b");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_unicode_spaces() {
        assert_eq!(normalize_text("\u{00A0}x\u{3000}\u{FEFF}y\u{2029}"), "x y");
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(normalize_text("a\u{0085}b"), "a\u{0085}b");
        assert_eq!(normalize_text(" \u{0085} "), "\u{0085}");
    }

    #[test]
    fn test_composes() {
        assert_eq!(normalize_text("Cafe\u{0301}"), "caf\u{00E9}");
    }

    #[test]
    fn test_khmer_untouched_by_case_folding() {
        assert_eq!(normalize_text(" សួស្តី  ABC "), "សួស្តី abc");
    }
}
