//! Length measurement for the minimum-length gate.

use unicode_segmentation::UnicodeSegmentation;

/// How a token's length is counted when compared against a minimum length.
///
/// The count always includes the leading `@` or `#`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthMethod {
    /// UTF-16 code units, matching string length on JavaScript hosts.
    #[default]
    Utf16,
    /// Unicode scalar values.
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
}

impl LengthMethod {
    /// Measure `s` with this method.
    #[must_use]
    pub fn measure(self, s: &str) -> usize {
        match self {
            Self::Utf16 => s.encode_utf16().count(),
            Self::Chars => s.chars().count(),
            Self::Graphemes => s.graphemes(true).count(),
        }
    }

    /// Parse a method name as accepted on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf16" | "utf-16" => Some(Self::Utf16),
            "chars" | "char" | "scalar" => Some(Self::Chars),
            "graphemes" | "grapheme" => Some(Self::Graphemes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_uniform() {
        for method in [LengthMethod::Utf16, LengthMethod::Chars, LengthMethod::Graphemes] {
            assert_eq!(method.measure("@alice"), 6);
            assert_eq!(method.measure(""), 0);
        }
    }

    #[test]
    fn test_astral_and_combining() {
        // U+1F600 is two UTF-16 units but one scalar.
        assert_eq!(LengthMethod::Utf16.measure("#😀"), 3);
        assert_eq!(LengthMethod::Chars.measure("#😀"), 2);
        assert_eq!(LengthMethod::Graphemes.measure("#😀"), 2);

        // "e" + combining acute is two scalars, one grapheme.
        assert_eq!(LengthMethod::Chars.measure("@e\u{0301}"), 3);
        assert_eq!(LengthMethod::Graphemes.measure("@e\u{0301}"), 2);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(LengthMethod::from_name("UTF16"), Some(LengthMethod::Utf16));
        assert_eq!(LengthMethod::from_name("chars"), Some(LengthMethod::Chars));
        assert_eq!(
            LengthMethod::from_name("grapheme"),
            Some(LengthMethod::Graphemes)
        );
        assert_eq!(LengthMethod::from_name("bytes"), None);
    }
}
