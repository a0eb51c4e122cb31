//! Case and whitespace normalization.
//!
//! First stage of the pipeline. Raw message text goes in; what comes
//! out is lowercase with every run of ASCII whitespace collapsed into a
//! single interior space. The tokenizer depends on that shape and
//! debug-asserts it.

#[inline(always)]
const fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'\r')
}

/// Text normalizer for the tokenizer contract.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Collapses consecutive ASCII whitespace into single spaces
/// - Removes leading and trailing ASCII whitespace
///
/// Idempotent: normalizing already-normalized text is a no-op.
///
/// # Examples
///
/// ```
/// use banter_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("  HELLO \t WORLD  "), "hello world");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer first and reuses its capacity, growing only
    /// when necessary.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        // A separator space is emitted lazily, only once the next word
        // character arrives. Leading and trailing whitespace therefore
        // never reach the output.
        let mut pending_space = false;

        for ch in input.chars() {
            if ch.is_ascii() {
                let b = ch as u8;
                if is_ascii_ws(b) {
                    pending_space = !out.is_empty();
                } else {
                    if pending_space {
                        out.push(' ');
                        pending_space = false;
                    }
                    out.push(b.to_ascii_lowercase() as char);
                }
            } else {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                for lowered in ch.to_lowercase() {
                    out.push(lowered);
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::new().normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "123 abc!");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn punctuation_passes_through() {
        assert_eq!(norm("foo-bar_baz!"), "foo-bar_baz!");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(norm("hello   world"), "hello world");
        assert_eq!(norm("hello\t\nworld"), "hello world");
        assert_eq!(norm("hello \r\n world"), "hello world");
    }

    #[test]
    fn leading_whitespace_removed() {
        assert_eq!(norm("   hello"), "hello");
    }

    #[test]
    fn trailing_whitespace_removed() {
        assert_eq!(norm("hello   "), "hello");
    }

    #[test]
    fn only_whitespace() {
        assert_eq!(norm("   "), "");
        assert_eq!(norm("\n\t\r"), "");
        assert_eq!(norm(" \t\n\r "), "");
    }

    #[test]
    fn no_double_spaces() {
        let out = norm("hello   world  test");
        assert!(!out.contains("  "));
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn single_char() {
        assert_eq!(norm("A"), "a");
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(norm("ПРИВЕТ"), "привет");
        assert_eq!(norm("ÜNITED Café"), "ünited café");
    }

    #[test]
    fn expanding_lowercase_does_not_panic() {
        // 'İ' lowercases to two scalar values
        let result = norm("İstanbul");
        assert!(result.contains('i'));
        assert!(std::str::from_utf8(result.as_bytes()).is_ok());
    }

    #[test]
    fn german_eszett() {
        assert_eq!(norm("STRASSE"), "strasse");
        assert_eq!(norm("straße"), "straße");
    }

    #[test]
    fn emoji_passthrough() {
        assert_eq!(norm("Hello 🌍 World"), "hello 🌍 world");
    }

    #[test]
    fn idempotent() {
        let n = TextNormalizer::new();
        let samples = ["hello world", "Foo   BAR", "ÜBER Café", "  edge  case  "];
        for s in samples {
            let once = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn very_long_ascii() {
        let input = "A ".repeat(10_000);
        let out = norm(&input);
        assert_eq!(out.len(), 19_999);
        assert!(!out.ends_with(' '));
    }
}
