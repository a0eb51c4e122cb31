//! Stop-word filtering.
//!
//! Off by default; when enabled the tokenizer consults a fixed English
//! list before emitting a token. No stemming, no frequency heuristics,
//! just set membership over normalized tokens.

use rustc_hash::FxHashSet;

/// Membership filter over a fixed stop-word list.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// An empty filter. Nothing is dropped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard English stop-word list.
    pub fn english() -> Self {
        Self {
            words: stop_words::get(stop_words::LANGUAGE::English)
                .into_iter()
                .collect(),
        }
    }

    /// A filter over a custom word list.
    ///
    /// Entries are lowercased so they compare equal to normalized tokens.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Returns `true` if `token` should be dropped.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        !self.words.is_empty() && self.words.contains(token)
    }

    /// Returns `true` if the filter drops nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_drops_nothing() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.contains("the"));
    }

    #[test]
    fn english_list_contains_common_words() {
        let filter = StopwordFilter::english();
        assert!(!filter.is_empty());
        assert!(filter.contains("the"));
        assert!(filter.contains("and"));
        assert!(!filter.contains("marketing"));
    }

    #[test]
    fn custom_list_is_lowercased() {
        let filter = StopwordFilter::from_list(&["Foo", "BAR"]);
        assert!(filter.contains("foo"));
        assert!(filter.contains("bar"));
        assert!(!filter.contains("baz"));
    }
}
