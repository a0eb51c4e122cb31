//! Core types and configuration for the banter message analytics engine.
//!
//! This crate provides the fundamental types shared across the banter
//! ecosystem. Keeping types separate ensures:
//!
//! - **Cheap dependencies**: the engine and the CLI share one vocabulary
//! - **Clean boundaries**: no circular dependencies between crates
//! - **Pure configuration**: topic keywords are explicit data, never
//!   hidden module-level state

#![warn(missing_docs)]

use core::fmt;

/// Unique message identifier.
///
/// Messages are identified by their position in the corpus, as a 32-bit
/// unsigned integer. With u32::MAX (~4 billion) messages, this provides
/// sufficient capacity for any corpus that fits in memory.
pub type MessageId = u32;

/// Default punctuation byte set stripped during tokenization.
///
/// Matches the ASCII punctuation range, so `"Great!!"` tokenizes to
/// `"great"` and `"it's"` to `"its"` out of the box.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A ranked frequency-table entry: one token and its corpus-wide count.
///
/// Entries are ordered by count (descending), then by token (ascending).
/// Sorting a slice of entries therefore yields the deterministic ranking
/// used for the top-N report, with alphabetical tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// Normalized token text.
    pub token: String,
    /// Occurrences across the whole corpus.
    pub count: u64,
}

impl TokenEntry {
    /// Creates a new frequency-table entry.
    #[inline]
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

impl PartialOrd for TokenEntry {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TokenEntry {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: count (higher ranks first)
        // Secondary: token (ascending, for deterministic ties)
        match other.count.cmp(&self.count) {
            core::cmp::Ordering::Equal => self.token.cmp(&other.token),
            ord => ord,
        }
    }
}

impl fmt::Display for TokenEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.count)
    }
}

/// How raw message length contributes to the character total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharCount {
    /// Count Unicode scalar values, including whitespace.
    #[default]
    Scalars,
    /// Count UTF-8 bytes, including whitespace.
    Bytes,
}

/// Analyzer configuration options.
///
/// All fields have defaults; the zero-argument constructors on the engine
/// use [`AnalyzerConfig::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Number of frequent tokens to report. Default: 10.
    pub top_n: usize,
    /// Minimum keywords present in the corpus for a topic to be matched.
    /// Default: 1.
    pub min_keyword_matches: usize,
    /// Length measure for the character total. Default: Unicode scalars.
    pub char_count: CharCount,
    /// Whether to drop English stop words during tokenization.
    /// Default: false (every token is counted).
    pub filter_stop_words: bool,
    /// Punctuation characters stripped from each token. Only ASCII
    /// characters take effect. Default: [`DEFAULT_PUNCTUATION`].
    pub punctuation: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            min_keyword_matches: 1,
            char_count: CharCount::Scalars,
            filter_stop_words: false,
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

/// One configured topic: a label and the keyword phrases associated with it.
///
/// A keyword phrase may contain several words ("machine learning"); it is
/// considered present only when every word of the phrase appears in the
/// text under consideration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Topic label, reported verbatim.
    pub label: String,
    /// Keyword phrases. Matching is exact-token after normalization.
    pub keywords: Vec<String>,
}

impl Topic {
    /// Creates a topic from a label and keyword phrases.
    pub fn new(label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Ordered topic → keywords configuration.
///
/// Order is significant: matched topics are reported in configuration
/// order, never by match strength, so output stays reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSet {
    topics: Vec<Topic>,
}

impl TopicSet {
    /// Creates an empty topic set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a topic, keeping configuration order.
    pub fn push(&mut self, topic: Topic) {
        self.topics.push(topic);
    }

    /// Builder-style variant of [`TopicSet::push`].
    #[must_use]
    pub fn with_topic(mut self, label: impl Into<String>, keywords: &[&str]) -> Self {
        self.push(Topic::new(label, keywords));
        self
    }

    /// Returns the configured topics in order.
    #[inline]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Returns the number of configured topics.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns `true` if no topics are configured.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl FromIterator<Topic> for TopicSet {
    fn from_iter<I: IntoIterator<Item = Topic>>(iter: I) -> Self {
        Self {
            topics: iter.into_iter().collect(),
        }
    }
}

/// A matched topic in the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicMatch {
    /// Configured topic label.
    pub label: String,
    /// How many of the topic's keyword phrases appear anywhere in the
    /// corpus (count > 0 in the frequency table).
    pub matched_keywords: usize,
    /// How many messages contained at least one keyword phrase. A message
    /// contributes at most once per topic.
    pub messages: u64,
}

impl fmt::Display for TopicMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} keywords matched)",
            self.label, self.messages, self.matched_keywords
        )
    }
}

/// The final aggregated output record.
///
/// Created once at the end of the aggregation pass; immutable afterwards.
/// Every edge case (empty corpus, no frequent tokens, no topic matches)
/// has a defined non-error value here.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Total number of messages in the corpus.
    pub messages: u64,
    /// Total number of tokens across all messages.
    pub words: u64,
    /// Total character count of the raw messages, per the configured
    /// [`CharCount`] policy.
    pub chars: u64,
    /// Average words per message. Defined as `0.0` for an empty corpus;
    /// boundary policy, not an error.
    pub avg_words_per_message: f64,
    /// Top-N frequent tokens, descending by count with alphabetical
    /// tie-breaks.
    pub top_tokens: Vec<TokenEntry>,
    /// Matched topics, in configuration order.
    pub topics: Vec<TopicMatch>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Message Analysis Results ---")?;
        writeln!(f, "Total Messages: {}", self.messages)?;
        writeln!(f, "Total Words: {}", self.words)?;
        writeln!(
            f,
            "Average Words per Message: {:.2}",
            self.avg_words_per_message
        )?;
        writeln!(f, "Total Characters: {}", self.chars)?;

        writeln!(f, "\nMost Frequent Words:")?;
        for entry in &self.top_tokens {
            writeln!(f, "  {entry}")?;
        }

        writeln!(f, "\nMatched Topics:")?;
        for topic in &self.topics {
            writeln!(f, "  {topic}")?;
        }

        Ok(())
    }
}

/// Errors raised while loading a message corpus from disk.
///
/// The engine itself never fails; malformed or missing input is detected
/// by the loader and reported at load time.
#[derive(Debug)]
pub enum LoadError {
    /// The input file could not be opened.
    Open {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A read from the input file failed mid-stream.
    Read {
        /// Path being read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The input file contained no header row.
    Empty {
        /// Path of the empty file.
        path: String,
    },
    /// The requested message column is not present in the header.
    MissingColumn {
        /// Column that was requested.
        column: String,
        /// Columns the header actually declares.
        available: Vec<String>,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, source } => {
                write!(f, "cannot open {path}: {source}")
            }
            LoadError::Read { path, source } => {
                write!(f, "read failed for {path}: {source}")
            }
            LoadError::Empty { path } => {
                write!(f, "input file is empty: {path}")
            }
            LoadError::MissingColumn { column, available } => {
                write!(
                    f,
                    "message column '{column}' not found (available: {})",
                    available.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Open { source, .. } | LoadError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_entry_orders_by_count_descending() {
        let high = TokenEntry::new("zebra", 5);
        let low = TokenEntry::new("apple", 2);
        assert!(high < low, "higher count must rank first");
    }

    #[test]
    fn token_entry_ties_break_alphabetically() {
        let a = TokenEntry::new("apple", 3);
        let b = TokenEntry::new("banana", 3);
        assert!(a < b);

        let mut entries = vec![b.clone(), a.clone()];
        entries.sort();
        assert_eq!(entries, vec![a, b]);
    }

    #[test]
    fn token_entry_display() {
        assert_eq!(TokenEntry::new("hello", 2).to_string(), "hello: 2");
    }

    #[test]
    fn config_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.min_keyword_matches, 1);
        assert_eq!(config.char_count, CharCount::Scalars);
        assert!(!config.filter_stop_words);
        assert_eq!(config.punctuation, DEFAULT_PUNCTUATION);
    }

    #[test]
    fn topic_set_preserves_order() {
        let set = TopicSet::new()
            .with_topic("zeta", &["z"])
            .with_topic("alpha", &["a"]);

        let labels: Vec<&str> = set.topics().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["zeta", "alpha"]);
    }

    #[test]
    fn topic_set_from_iterator() {
        let set: TopicSet = [Topic::new("one", &["a"]), Topic::new("two", &["b"])]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn load_error_missing_column_lists_available() {
        let err = LoadError::MissingColumn {
            column: "message".to_string(),
            available: vec!["date".to_string(), "sender".to_string()],
        };
        let text = err.to_string();
        assert!(text.contains("message"));
        assert!(text.contains("date, sender"));
    }

    #[test]
    fn report_display_includes_totals() {
        let report = Report {
            messages: 2,
            words: 4,
            chars: 23,
            avg_words_per_message: 2.0,
            top_tokens: vec![TokenEntry::new("hello", 2)],
            topics: vec![TopicMatch {
                label: "greeting".to_string(),
                matched_keywords: 1,
                messages: 2,
            }],
        };

        let text = report.to_string();
        assert!(text.contains("Total Messages: 2"));
        assert!(text.contains("Average Words per Message: 2.00"));
        assert!(text.contains("hello: 2"));
        assert!(text.contains("greeting: 2 (1 keywords matched)"));
    }
}
