//! Analyzer state and constructors.

use banter_types::{AnalyzerConfig, TopicSet};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::analyzer::normalizer::TextNormalizer;
use crate::analyzer::stopwords::StopwordFilter;
use crate::analyzer::tokenizer::Tokenizer;
use crate::corpus::topics::CompiledTopics;

/// Streaming message-corpus analyzer.
///
/// Folds messages one at a time into corpus-wide counters and a
/// frequency table; [`Analyzer::report`](crate::Analyzer::report)
/// snapshots the totals. The fold is single-threaded and incremental:
/// only the frequency table grows with corpus size, so arbitrarily long
/// logs stream through without materializing the corpus.
pub struct Analyzer {
    /// Token → corpus-wide occurrence count.
    pub(crate) freq: FxHashMap<String, u64>,
    pub(crate) messages: u64,
    pub(crate) words: u64,
    pub(crate) chars: u64,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) topics: CompiledTopics,
    /// Per-topic count of messages that contained a keyword phrase.
    pub(crate) topic_hits: Vec<u64>,
    pub(crate) config: AnalyzerConfig,
    /// Reusable normalization buffer (avoids allocation per message).
    pub(crate) norm_buf: String,
    /// Scratch: which keyword parts were seen in the current message.
    pub(crate) parts_seen: Vec<bool>,
    /// Scratch: indices set in `parts_seen`, for cheap per-message reset.
    pub(crate) parts_touched: SmallVec<[u32; 16]>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer with default configuration and no topics.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with custom configuration and no topics.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self::with_topics(&TopicSet::new(), config)
    }

    /// Creates an analyzer matching against the given topic set.
    ///
    /// Keyword phrases are compiled through the same normalize/tokenize
    /// pipeline applied to messages, so matching is exact-token and
    /// case-insensitive.
    pub fn with_topics(topics: &TopicSet, config: AnalyzerConfig) -> Self {
        let normalizer = TextNormalizer::new();
        let stop_words = if config.filter_stop_words {
            StopwordFilter::english()
        } else {
            StopwordFilter::empty()
        };
        let tokenizer = Tokenizer::new(&config.punctuation).with_stop_words(stop_words);
        let compiled = CompiledTopics::compile(topics, &normalizer, &tokenizer);

        Self {
            freq: FxHashMap::default(),
            messages: 0,
            words: 0,
            chars: 0,
            normalizer,
            tokenizer,
            topic_hits: vec![0; compiled.num_topics()],
            parts_seen: vec![false; compiled.num_parts()],
            parts_touched: SmallVec::new(),
            topics: compiled,
            config,
            norm_buf: String::with_capacity(256),
        }
    }

    /// Returns the number of messages folded so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> u64 {
        self.messages
    }

    /// Returns `true` if no messages have been folded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages == 0
    }

    /// Returns the number of distinct tokens seen so far.
    #[inline]
    #[must_use]
    pub fn unique_tokens(&self) -> usize {
        self.freq.len()
    }

    /// Resets all counters and the frequency table.
    ///
    /// Configuration and compiled topics are kept.
    pub fn clear(&mut self) {
        self.freq.clear();
        self.messages = 0;
        self.words = 0;
        self.chars = 0;
        self.topic_hits.iter_mut().for_each(|hits| *hits = 0);
        self.parts_seen.iter_mut().for_each(|seen| *seen = false);
        self.parts_touched.clear();
    }
}
