//! Report assembly: averages, top-N ranking, topic matching.

use banter_types::{Report, TokenEntry, TopicMatch};

use crate::corpus::types::Analyzer;

impl Analyzer {
    /// Builds the report for everything folded so far.
    ///
    /// Pure with respect to accumulated state: calling this repeatedly
    /// yields identical reports, and the fold may continue afterwards.
    /// An empty corpus produces zeros and empty lists; average words
    /// per message is defined as `0.0` in that case, as a boundary
    /// policy rather than an error.
    #[must_use]
    pub fn report(&self) -> Report {
        let avg = if self.messages > 0 {
            self.words as f64 / self.messages as f64
        } else {
            0.0
        };

        Report {
            messages: self.messages,
            words: self.words,
            chars: self.chars,
            avg_words_per_message: avg,
            top_tokens: self.top_tokens(self.config.top_n),
            topics: self.matched_topics(),
        }
    }

    /// Top-`n` frequency-table entries.
    ///
    /// Ordered by descending count; ties break in ascending token order
    /// so equal-count rankings are deterministic.
    pub(crate) fn top_tokens(&self, n: usize) -> Vec<TokenEntry> {
        if n == 0 {
            return Vec::new();
        }

        let mut entries: Vec<TokenEntry> = self
            .freq
            .iter()
            .map(|(token, &count)| TokenEntry::new(token.clone(), count))
            .collect();
        entries.sort_unstable();
        entries.truncate(n);
        entries
    }

    /// Topics whose corpus-wide keyword presence clears the threshold,
    /// in configuration order.
    ///
    /// A keyword phrase counts as present when every one of its tokens
    /// has a frequency-table count above zero. A threshold of zero is
    /// treated as one: a topic with no evidence at all is never matched.
    pub(crate) fn matched_topics(&self) -> Vec<TopicMatch> {
        let threshold = self.config.min_keyword_matches.max(1);
        let mut matches = Vec::new();

        for (idx, label) in self.topics.labels.iter().enumerate() {
            let matched_keywords = self
                .topics
                .blocks
                .iter()
                .filter(|block| block.topic as usize == idx)
                .filter(|block| {
                    self.topics
                        .block_parts(block)
                        .iter()
                        .all(|part| self.freq.contains_key(part))
                })
                .count();

            if matched_keywords >= threshold {
                matches.push(TopicMatch {
                    label: label.clone(),
                    matched_keywords,
                    messages: self.topic_hits[idx],
                });
            }
        }

        matches
    }
}
