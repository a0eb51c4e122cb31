//! Compiled topic-keyword configuration.
//!
//! The configured [`TopicSet`] is static data supplied by the caller.
//! Compilation runs each keyword phrase through the same normalizer and
//! tokenizer applied to messages, then flattens the resulting tokens
//! ("parts") into one table with span blocks per phrase. An inverted
//! lookup maps a token to every part slot it fills, so the fold can
//! mark keyword progress in O(1) per token.

use banter_types::TopicSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::analyzer::normalizer::TextNormalizer;
use crate::analyzer::tokenizer::Tokenizer;

/// One keyword phrase: a span into the flattened part table.
///
/// A phrase is present in a piece of text only when every part in its
/// span is present.
#[derive(Clone, Copy, Debug)]
pub(crate) struct KeywordBlock {
    /// Index of the owning topic, in configuration order.
    pub(crate) topic: u16,
    pub(crate) offset: u32,
    pub(crate) len: u32,
}

/// Topic configuration compiled for matching.
#[derive(Debug, Default)]
pub(crate) struct CompiledTopics {
    /// Topic labels, in configuration order.
    pub(crate) labels: Vec<String>,
    /// Keyword phrase spans, grouped by topic in configuration order.
    pub(crate) blocks: Vec<KeywordBlock>,
    /// Flattened phrase tokens.
    pub(crate) parts: Vec<String>,
    /// Token → part slots it fills (a token may appear in several phrases).
    pub(crate) lookup: FxHashMap<String, SmallVec<[u32; 4]>>,
}

impl CompiledTopics {
    /// Compiles a topic set with the pipeline used for messages.
    ///
    /// Phrases that tokenize to nothing (all punctuation, or entirely
    /// stop words under a filtering configuration) are dropped: their
    /// tokens could never appear in the frequency table either.
    pub(crate) fn compile(
        set: &TopicSet,
        normalizer: &TextNormalizer,
        tokenizer: &Tokenizer,
    ) -> Self {
        let mut compiled = Self::default();
        let mut norm_buf = String::new();

        for (topic_idx, topic) in set.topics().iter().enumerate() {
            compiled.labels.push(topic.label.clone());

            for phrase in &topic.keywords {
                normalizer.normalize_into(phrase, &mut norm_buf);

                let offset = compiled.parts.len() as u32;
                tokenizer.tokenize(&norm_buf, |token, _| {
                    compiled.parts.push(token.to_string());
                });
                let len = compiled.parts.len() as u32 - offset;

                if len == 0 {
                    continue;
                }
                compiled.blocks.push(KeywordBlock {
                    topic: topic_idx as u16,
                    offset,
                    len,
                });
            }
        }

        for (idx, part) in compiled.parts.iter().enumerate() {
            compiled
                .lookup
                .entry(part.clone())
                .or_default()
                .push(idx as u32);
        }

        compiled
    }

    #[inline]
    pub(crate) fn num_topics(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub(crate) fn num_parts(&self) -> usize {
        self.parts.len()
    }

    /// Part tokens for one keyword phrase.
    #[inline]
    pub(crate) fn block_parts(&self, block: &KeywordBlock) -> &[String] {
        &self.parts[block.offset as usize..(block.offset + block.len) as usize]
    }
}
