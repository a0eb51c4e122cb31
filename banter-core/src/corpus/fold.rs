//! Folding messages into the corpus counters.

use banter_types::{CharCount, MessageId};

use crate::corpus::types::Analyzer;

impl Analyzer {
    /// Folds one message into the running totals.
    ///
    /// Never fails: an empty or all-whitespace message contributes zero
    /// tokens and only its message count. Returns the message's id, its
    /// position in the corpus.
    pub fn add(&mut self, message: &str) -> MessageId {
        let id = self.messages as MessageId;

        self.chars += match self.config.char_count {
            CharCount::Scalars => message.chars().count() as u64,
            CharCount::Bytes => message.len() as u64,
        };

        self.normalizer.normalize_into(message, &mut self.norm_buf);

        let mut tokens = 0u64;
        let Self {
            ref tokenizer,
            ref norm_buf,
            ref topics,
            ref mut freq,
            ref mut parts_seen,
            ref mut parts_touched,
            ..
        } = *self;

        tokenizer.tokenize(norm_buf, |token, _| {
            tokens += 1;

            // Allocate the key only on first sight of a token.
            match freq.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    freq.insert(token.to_string(), 1);
                }
            }

            if let Some(slots) = topics.lookup.get(token) {
                for &slot in slots {
                    if !parts_seen[slot as usize] {
                        parts_seen[slot as usize] = true;
                        parts_touched.push(slot);
                    }
                }
            }
        });

        self.words += tokens;
        self.messages += 1;

        if !self.parts_touched.is_empty() {
            self.credit_topic_hits();
        }

        id
    }

    /// Folds a batch of messages; returns how many were added.
    pub fn add_batch(&mut self, messages: &[&str]) -> usize {
        for message in messages {
            self.add(message);
        }
        messages.len()
    }

    /// Credits topics hit by the current message and resets the scratch.
    ///
    /// A topic is hit when any of its keyword phrases had every part
    /// present in the message; it is credited at most once per message.
    fn credit_topic_hits(&mut self) {
        let mut credited = u16::MAX;
        for block in &self.topics.blocks {
            if block.topic == credited {
                continue;
            }
            let start = block.offset as usize;
            let end = start + block.len as usize;
            if self.parts_seen[start..end].iter().all(|&seen| seen) {
                self.topic_hits[block.topic as usize] += 1;
                credited = block.topic;
            }
        }

        for &slot in &self.parts_touched {
            self.parts_seen[slot as usize] = false;
        }
        self.parts_touched.clear();
    }
}
