//! Streaming word tokenizer.
//!
//! Second stage of the pipeline: splits normalized text into word
//! tokens. Given normalized input like `"hello world!!"` it emits each
//! cleaned word with its position:
//!
//! ```ignore
//! ("hello", 0)
//! ("world", 1)
//! ```
//!
//! Per whitespace-delimited segment the tokenizer strips every
//! occurrence of the configured punctuation characters, drops segments
//! that strip to nothing, and optionally filters stop words. Segments
//! that contain no punctuation are emitted as slices of the input, so
//! the common path allocates nothing.
//!
//! ## The input contract
//!
//! The tokenizer expects **pre-normalized** input: all lowercase, no
//! leading or trailing whitespace, no consecutive spaces. The
//! normalizer guarantees this; violations panic in debug builds.

use memchr::memchr_iter;

use crate::analyzer::stopwords::StopwordFilter;

/// Streaming tokenizer over normalized text.
///
/// Reusable and restartable: each call to [`Tokenizer::tokenize`]
/// performs a fresh left-to-right scan and emits tokens through a
/// callback, so no intermediate collection is built.
///
/// # Examples
///
/// ```
/// use banter_core::analyzer::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::new("!?");
/// let mut tokens = Vec::new();
///
/// tokenizer.tokenize("great!! stuff", |token, pos| {
///     tokens.push((token.to_string(), pos));
/// });
///
/// assert_eq!(tokens, vec![("great".to_string(), 0), ("stuff".to_string(), 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Per-byte strip table for the configured ASCII punctuation.
    strip: [bool; 128],
    stop_words: StopwordFilter,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(banter_types::DEFAULT_PUNCTUATION)
    }
}

impl Tokenizer {
    /// Creates a tokenizer stripping the given punctuation characters.
    ///
    /// Only ASCII characters take effect; anything else in `punctuation`
    /// is ignored.
    pub fn new(punctuation: &str) -> Self {
        let mut strip = [false; 128];
        for ch in punctuation.chars() {
            if ch.is_ascii() {
                strip[ch as usize] = true;
            }
        }
        Self {
            strip,
            stop_words: StopwordFilter::empty(),
        }
    }

    /// Attaches a stop-word filter; filtered tokens are never emitted.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopwordFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    #[inline(always)]
    fn strips(&self, b: u8) -> bool {
        b < 128 && self.strip[b as usize]
    }

    /// Tokenizes normalized input and emits `(token, position)`.
    ///
    /// Position counts emitted tokens from zero; dropped segments do not
    /// advance it. Empty input emits nothing.
    pub fn tokenize<F>(&self, normalized: &str, mut emit: F)
    where
        F: FnMut(&str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace — normalizer contract violated"
        );
        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace — normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        // Scratch for segments that need punctuation stripped; reused
        // across segments within this call.
        let mut scratch = String::new();
        let mut pos = 0u32;
        let mut start = 0usize;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                self.emit_segment(&normalized[start..i], &mut scratch, &mut pos, &mut emit);
            }
            start = i + 1;
        }

        if start < bytes.len() {
            self.emit_segment(&normalized[start..], &mut scratch, &mut pos, &mut emit);
        }
    }

    fn emit_segment<F>(&self, segment: &str, scratch: &mut String, pos: &mut u32, emit: &mut F)
    where
        F: FnMut(&str, u32),
    {
        let token: &str = if segment.bytes().any(|b| self.strips(b)) {
            scratch.clear();
            for ch in segment.chars() {
                if !(ch.is_ascii() && self.strip[ch as usize]) {
                    scratch.push(ch);
                }
            }
            scratch.as_str()
        } else {
            segment
        };

        if token.is_empty() || self.stop_words.contains(token) {
            return;
        }

        emit(token, *pos);
        *pos = pos.saturating_add(1);
    }
}
