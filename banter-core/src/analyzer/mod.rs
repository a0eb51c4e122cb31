//! Text analysis pipeline: normalization, tokenization, stop words.
//!
//! The stages are deliberately separable. The normalizer produces the
//! contract the tokenizer relies on (lowercase, single spaces, no edge
//! whitespace), and both are reusable across messages without
//! allocation churn.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;
