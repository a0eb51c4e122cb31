//! Corpus aggregation: the streaming fold and report assembly.
//!
//! Single-threaded, synchronous, one pass over the message sequence.
//! The fold never fails; every edge case (empty corpus, no frequent
//! tokens, no topic matches) degrades to a zero or empty field in the
//! report.

mod fold;
mod report;
mod topics;
mod types;

pub use types::Analyzer;
