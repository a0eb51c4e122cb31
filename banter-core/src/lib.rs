//! Message-corpus statistics and topic tagging.
//!
//! Two logical components, evaluated in sequence over one in-memory
//! corpus: the analysis pipeline ([`analyzer`]: normalize, then
//! tokenize) and the corpus fold ([`corpus`]) that turns per-message
//! token streams into corpus-wide counters and a final [`Report`].
//!
//! ```
//! use banter_core::Analyzer;
//!
//! let mut analyzer = Analyzer::new();
//! analyzer.add("Hello world");
//! analyzer.add("hello there");
//!
//! let report = analyzer.report();
//! assert_eq!(report.messages, 2);
//! assert_eq!(report.words, 4);
//! assert_eq!(report.top_tokens[0].token, "hello");
//! ```

pub mod analyzer;
pub mod corpus;

pub use banter_types::{
    AnalyzerConfig, CharCount, Report, TokenEntry, Topic, TopicMatch, TopicSet,
};
pub use corpus::Analyzer;
