//! Topic configuration: built-in defaults and JSON overrides.
//!
//! Topic keywords are static configuration injected into the analyzer,
//! never derived data. The file format is an ordered array so that the
//! report's topic order is reproducible:
//!
//! ```json
//! [
//!   { "label": "Technology", "keywords": ["cloud", "machine learning"] }
//! ]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use banter_types::{Topic, TopicSet};

#[derive(Debug, Deserialize)]
struct TopicEntry {
    label: String,
    keywords: Vec<String>,
}

/// Loads a topic set from a JSON file.
pub fn load_topics(path: &Path) -> anyhow::Result<TopicSet> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let entries: Vec<TopicEntry> = serde_json::from_reader(BufReader::new(file))
        .context("topics file must be a JSON array of {label, keywords} objects")?;

    Ok(entries
        .into_iter()
        .map(|entry| Topic {
            label: entry.label,
            keywords: entry.keywords,
        })
        .collect())
}

/// The built-in topic set for channel exports.
pub fn default_topics() -> TopicSet {
    TopicSet::new()
        .with_topic(
            "Project Management",
            &[
                "project", "schedule", "deadline", "task", "planning", "agile", "scrum",
            ],
        )
        .with_topic(
            "Marketing",
            &[
                "marketing",
                "advertising",
                "brand",
                "campaign",
                "seo",
                "social media",
            ],
        )
        .with_topic(
            "Technology",
            &[
                "technology",
                "ai",
                "machine learning",
                "cloud",
                "data science",
                "software",
            ],
        )
        .with_topic(
            "General",
            &["hello", "thanks", "agree", "comment", "thoughts", "meeting"],
        )
}
