use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Field of the payload object that holds the list of strings
pub const DEFAULT_LIST_FIELD: &str = "words";

/// Built-in entries shown whenever the external payload cannot be used
pub const FALLBACK_ENTRIES: [&str; 10] = [
    "Snackcident (n.): eating an entire bag of chips when you only meant to have one.",
    "Procrastinap (v.): a nap taken specifically to avoid doing something else.",
    "Quantum squirrel (n.): a rodent that exists in every tree until you try to find it.",
    "Wi-fight (n.): an argument over who is hogging the bandwidth.",
    "Errorist (n.): someone who makes the same typo in every commit message.",
    "Cellfish (adj.): talking loudly on the phone in a room full of people.",
    "Blamestorming (n.): a meeting held to decide whose fault it was.",
    "Textpectation (n.): the anxiety felt while waiting for a reply.",
    "Hangry (adj.): irritable to the point of rudeness because lunch is late.",
    "Nomophobia (n.): the fear of being separated from your phone.",
];

/// Where the loaded strings came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceOrigin {
    /// Parsed from the external payload at `location`
    Payload { location: String },
    /// The payload was unusable; `reason` says why
    Fallback { reason: String },
}

impl SourceOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SourceOrigin::Fallback { .. })
    }
}

/// Ordered, non-empty, immutable list of strings that entries cycle through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceList {
    items: Vec<String>,
    origin: SourceOrigin,
    loaded_at: DateTime<Utc>,
}

impl SourceList {
    /// Returns `None` for an empty list; a source list always has at least one item.
    pub fn new(items: Vec<String>, origin: SourceOrigin) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            origin,
            loaded_at: Utc::now(),
        })
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            items: FALLBACK_ENTRIES.iter().map(|s| s.to_string()).collect(),
            origin: SourceOrigin::Fallback {
                reason: reason.into(),
            },
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed list
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cyclic lookup: index `i` maps to `items[i mod len]`
    pub fn cyclic(&self, index: u64) -> &str {
        let len = self.items.len() as u64;
        &self.items[(index % len) as usize]
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Index<usize> for SourceList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.items[index]
    }
}
