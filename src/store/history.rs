//! Recent analyses, most recent first.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::VecDeque;

use crate::detect::AnalysisResult;

/// Number of analyses retained.
pub const HISTORY_CAPACITY: usize = 5;

/// A stored analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in epoch milliseconds.
    pub id: i64,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// Fixed-capacity ring buffer of analyses. Pushing onto a full buffer
/// evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, keeping the first `HISTORY_CAPACITY`.
    fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut history = Self::default();
        history
            .entries
            .extend(entries.into_iter().take(HISTORY_CAPACITY));
        history
    }

    /// Record an analysis as the most recent entry.
    pub fn push(&mut self, analysis: AnalysisResult) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_back();
        }
        let id = analysis.created_at.timestamp_millis();
        self.entries.push_front(HistoryEntry { id, analysis });
    }

    /// Entry by position, 0 being the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<HistoryEntry>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
