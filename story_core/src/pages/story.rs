//! The assembled story document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Page;

/// Unique identifier for stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub Uuid);

impl StoryId {
    /// Create a new random story ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryMetrics {
    /// Highlight pages showing a goal.
    pub goals: usize,
    /// Highlight pages in total.
    pub highlights: usize,
}

/// A ready-to-render story: the cover first, then highlights or a single info page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub pages: Vec<Page>,
    pub metrics: StoryMetrics,
    /// Path of the match document the story was built from.
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// Wrap pages into a story, computing metrics from them.
    pub fn new(title: impl Into<String>, pages: Vec<Page>, source: impl Into<String>) -> Self {
        let metrics = StoryMetrics {
            goals: pages.iter().filter(|p| p.is_goal_highlight()).count(),
            highlights: pages.iter().filter(|p| p.is_highlight()).count(),
        };
        Self {
            id: StoryId::new(),
            title: title.into(),
            pages,
            metrics,
            source: source.into(),
            created_at: Utc::now(),
        }
    }

    pub fn cover(&self) -> Option<&Page> {
        self.pages.first().filter(|p| matches!(p, Page::Cover(_)))
    }

    pub fn highlights(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| p.is_highlight())
    }
}
