//! Page Assembler - renders cover, highlight and info pages and wraps them in a story.

mod headline;
mod story;

pub use headline::*;
pub use story::*;

use chrono::{DateTime, Utc};
use match_feed::{EventKind, MatchState, Teams};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::selection::ScoredEvent;

const NO_HIGHLIGHTS_HEADLINE: &str = "No highlights available";
const NO_HIGHLIGHTS_BODY: &str = "No events reached the highlight threshold for this match.";

/// Unique identifier for pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub Uuid);

impl PageId {
    /// Create a new random page ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A story page. Serialized with a `type` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Page {
    Cover(CoverPage),
    Highlight(HighlightPage),
    Info(InfoPage),
}

impl Page {
    pub fn id(&self) -> PageId {
        match self {
            Page::Cover(p) => p.id,
            Page::Highlight(p) => p.id,
            Page::Info(p) => p.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Page::Cover(p) => p.created_at,
            Page::Highlight(p) => p.created_at,
            Page::Info(p) => p.created_at,
        }
    }

    /// The `type` tag as serialized.
    pub fn kind(&self) -> &'static str {
        match self {
            Page::Cover(_) => "cover",
            Page::Highlight(_) => "highlight",
            Page::Info(_) => "info",
        }
    }

    pub fn is_highlight(&self) -> bool {
        matches!(self, Page::Highlight(_))
    }

    pub fn is_goal_highlight(&self) -> bool {
        match self {
            Page::Highlight(p) => EventKind::parse(&p.event_type).is_goal(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverPage {
    pub id: PageId,
    pub headline: String,
    pub image: String,
    pub caption: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightPage {
    pub id: PageId,
    pub minute: i32,
    pub headline: String,
    /// The feed's commentary line.
    pub caption: String,
    pub image: String,
    /// Score and breakdown that got this event selected.
    pub explanation: String,
    pub players: Vec<String>,
    pub event_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoPage {
    pub id: PageId,
    pub headline: String,
    pub body: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Builds pages; each page gets a fresh id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssembler {
    cover_image: String,
    placeholder_image: String,
}

impl PageAssembler {
    pub fn new(cover_image: impl Into<String>, placeholder_image: impl Into<String>) -> Self {
        Self {
            cover_image: cover_image.into(),
            placeholder_image: placeholder_image.into(),
        }
    }

    /// Title card: fixture, date and final score.
    pub fn cover(&self, teams: &Teams, local_date: &str, final_state: &MatchState) -> Page {
        Page::Cover(CoverPage {
            id: PageId::new(),
            headline: format!("{} - {}", teams.fixture_title(), local_date),
            image: self.cover_image.clone(),
            caption: format!("Final score {}", final_state.scoreline()),
            created_at: Utc::now(),
        })
    }

    /// One selected event.
    pub fn highlight(&self, scored: &ScoredEvent<'_>, players: Vec<String>, image: String) -> Page {
        let event = scored.event;
        Page::Highlight(HighlightPage {
            id: PageId::new(),
            minute: event.minute,
            headline: headline(event, &players),
            caption: event.comment.trim().to_string(),
            image,
            explanation: format!(
                "heuristic_score={} ({})",
                scored.result.score,
                scored.result.breakdown()
            ),
            players,
            event_type: event.event_type.clone(),
            created_at: Utc::now(),
        })
    }

    /// Fallback shown when nothing was selected.
    pub fn no_highlights(&self) -> Page {
        Page::Info(InfoPage {
            id: PageId::new(),
            headline: NO_HIGHLIGHTS_HEADLINE.to_string(),
            body: NO_HIGHLIGHTS_BODY.to_string(),
            image: self.placeholder_image.clone(),
            created_at: Utc::now(),
        })
    }

    /// Put the cover first, then the highlights, or the info page when there are none.
    pub fn assemble(&self, cover: Page, highlights: Vec<Page>, title: String, source: &str) -> Story {
        let mut pages = Vec::with_capacity(highlights.len() + 1);
        pages.push(cover);
        if highlights.is_empty() {
            pages.push(self.no_highlights());
        } else {
            pages.extend(highlights);
        }
        Story::new(title, pages, source)
    }
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new("../assets/cover.jpg", "../assets/placeholder.png")
    }
}
