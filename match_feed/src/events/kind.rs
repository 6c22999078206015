//! The closed set of event tags the story engine knows about.

use serde::{Deserialize, Serialize};

/// Event type tag, parsed from the feed's free-text `type` field.
///
/// Anything outside the known set is kept verbatim (normalized) as [`EventKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Goal,
    PenaltyGoal,
    RedCard,
    PenaltyWon,
    PenaltyLost,
    AttemptSaved,
    AttemptBlocked,
    Post,
    Miss,
    YellowCard,
    Corner,
    Other(String),
}

impl EventKind {
    /// Parse a raw feed type. Matching is on the trimmed, lower-cased text.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "goal" => EventKind::Goal,
            "penalty goal" => EventKind::PenaltyGoal,
            "red card" => EventKind::RedCard,
            "penalty won" => EventKind::PenaltyWon,
            "penalty lost" => EventKind::PenaltyLost,
            "attempt saved" => EventKind::AttemptSaved,
            "attempt blocked" => EventKind::AttemptBlocked,
            "post" => EventKind::Post,
            "miss" => EventKind::Miss,
            "yellow card" => EventKind::YellowCard,
            "corner" => EventKind::Corner,
            _ => EventKind::Other(normalized),
        }
    }

    /// Normalized feed label of this kind.
    pub fn label(&self) -> &str {
        match self {
            EventKind::Goal => "goal",
            EventKind::PenaltyGoal => "penalty goal",
            EventKind::RedCard => "red card",
            EventKind::PenaltyWon => "penalty won",
            EventKind::PenaltyLost => "penalty lost",
            EventKind::AttemptSaved => "attempt saved",
            EventKind::AttemptBlocked => "attempt blocked",
            EventKind::Post => "post",
            EventKind::Miss => "miss",
            EventKind::YellowCard => "yellow card",
            EventKind::Corner => "corner",
            EventKind::Other(s) => s,
        }
    }

    /// Goals change the scoreline.
    pub fn is_goal(&self) -> bool {
        matches!(self, EventKind::Goal | EventKind::PenaltyGoal)
    }

    /// Shots that did not go in.
    pub fn is_chance(&self) -> bool {
        matches!(
            self,
            EventKind::AttemptSaved | EventKind::AttemptBlocked | EventKind::Miss | EventKind::Post
        )
    }

    pub fn is_card(&self) -> bool {
        matches!(self, EventKind::YellowCard | EventKind::RedCard)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
