//! Loader for the match document: contestants, date and the event stream.

use serde_json::Value;
use std::path::Path;

use crate::entities::Team;
use crate::error::{read_json, FeedError, Result};
use crate::events::{normalize_events, Event};
use crate::match_state::Teams;

const UNKNOWN_DATE: &str = "Unknown Date";

/// Everything the story engine needs from one match document.
#[derive(Debug, Clone)]
pub struct MatchFeed {
    pub teams: Teams,

    /// Local kick-off date as printed by the feed.
    pub local_date: String,

    /// Events in chronological order.
    pub events: Vec<Event>,
}

impl MatchFeed {
    /// Read and normalize a match document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let doc = read_json(path)?;
        let feed = Self::from_document(&doc)?;
        tracing::info!(
            path = %path.display(),
            events = feed.events.len(),
            home = %feed.teams.home.name,
            away = %feed.teams.away.name,
            "match feed loaded"
        );
        Ok(feed)
    }

    /// Interpret a parsed `{"matchInfo": ..., "messages": [{"message": [...]}]}` document.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let match_info = doc.get("matchInfo").unwrap_or(&Value::Null);
        let teams = resolve_teams(match_info)?;

        let local_date = match_info
            .get("localDate")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_DATE)
            .to_string();

        let messages = doc
            .get("messages")
            .and_then(Value::as_array)
            .and_then(|blocks| blocks.first())
            .and_then(|block| block.get("message"))
            .and_then(Value::as_array)
            .ok_or(FeedError::MissingMessages)?;

        Ok(Self {
            teams,
            local_date,
            events: normalize_events(messages),
        })
    }
}

/// Pick home and away contestants by `position`, falling back to document order.
fn resolve_teams(match_info: &Value) -> Result<Teams> {
    let contestants: Vec<&Value> = match_info
        .get("contestant")
        .and_then(Value::as_array)
        .map(|list| list.iter().collect())
        .unwrap_or_default();

    if contestants.len() < 2 {
        return Err(FeedError::MissingContestants {
            found: contestants.len(),
        });
    }

    let by_position = |position: &str| {
        contestants
            .iter()
            .copied()
            .find(|c| c.get("position").and_then(Value::as_str) == Some(position))
    };

    let home = by_position("home").unwrap_or(contestants[0]);
    let away = by_position("away").unwrap_or(contestants[1]);

    Ok(Teams::new(to_team(home), to_team(away)))
}

fn to_team(contestant: &Value) -> Team {
    let field = |key: &str| {
        contestant
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Team::new(field("id"), field("name"))
}
