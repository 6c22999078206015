//! Match events and the normalizer that puts the raw stream in time order.

mod fields;
mod kind;

pub use kind::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{PlayerId, TeamId};
use fields::{lenient_int, lenient_ref, lenient_text};

/// A single feed event. Immutable once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The feed's type text, untouched (used for display).
    pub event_type: String,

    /// Parsed tag of `event_type`.
    pub kind: EventKind,

    pub minute: i32,
    pub second: i32,

    /// Contestant the event is attributed to, if the feed named a usable one.
    pub team_ref: Option<TeamId>,

    pub player_ref_1: Option<PlayerId>,
    pub player_ref_2: Option<PlayerId>,

    /// Free-text commentary line.
    pub comment: String,
}

impl Event {
    /// Create an event of the given type at 0:00 with no references.
    pub fn new(event_type: impl Into<String>) -> Self {
        let event_type = event_type.into();
        Self {
            kind: EventKind::parse(&event_type),
            event_type,
            minute: 0,
            second: 0,
            team_ref: None,
            player_ref_1: None,
            player_ref_2: None,
            comment: String::new(),
        }
    }

    /// Set the match clock.
    pub fn at(mut self, minute: i32, second: i32) -> Self {
        self.minute = minute;
        self.second = second;
        self
    }

    /// Attribute the event to a team.
    pub fn by_team(mut self, team: impl Into<String>) -> Self {
        self.team_ref = Some(TeamId::new(team));
        self
    }

    /// Set the primary (and optionally secondary) player.
    pub fn with_players(mut self, first: impl Into<String>, second: Option<&str>) -> Self {
        self.player_ref_1 = Some(PlayerId::new(first));
        self.player_ref_2 = second.map(PlayerId::new);
        self
    }

    /// Set the commentary line.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Read one raw feed record (`type`, `minute`, `second`, `teamRef1`, `playerRef1`,
    /// `playerRef2`, `comment`). Malformed fields fall back to defaults.
    pub fn from_value(raw: &Value) -> Self {
        let event_type = lenient_text(raw.get("type"));
        Self {
            kind: EventKind::parse(&event_type),
            event_type,
            minute: lenient_int(raw.get("minute")),
            second: lenient_int(raw.get("second")),
            team_ref: lenient_ref(raw.get("teamRef1")).map(TeamId),
            player_ref_1: lenient_ref(raw.get("playerRef1")).map(PlayerId),
            player_ref_2: lenient_ref(raw.get("playerRef2")).map(PlayerId),
            comment: lenient_text(raw.get("comment")),
        }
    }

    /// Chronological ordering key.
    pub fn clock(&self) -> (i32, i32) {
        (self.minute, self.second)
    }
}

/// Parse raw records and stable-sort them by `(minute, second)`.
///
/// Records sharing a clock value keep their stream order.
pub fn normalize_events(raw: &[Value]) -> Vec<Event> {
    let mut events: Vec<Event> = raw.iter().map(Event::from_value).collect();
    events.sort_by_key(Event::clock);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_builder() {
        let event = Event::new("Penalty Goal")
            .at(92, 14)
            .by_team("A")
            .with_players("p1", Some("p2"))
            .with_comment("Converted!");

        assert_eq!(event.kind, EventKind::PenaltyGoal);
        assert_eq!(event.event_type, "Penalty Goal");
        assert_eq!(event.clock(), (92, 14));
        assert_eq!(event.team_ref, Some(TeamId::new("A")));
        assert_eq!(event.player_ref_2, Some(PlayerId::new("p2")));
    }

    #[test]
    fn test_from_value_reads_feed_fields() {
        let raw = json!({
            "type": "goal",
            "minute": "5",
            "second": "31",
            "teamRef1": "A",
            "playerRef1": "p1",
            "comment": "Goal! Team A 1, Team B 0."
        });

        let event = Event::from_value(&raw);
        assert_eq!(event.kind, EventKind::Goal);
        assert_eq!(event.clock(), (5, 31));
        assert_eq!(event.team_ref, Some(TeamId::new("A")));
        assert_eq!(event.player_ref_1, Some(PlayerId::new("p1")));
        assert!(event.player_ref_2.is_none());
        assert!(event.comment.starts_with("Goal!"));
    }

    #[test]
    fn test_from_value_degrades_malformed_fields() {
        let raw = json!({"minute": "abc", "second": null, "teamRef1": 3});

        let event = Event::from_value(&raw);
        assert_eq!(event.event_type, "");
        assert_eq!(event.kind, EventKind::Other(String::new()));
        assert_eq!(event.clock(), (0, 0));
        assert!(event.team_ref.is_none());
        assert_eq!(event.comment, "");
    }

    #[test]
    fn test_normalize_sorts_by_clock_and_keeps_ties_stable() {
        let raw = vec![
            json!({"type": "corner", "minute": "30", "second": "0", "comment": "late corner"}),
            json!({"type": "miss", "minute": "10", "second": "5", "comment": "first"}),
            json!({"type": "post", "minute": "10", "second": "5", "comment": "second"}),
            json!({"type": "goal", "minute": "10", "second": "1"}),
        ];

        let events = normalize_events(&raw);
        let kinds: Vec<_> = events.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Goal, EventKind::Miss, EventKind::Post, EventKind::Corner]
        );
        assert_eq!(events[1].comment, "first");
        assert_eq!(events[2].comment, "second");
    }
}
