//! The running scoreline, advanced one goal at a time in event order.

use serde::{Deserialize, Serialize};

use crate::entities::{Team, TeamId};
use crate::events::Event;

/// Which side of the fixture a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// The two contestants of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

impl Teams {
    pub fn new(home: Team, away: Team) -> Self {
        Self { home, away }
    }

    /// Which side a feed team reference points at. Unrecognized ids have no side.
    pub fn side_of(&self, team: &TeamId) -> Option<Side> {
        if *team == self.home.id {
            Some(Side::Home)
        } else if *team == self.away.id {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Side of the team an event is attributed to.
    pub fn side_of_event(&self, event: &Event) -> Option<Side> {
        event.team_ref.as_ref().and_then(|team| self.side_of(team))
    }

    /// `"Home vs Away"`.
    pub fn fixture_title(&self) -> String {
        format!("{} vs {}", self.home.name, self.away.name)
    }
}

/// Goals scored so far, starting at 0-0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchState {
    pub score_home: u32,
    pub score_away: u32,
}

impl MatchState {
    /// Kick-off state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score_home: u32, score_away: u32) -> Self {
        Self {
            score_home,
            score_away,
        }
    }

    /// Absolute goal difference.
    pub fn difference(&self) -> u32 {
        self.score_home.abs_diff(self.score_away)
    }

    pub fn is_goalless(&self) -> bool {
        self.score_home == 0 && self.score_away == 0
    }

    /// State after `side` scores once.
    pub fn after_goal(&self, side: Side) -> Self {
        match side {
            Side::Home => Self::with_score(self.score_home + 1, self.score_away),
            Side::Away => Self::with_score(self.score_home, self.score_away + 1),
        }
    }

    /// Fold one event into the scoreline.
    ///
    /// Only goals attributed to a known team move the score. Returns whether it changed.
    pub fn apply_event(&mut self, event: &Event, teams: &Teams) -> bool {
        if !event.kind.is_goal() {
            return false;
        }
        match teams.side_of_event(event) {
            Some(side) => {
                *self = self.after_goal(side);
                true
            }
            None => false,
        }
    }

    /// `"H-A"`.
    pub fn scoreline(&self) -> String {
        format!("{}-{}", self.score_home, self.score_away)
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scoreline())
    }
}
