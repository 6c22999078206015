//! Scoring Engine - importance of a single event given the scoreline before it.
//!
//! The score of an event is built in two stages:
//! 1. **Base**: a fixed value per event kind. Kinds outside the table score 0 and stop here.
//! 2. **Context**: additive bonuses from the match clock and the state *before* the event
//!    (late game, penalties, scoreline drama, big chances in tight games).

mod breakdown;

pub use breakdown::*;

use match_feed::{Event, EventKind, MatchState, Teams};

/// Clock thresholds for context bonuses.
const LATE_GAME_MINUTE: i32 = 80;
const VERY_LATE_MINUTE: i32 = 90;
const TIGHT_GAME_MINUTE: i32 = 75;
const TIGHT_GAME_MAX_DIFFERENCE: u32 = 1;

/// Base importance of an event kind.
pub fn base_score(kind: &EventKind) -> u32 {
    match kind {
        EventKind::Goal => 100,
        EventKind::PenaltyGoal => 95,
        EventKind::RedCard => 90,
        EventKind::PenaltyWon => 70,
        EventKind::PenaltyLost => 60,
        EventKind::AttemptSaved => 60,
        EventKind::AttemptBlocked => 55,
        EventKind::Post => 50,
        EventKind::Miss => 40,
        EventKind::YellowCard => 30,
        // Tracked, but never a highlight on its own.
        EventKind::Corner => 0,
        EventKind::Other(_) => 0,
    }
}

/// Scores events for one match. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    teams: Teams,
}

impl ScoringEngine {
    pub fn new(teams: Teams) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    /// Score `event` against the scoreline as it stood before the event.
    pub fn score(&self, event: &Event, state_before: &MatchState) -> ScoreResult {
        let base = base_score(&event.kind);
        if base == 0 {
            return ScoreResult::zero();
        }

        let mut result = ScoreResult::from_base(base);
        self.apply_clock_bonus(event, &mut result);

        if event.kind == EventKind::PenaltyGoal {
            result.award(BonusKind::PenaltyGoal);
        }

        if event.kind.is_goal() {
            self.apply_scoreline_bonus(event, state_before, &mut result);
        }

        if event.kind.is_chance()
            && state_before.difference() <= TIGHT_GAME_MAX_DIFFERENCE
            && event.minute >= TIGHT_GAME_MINUTE
        {
            result.award(BonusKind::TightGameChance);
        }

        result
    }

    fn apply_clock_bonus(&self, event: &Event, result: &mut ScoreResult) {
        if event.minute >= LATE_GAME_MINUTE {
            result.award(BonusKind::LateGame);
            if event.minute >= VERY_LATE_MINUTE {
                result.award(BonusKind::VeryLate);
            }
        }
    }

    /// Drama of a goal. Goals for an unrecognized team get nothing here.
    fn apply_scoreline_bonus(&self, event: &Event, before: &MatchState, result: &mut ScoreResult) {
        let Some(side) = self.teams.side_of_event(event) else {
            return;
        };

        let after = before.after_goal(side);
        let diff_before = before.difference();
        let diff_after = after.difference();

        if before.is_goalless() {
            result.award(BonusKind::FirstGoal);
        }
        if diff_after == 0 {
            result.award(BonusKind::Equalizer);
        }
        if diff_before == 0 && diff_after == 1 {
            result.award(BonusKind::GoAhead);
        }
        if diff_before == 1 && diff_after == 2 {
            result.award(BonusKind::ExtendLead);
        }
        if diff_before >= 2 {
            result.award(BonusKind::ExtendBigLead);
        }
    }
}
