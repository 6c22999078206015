//! Score results and their audit trail.

use serde::{Deserialize, Serialize};

/// Context bonuses the scorer can award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    /// Minute 80 or later.
    LateGame,
    /// Minute 90 or later, on top of `LateGame`.
    VeryLate,
    PenaltyGoal,
    /// Opens the scoring from 0-0.
    FirstGoal,
    /// Levels the match.
    Equalizer,
    /// Breaks a tie.
    GoAhead,
    /// One-goal lead becomes two.
    ExtendLead,
    /// Lead was already two or more.
    ExtendBigLead,
    /// Shot in a one-goal-or-closer game from minute 75.
    TightGameChance,
}

impl BonusKind {
    /// Fixed award for this bonus.
    pub const fn amount(self) -> u32 {
        match self {
            BonusKind::LateGame => 15,
            BonusKind::VeryLate => 5,
            BonusKind::PenaltyGoal => 10,
            BonusKind::FirstGoal => 25,
            BonusKind::Equalizer => 30,
            BonusKind::GoAhead => 30,
            BonusKind::ExtendLead => 15,
            BonusKind::ExtendBigLead => 5,
            BonusKind::TightGameChance => 20,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BonusKind::LateGame => "late_game",
            BonusKind::VeryLate => "very_late",
            BonusKind::PenaltyGoal => "penalty_goal_bonus",
            BonusKind::FirstGoal => "first_goal",
            BonusKind::Equalizer => "equalizer",
            BonusKind::GoAhead => "go_ahead",
            BonusKind::ExtendLead => "extend_lead",
            BonusKind::ExtendBigLead => "extend_big_lead",
            BonusKind::TightGameChance => "tight_game_chance",
        }
    }
}

/// One triggered bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusReason {
    pub kind: BonusKind,
    pub amount: u32,
}

impl From<BonusKind> for BonusReason {
    fn from(kind: BonusKind) -> Self {
        Self {
            kind,
            amount: kind.amount(),
        }
    }
}

impl std::fmt::Display for BonusReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.kind.label(), self.amount)
    }
}

/// Final importance of an event with its breakdown.
///
/// `score == base + context_bonus`, and `context_bonus` is the sum of `reasons`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub base: u32,
    pub context_bonus: u32,
    pub reasons: Vec<BonusReason>,
}

impl ScoreResult {
    /// Result for an event that is not highlight-eligible.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Start a result at `base` with no bonuses yet.
    pub fn from_base(base: u32) -> Self {
        Self {
            score: base,
            base,
            context_bonus: 0,
            reasons: Vec::new(),
        }
    }

    /// Award a bonus, keeping score, bonus total and reasons in step.
    pub fn award(&mut self, kind: BonusKind) {
        let reason = BonusReason::from(kind);
        self.context_bonus += reason.amount;
        self.score += reason.amount;
        self.reasons.push(reason);
    }

    pub fn is_eligible(&self) -> bool {
        self.score > 0
    }

    /// Whether a given bonus fired.
    pub fn has(&self, kind: BonusKind) -> bool {
        self.reasons.iter().any(|r| r.kind == kind)
    }

    /// Sum of the recorded reasons.
    pub fn reasons_total(&self) -> u32 {
        self.reasons.iter().map(|r| r.amount).sum()
    }

    /// `"base=100, first_goal=25, go_ahead=30"`.
    pub fn breakdown(&self) -> String {
        let mut parts = vec![format!("base={}", self.base)];
        parts.extend(self.reasons.iter().map(ToString::to_string));
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_keeps_totals_in_step() {
        let mut result = ScoreResult::from_base(100);
        result.award(BonusKind::FirstGoal);
        result.award(BonusKind::GoAhead);

        assert_eq!(result.score, 155);
        assert_eq!(result.context_bonus, 55);
        assert_eq!(result.reasons_total(), result.context_bonus);
        assert!(result.has(BonusKind::FirstGoal));
        assert!(!result.has(BonusKind::Equalizer));
    }

    #[test]
    fn test_reasons_keep_insertion_order() {
        let mut result = ScoreResult::from_base(60);
        result.award(BonusKind::LateGame);
        result.award(BonusKind::VeryLate);
        result.award(BonusKind::TightGameChance);

        let labels: Vec<_> = result.reasons.iter().map(|r| r.kind.label()).collect();
        assert_eq!(labels, vec!["late_game", "very_late", "tight_game_chance"]);
    }

    #[test]
    fn test_breakdown_and_display() {
        let mut result = ScoreResult::from_base(95);
        result.award(BonusKind::PenaltyGoal);
        assert_eq!(result.breakdown(), "base=95, penalty_goal_bonus=10");
        assert_eq!(BonusReason::from(BonusKind::Equalizer).to_string(), "equalizer=30");
    }

    #[test]
    fn test_zero_is_not_eligible() {
        assert!(!ScoreResult::zero().is_eligible());
        assert!(ScoreResult::from_base(10).is_eligible());
    }
}
