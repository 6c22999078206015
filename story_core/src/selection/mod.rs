//! Selection & Ordering - pick the top-N highlights and hand them back in match order.
//!
//! 1. **Pass**: walk the timeline once, scoring each event against the scoreline before it,
//!    then folding the event into the scoreline
//! 2. **Rank**: order candidates by score (descending), earlier events first on ties
//! 3. **Take**: keep the first `top_n`
//! 4. **Reorder**: sort the kept events back into timeline order

use match_feed::{Event, MatchState};

use crate::scoring::{ScoreResult, ScoringEngine};

/// A highlight candidate: timeline position, score and the event itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEvent<'a> {
    /// Position in the chronologically sorted timeline.
    pub index: usize,
    pub result: ScoreResult,
    pub event: &'a Event,
}

/// Outcome of one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<'a> {
    /// Every event with a positive score, in timeline order.
    pub candidates: Vec<ScoredEvent<'a>>,
    /// Scoreline after the last event.
    pub final_state: MatchState,
}

/// The chosen highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Chosen events, strictly increasing in `index`.
    pub selected: Vec<ScoredEvent<'a>>,
    pub final_state: MatchState,
    /// How many events were eligible before the cut.
    pub candidate_count: usize,
}

impl Selection<'_> {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Score every event in one forward pass with a fresh scoreline.
///
/// Each event is scored before it is folded into the state, so an event never sees itself.
pub fn score_timeline<'a>(events: &'a [Event], engine: &ScoringEngine) -> Timeline<'a> {
    let mut state = MatchState::new();
    let mut candidates = Vec::new();

    for (index, event) in events.iter().enumerate() {
        let result = engine.score(event, &state);
        if result.is_eligible() {
            tracing::debug!(
                index,
                minute = event.minute,
                kind = %event.kind,
                score = result.score,
                breakdown = %result.breakdown(),
                "highlight candidate"
            );
            candidates.push(ScoredEvent {
                index,
                result,
                event,
            });
        }
        state.apply_event(event, engine.teams());
    }

    Timeline {
        candidates,
        final_state: state,
    }
}

/// Keep the `top_n` best candidates and return them in timeline order.
pub fn rank(mut candidates: Vec<ScoredEvent<'_>>, top_n: usize) -> Vec<ScoredEvent<'_>> {
    candidates.sort_by(|a, b| {
        b.result
            .score
            .cmp(&a.result.score)
            .then(a.index.cmp(&b.index))
    });
    candidates.truncate(top_n);
    candidates.sort_by_key(|c| c.index);
    candidates
}

/// Full selection over a chronologically ordered timeline.
pub fn select<'a>(events: &'a [Event], top_n: usize, engine: &ScoringEngine) -> Selection<'a> {
    let Timeline {
        candidates,
        final_state,
    } = score_timeline(events, engine);
    let candidate_count = candidates.len();
    let selected = rank(candidates, top_n);

    tracing::info!(
        events = events.len(),
        candidates = candidate_count,
        selected = selected.len(),
        top_n,
        final_score = %final_state,
        "highlights selected"
    );

    Selection {
        selected,
        final_state,
        candidate_count,
    }
}
