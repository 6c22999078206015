//! Headline templates for highlight pages.

use match_feed::{Event, EventKind};

/// Headline for a highlight, e.g. `"GOAL — Johnny Kenny"`.
pub fn headline(event: &Event, players: &[String]) -> String {
    let lead = match event.kind {
        EventKind::Goal | EventKind::PenaltyGoal => "GOAL".to_string(),
        EventKind::YellowCard => "YELLOW CARD".to_string(),
        EventKind::RedCard => "RED CARD".to_string(),
        _ => {
            let titled = title_case(&event.event_type);
            if titled.is_empty() {
                "Highlight".to_string()
            } else {
                titled
            }
        }
    };

    if players.is_empty() {
        lead
    } else {
        format!("{} — {}", lead, players.join(", "))
    }
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
