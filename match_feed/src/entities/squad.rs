//! Player directory built from squad documents.

use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use super::PlayerId;
use crate::error::{read_json, Result};
use crate::events::Event;

/// Player id -> display name, unioned across both squads.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    names: HashMap<PlayerId, String>,
}

impl PlayerDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one squad document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let doc = read_json(path)?;
        let directory = Self::from_squad_document(&doc);
        if directory.is_empty() {
            tracing::warn!(path = %path.display(), "squad document yielded no players");
        }
        Ok(directory)
    }

    /// Build a directory from a `{"squad": [{"person": [...]}]}` document.
    ///
    /// Only the first squad entry is read. Non-player persons and persons without an id or
    /// any name part are skipped.
    pub fn from_squad_document(doc: &Value) -> Self {
        let mut directory = Self::new();

        let persons = doc
            .get("squad")
            .and_then(Value::as_array)
            .and_then(|squads| squads.first())
            .and_then(|entry| entry.get("person"))
            .and_then(Value::as_array);

        let Some(persons) = persons else {
            return directory;
        };

        for person in persons {
            if person.get("type").and_then(Value::as_str) != Some("player") {
                continue;
            }
            let Some(id) = person.get("id").and_then(Value::as_str).filter(|s| !s.is_empty())
            else {
                continue;
            };
            let first = name_part(person, "firstName");
            let last = name_part(person, "lastName");
            if first.is_empty() && last.is_empty() {
                continue;
            }
            let full_name = format!("{} {}", first, last).trim().to_string();
            directory.insert(PlayerId::new(id), full_name);
        }

        directory
    }

    /// Union of two squads. Entries from `away` win on duplicate ids.
    pub fn union(home: PlayerDirectory, away: PlayerDirectory) -> Self {
        let mut names = home.names;
        names.extend(away.names);
        Self { names }
    }

    /// Register a player name.
    pub fn insert(&mut self, id: PlayerId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Display name for a player id, if known.
    pub fn resolve(&self, id: &PlayerId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Resolved names of the players an event references, in reference order.
    ///
    /// Unknown ids are dropped, and the second player is dropped when it resolves to the
    /// same name as the first.
    pub fn involved_names(&self, event: &Event) -> Vec<String> {
        let mut players: Vec<String> = Vec::with_capacity(2);
        for id in [&event.player_ref_1, &event.player_ref_2].into_iter().flatten() {
            if let Some(name) = self.resolve(id) {
                if !players.iter().any(|p| p == name) {
                    players.push(name.to_string());
                }
            }
        }
        players
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn name_part(person: &Value, key: &str) -> String {
    match person.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string().trim().to_string(),
    }
}
