//! Output collaborator: the only place a story touches the filesystem.

use std::path::{Path, PathBuf};

use crate::error::{Result, StoryError};
use crate::pages::Story;

/// Somewhere to put a finished story.
pub trait StoryStore {
    /// Persist `story` under `filename`, returning where it went.
    fn save(&self, story: &Story, filename: &str) -> Result<PathBuf>;
}

/// Writes pretty-printed JSON files into a directory, creating it on first save.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    out_dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl StoryStore for JsonDirStore {
    fn save(&self, story: &Story, filename: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.out_dir).map_err(|source| StoryError::Io {
            path: self.out_dir.clone(),
            source,
        })?;

        let path = self.out_dir.join(filename);
        let json = serde_json::to_string_pretty(story)?;
        std::fs::write(&path, json).map_err(|source| StoryError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), pages = story.pages.len(), "story written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageAssembler;
    use match_feed::{MatchState, Team, Teams};

    fn story() -> Story {
        let teams = Teams::new(Team::new("A", "Team A"), Team::new("B", "Team B"));
        let assembler = PageAssembler::default();
        let cover = assembler.cover(&teams, "2025-11-26", &MatchState::new());
        assembler.assemble(cover, Vec::new(), teams.fixture_title(), "../data/match_events.json")
    }

    #[test]
    fn test_save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::new(dir.path().join("nested").join("out"));
        let story = story();

        let path = store.save(&story, "story.json").unwrap();
        assert!(path.ends_with("nested/out/story.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let reloaded: Story = serde_json::from_str(&text).unwrap();
        assert_eq!(reloaded, story);
    }

    #[test]
    fn test_saved_document_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = JsonDirStore::new(dir.path()).save(&story(), "s.json").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

        for key in ["id", "title", "pages", "metrics", "source", "created_at"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["metrics"]["highlights"], 0);
        assert_eq!(json["pages"][0]["type"], "cover");
        assert_eq!(json["pages"][1]["type"], "info");
    }
}
