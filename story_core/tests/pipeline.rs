//! Whole-pipeline scenarios over files on disk.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use story_core::*;

fn write(dir: &Path, name: &str, value: Value) {
    fs::write(dir.join(name), serde_json::to_string(&value).unwrap()).unwrap();
}

fn paths_for(dir: &Path, events: Value) -> PathsConfig {
    write(
        dir,
        "match_events.json",
        json!({
            "matchInfo": {
                "contestant": [
                    {"id": "A", "name": "Team A", "position": "home"},
                    {"id": "B", "name": "Team B", "position": "away"}
                ],
                "localDate": "2025-11-26"
            },
            "messages": [{"message": events}]
        }),
    );
    write(
        dir,
        "home.json",
        json!({"squad": [{"person": [
            {"id": "a9", "type": "player", "firstName": "Alex", "lastName": "Striker"}
        ]}]}),
    );
    write(
        dir,
        "away.json",
        json!({"squad": [{"person": [
            {"id": "b1", "type": "player", "firstName": "Bo", "lastName": "Keeper"}
        ]}]}),
    );
    write(
        dir,
        "assets.json",
        json!([
            {"filename": "crowd.jpg", "description": "Fans in the stand"},
            {"filename": "striker.jpg", "description": "Alex Striker celebrates his goal"}
        ]),
    );

    PathsConfig {
        match_events: dir.join("match_events.json"),
        home_squad: dir.join("home.json"),
        away_squad: dir.join("away.json"),
        asset_descriptions: dir.join("assets.json"),
        out_dir: dir.join("out"),
    }
}

fn match_events() -> Value {
    json!([
        {"type": "corner", "minute": "2", "second": "0", "teamRef1": "A"},
        {"type": "goal", "minute": "5", "second": "0", "teamRef1": "A", "playerRef1": "a9",
         "comment": "Goal! Team A 1, Team B 0."},
        {"type": "attempt saved", "minute": "78", "second": "3", "teamRef1": "A", "playerRef1": "a9",
         "playerRef2": "b1"},
        {"type": "miss", "minute": "30", "second": "0", "teamRef1": "B"},
        {"type": "goal", "minute": "90", "second": "30", "teamRef1": "B"},
        {"type": "yellow card", "minute": "44", "second": "0", "teamRef1": "B", "playerRef1": "b1"}
    ])
}

#[test]
fn test_corner_only_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_for(
        dir.path(),
        json!([{"type": "corner", "minute": 10}]),
    );

    let story = StoryBuilder::default().build_from_paths(&paths, 7).unwrap();

    let kinds: Vec<_> = story.pages.iter().map(Page::kind).collect();
    assert_eq!(kinds, vec!["cover", "info"]);
    assert_eq!(story.metrics.highlights, 0);
}

#[test]
fn test_full_run_is_chronological_and_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_for(dir.path(), match_events());
    let builder = StoryBuilder::default();

    let first = builder.build_from_paths(&paths, 3).unwrap();
    let second = builder.build_from_paths(&paths, 3).unwrap();

    let shape = |story: &Story| -> Vec<(String, Option<i32>)> {
        story
            .pages
            .iter()
            .map(|p| match p {
                Page::Highlight(h) => (h.headline.clone(), Some(h.minute)),
                Page::Cover(c) => (c.headline.clone(), None),
                Page::Info(i) => (i.headline.clone(), None),
            })
            .collect()
    };
    assert_eq!(shape(&first), shape(&second));
    assert_ne!(first.id, second.id);

    // Goals at 5' (155) and 90' (150 with the equalizer), then the late save (80).
    let minutes: Vec<_> = first
        .highlights()
        .map(|p| match p {
            Page::Highlight(h) => h.minute,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(minutes, vec![5, 78, 90]);
    assert_eq!(first.metrics, StoryMetrics { goals: 2, highlights: 3 });

    let Page::Cover(cover) = &first.pages[0] else {
        panic!("cover must be first");
    };
    assert_eq!(cover.caption, "Final score 1-1");
    assert_eq!(cover.headline, "Team A vs Team B - 2025-11-26");

    let Page::Highlight(opener) = &first.pages[1] else {
        panic!("expected highlight");
    };
    assert_eq!(opener.headline, "GOAL — Alex Striker");
    assert_eq!(opener.image, "../assets/striker.jpg");
    assert_eq!(opener.caption, "Goal! Team A 1, Team B 0.");

    let Page::Highlight(save) = &first.pages[2] else {
        panic!("expected highlight");
    };
    assert_eq!(save.players, vec!["Alex Striker", "Bo Keeper"]);
    assert_eq!(save.headline, "Attempt Saved — Alex Striker, Bo Keeper");
}

#[test]
fn test_story_written_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_for(dir.path(), match_events());
    let story = StoryBuilder::default().build_from_paths(&paths, 7).unwrap();

    let store = JsonDirStore::new(&paths.out_dir);
    let written = store.save(&story, "story.json").unwrap();

    let json: Value = serde_json::from_str(&fs::read_to_string(written).unwrap()).unwrap();
    let pages = json["pages"].as_array().unwrap();
    assert_eq!(pages[0]["type"], "cover");
    assert_eq!(pages.iter().filter(|p| p["type"] == "cover").count(), 1);
    assert_eq!(json["metrics"]["highlights"], 5);
    for page in pages {
        assert!(page["id"].is_string());
        assert!(page["created_at"].as_str().unwrap().ends_with('Z'));
    }

    let ids: std::collections::HashSet<_> = pages.iter().map(|p| p["id"].to_string()).collect();
    assert_eq!(ids.len(), pages.len());
}
