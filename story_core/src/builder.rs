//! End-to-end pipeline: feed -> scores -> selection -> assets -> pages -> story.

use match_feed::{AssetCatalog, MatchFeed, PlayerDirectory};

use crate::asset_matcher::AssetMatcher;
use crate::config::{PathsConfig, StorySettings};
use crate::error::Result;
use crate::pages::{PageAssembler, Story};
use crate::scoring::ScoringEngine;
use crate::selection::select;

/// Everything loaded from disk for one run.
#[derive(Debug, Clone)]
pub struct StoryInputs {
    pub feed: MatchFeed,
    pub players: PlayerDirectory,
    pub catalog: AssetCatalog,
}

impl StoryInputs {
    /// Load the match, both squads and the asset catalog.
    pub fn load(paths: &PathsConfig) -> Result<Self> {
        let feed = MatchFeed::load(&paths.match_events)?;
        let home = PlayerDirectory::load(&paths.home_squad)?;
        let away = PlayerDirectory::load(&paths.away_squad)?;
        let catalog = AssetCatalog::load(&paths.asset_descriptions)?;
        Ok(Self {
            feed,
            players: PlayerDirectory::union(home, away),
            catalog,
        })
    }
}

/// Builds stories according to a set of [`StorySettings`].
#[derive(Debug, Clone)]
pub struct StoryBuilder {
    settings: StorySettings,
    matcher: AssetMatcher,
    assembler: PageAssembler,
}

impl StoryBuilder {
    pub fn new(settings: StorySettings) -> Self {
        let matcher = AssetMatcher::new(&settings.asset_root, &settings.placeholder_image);
        let assembler = PageAssembler::new(&settings.cover_image, &settings.placeholder_image);
        Self {
            settings,
            matcher,
            assembler,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(StorySettings::default())
    }

    pub fn settings(&self) -> &StorySettings {
        &self.settings
    }

    /// Build a story from loaded inputs, keeping at most `top_n` highlights.
    pub fn build(&self, inputs: &StoryInputs, top_n: usize) -> Story {
        let feed = &inputs.feed;
        let engine = ScoringEngine::new(feed.teams.clone());
        let selection = select(&feed.events, top_n, &engine);

        let highlights = selection
            .selected
            .iter()
            .map(|scored| {
                let players = inputs.players.involved_names(scored.event);
                let image = self.matcher.pick(scored.event, &players, &inputs.catalog);
                self.assembler.highlight(scored, players, image)
            })
            .collect();

        let cover = self
            .assembler
            .cover(&feed.teams, &feed.local_date, &selection.final_state);

        self.assembler.assemble(
            cover,
            highlights,
            feed.teams.fixture_title(),
            &self.settings.source,
        )
    }

    /// Build with the configured default highlight count.
    pub fn build_default(&self, inputs: &StoryInputs) -> Story {
        self.build(inputs, self.settings.top_n)
    }

    /// Load everything from `paths` and build.
    pub fn build_from_paths(&self, paths: &PathsConfig, top_n: usize) -> Result<Story> {
        let inputs = StoryInputs::load(paths)?;
        Ok(self.build(&inputs, top_n))
    }
}

impl Default for StoryBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}
