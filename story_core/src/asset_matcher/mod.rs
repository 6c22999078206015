//! Asset Matcher - choose the catalog image that best fits a highlight.
//!
//! Relevance is a plain text heuristic over the case-folded asset descriptions:
//! player names are the strong signal, event keywords break the rest.

use match_feed::{Asset, AssetCatalog, Event, EventKind};

/// Award per involved player named in a description.
const PLAYER_MATCH: u32 = 100;
const SCORING_KEYWORD: u32 = 25;
const CELEBRATION_KEYWORD: u32 = 15;
const PENALTY_KEYWORD: u32 = 25;
const CARD_KEYWORD: u32 = 10;

/// Relevance of one asset for an event kind and its resolved player names.
pub fn relevance(asset: &Asset, kind: &EventKind, player_names: &[String]) -> u32 {
    let mut score = 0;

    for name in player_names {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if asset.mentions(&name.to_lowercase()) {
            score += PLAYER_MATCH;
        }
    }

    if kind.is_goal() {
        if asset.mentions("scores") || asset.mentions("goal") {
            score += SCORING_KEYWORD;
        }
        if asset.mentions("celebrates") || asset.mentions("celebration") {
            score += CELEBRATION_KEYWORD;
        }
    }

    if *kind == EventKind::PenaltyGoal && asset.mentions("penalty") {
        score += PENALTY_KEYWORD;
    }

    if kind.is_card() && asset.mentions("card") {
        score += CARD_KEYWORD;
    }

    score
}

/// The most relevant asset, or `None` when nothing scores above zero.
///
/// Ties go to the asset listed first.
pub fn best_match<'c>(
    catalog: &'c AssetCatalog,
    kind: &EventKind,
    player_names: &[String],
) -> Option<&'c Asset> {
    let mut best: Option<(&Asset, u32)> = None;
    for asset in catalog.iter() {
        let score = relevance(asset, kind, player_names);
        let best_score = best.map_or(0, |(_, s)| s);
        if score > best_score {
            best = Some((asset, score));
        }
    }
    best.map(|(asset, _)| asset)
}

/// Turns matches into image references for pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMatcher {
    /// Prefix joined to catalog filenames (e.g. `../assets`).
    asset_root: String,
    /// Reference used when no asset is relevant.
    default_asset: String,
}

impl AssetMatcher {
    pub fn new(asset_root: impl Into<String>, default_asset: impl Into<String>) -> Self {
        Self {
            asset_root: asset_root.into(),
            default_asset: default_asset.into(),
        }
    }

    pub fn default_asset(&self) -> &str {
        &self.default_asset
    }

    /// Image reference for `event`, falling back to the default asset.
    pub fn pick(&self, event: &Event, player_names: &[String], catalog: &AssetCatalog) -> String {
        match best_match(catalog, &event.kind, player_names) {
            Some(asset) => self.reference(asset),
            None => {
                tracing::debug!(kind = %event.kind, minute = event.minute, "no relevant asset, using default");
                self.default_asset.clone()
            }
        }
    }

    fn reference(&self, asset: &Asset) -> String {
        let root = self.asset_root.trim_end_matches('/');
        if root.is_empty() {
            asset.filename.clone()
        } else {
            format!("{}/{}", root, asset.filename)
        }
    }
}

impl Default for AssetMatcher {
    fn default() -> Self {
        Self::new("../assets", "../assets/placeholder.png")
    }
}
