//! # Story Core
//!
//! Turns a match feed into a short, ranked highlight story. This crate reads
//! `match_feed` types and never touches the filesystem outside of [`store`].
//!
//! ## Core Components
//!
//! - **scoring**: Base importance per event kind plus context bonuses from the scoreline
//! - **selection**: One pass over the timeline, top-N by score, re-sorted chronologically
//! - **asset_matcher**: Picks the best described image for a highlight
//! - **pages**: Cover, highlight and info pages and the assembled story
//! - **builder**: The end-to-end pipeline
//! - **config** / **store**: TOML configuration and the JSON output collaborator
//!
//! ## Determinism
//!
//! Scoring, selection and matching are pure functions of their inputs. Page ids and
//! timestamps are the only values minted at run time.

pub mod asset_matcher;
pub mod builder;
pub mod config;
pub mod error;
pub mod pages;
pub mod scoring;
pub mod selection;
pub mod store;

pub use asset_matcher::*;
pub use builder::*;
pub use config::*;
pub use error::*;
pub use pages::*;
pub use scoring::*;
pub use selection::*;
pub use store::*;
