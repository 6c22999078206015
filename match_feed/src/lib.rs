//! # Match Feed
//!
//! The data crate of the storyteller workspace. It owns everything read from disk about a
//! single match and holds no scoring logic.
//!
//! ## Core Components
//!
//! - **entities**: Team and player identifiers plus the squad-backed player directory
//! - **events**: Match events, their closed set of kinds, and time-ordering of the raw stream
//! - **match_state**: The running scoreline folded over the event stream
//! - **assets**: The catalog of described image assets
//! - **feed**: Loader for the match document (teams, date, event stream)
//!
//! Malformed fields degrade to safe defaults rather than failing. Only unreadable or
//! structurally unusable documents surface as [`FeedError`].

pub mod assets;
pub mod entities;
pub mod error;
pub mod events;
pub mod feed;
pub mod match_state;

pub use assets::*;
pub use entities::*;
pub use error::*;
pub use events::*;
pub use feed::*;
pub use match_state::*;
