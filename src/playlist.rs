//! Playlist model and snapshot fetching.
//!
//! A snapshot is the player's current playlist zipped into `Song` values,
//! together with the song that is playing right now.

mod model;
mod snapshot;

pub use model::*;
pub use snapshot::*;
