//! Error type shared by every stage of a polling cycle.
//!
//! All variants are fatal for the process: the runtime stops the loop on
//! the first error and `main` reports it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The player query failed or replied with something we cannot parse.
    #[error("player query `{query}` failed: {reason}")]
    Query {
        query: String,
        reason: String,
        /// Captured output of the query, kept for diagnosis.
        output: String,
    },

    /// The index-aligned playlist columns came back with different lengths.
    #[error(
        "please check your playlist: # tracks {tracks}, # artists {artists}, # genres {genres}"
    )]
    SnapshotMismatch {
        tracks: usize,
        artists: usize,
        genres: usize,
    },

    #[error("MPRIS transport error: {0}")]
    Dbus(#[from] zbus::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No DJ name was configured and the OS account name is unavailable.
    #[error("cannot resolve DJ name: {0}")]
    Account(String),
}

pub type Result<T> = std::result::Result<T, Error>;
