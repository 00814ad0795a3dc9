//! Tanda grouping: splitting the playlist at cortinas, finding the tanda
//! that is playing, looking ahead to the next one and deciding whether the
//! result is worth re-rendering.

mod change;
mod lookahead;
mod segment;

pub use change::ChangeDetector;
pub use lookahead::{Lookahead, next_tanda};
pub use segment::{NowPlayingMatch, Segmentation, segment};
