use crate::playlist::Song;

use super::Segmentation;

/// Remembers the tanda discarded just before the current one, so a cycle
/// whose current tanda equals it can skip re-rendering.
///
/// The polling loop owns one detector and feeds it every segmentation; the
/// memory is replaced wholesale on each call.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    previous: Vec<Song>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this cycle's preceding buffer and report whether `current`
    /// differs from it by length or by any position.
    pub fn is_fresh(&mut self, segmentation: &Segmentation) -> bool {
        self.previous = segmentation.preceding.clone();
        match &segmentation.current {
            Some(current) => *current != self.previous,
            None => false,
        }
    }

    pub fn previous(&self) -> &[Song] {
        &self.previous
    }
}
