#![forbid(unsafe_code)]

//! Scroll window synchronization.
//!
//! The board scrolls by whole rows. After the committed selection moves, the
//! window is placed so that the selected row sits one row above the bottom of
//! the grid, without scrolling further than the content justifies:
//!
//! ```text
//! candidate  = floor(locked / cols) * cols - cols * (rows - 2)
//! max_offset = floor(count / cols) * cols - cols * (rows - 1)
//! offset     = clamp(candidate, 0, max(0, max_offset))
//! ```
//!
//! A single-row grid keeps the selected row itself at the top.

use tileboard_core::trace;

use crate::nav_state::{HierarchyKey, NavigationState};

/// What a tile slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileSlot {
    /// Content index of a category or a visible song.
    Content(usize),
    /// Empty background tile past the end of the list.
    Placeholder,
}

impl TileSlot {
    /// Content index, or `None` for a placeholder.
    #[inline]
    pub fn content(self) -> Option<usize> {
        match self {
            Self::Content(index) => Some(index),
            Self::Placeholder => None,
        }
    }

    /// Whether this slot is an empty placeholder.
    #[inline]
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Offset arithmetic and slot mapping for a grid of `cols * rows` tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSynchronizer {
    cols: usize,
    rows: usize,
}

impl ScrollSynchronizer {
    /// Create a synchronizer for a validated grid (`cols, rows >= 1`).
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Number of tile columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tile slots.
    #[inline]
    pub const fn slot_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Largest offset allowed for a list of `count` items.
    pub fn max_offset(&self, count: usize) -> usize {
        (count / self.cols * self.cols).saturating_sub(self.cols * (self.rows - 1))
    }

    /// Offset that keeps `locked` in view for a list of `count` items.
    pub fn resync(&self, locked: usize, count: usize) -> usize {
        let row_start = locked / self.cols * self.cols;
        let lead = self.cols * self.rows.saturating_sub(2);
        row_start.saturating_sub(lead).min(self.max_offset(count))
    }

    /// Shift `offset` by `rows` whole rows (negative scrolls back), clamped to
    /// the same bounds as [`resync`](Self::resync).
    pub fn scroll_by(&self, offset: usize, rows: i32, count: usize) -> usize {
        let shifted = offset as i64 + self.cols as i64 * i64::from(rows);
        let max = self.max_offset(count) as i64;
        shifted.clamp(0, max) as usize
    }

    /// Rebuild the slot mapping for a window starting at `offset`.
    pub fn refresh_slots(&self, offset: usize, count: usize, slots: &mut Vec<TileSlot>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tile_board_refresh", offset, count).entered();

        slots.clear();
        slots.extend((0..self.slot_count()).map(|slot| {
            let index = slot + offset;
            if index < count {
                TileSlot::Content(index)
            } else {
                TileSlot::Placeholder
            }
        }));
    }

    /// Resync and refresh after the browsed list may have changed.
    ///
    /// Skips all work when `key` (active category, count) matches the last
    /// refresh. Returns whether a refresh happened.
    pub fn after_hierarchy_change(
        &self,
        state: &mut NavigationState,
        key: HierarchyKey,
        slots: &mut Vec<TileSlot>,
    ) -> bool {
        if state.last_known == Some(key) {
            trace!(category = ?key.0, count = key.1, "hierarchy unchanged; refresh skipped");
            return false;
        }
        let count = key.1;
        state.last_known = Some(key);
        state.offset = self.resync(state.locked.unwrap_or(0), count);
        self.refresh_slots(state.offset, count, slots);
        true
    }
}
