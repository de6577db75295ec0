#![forbid(unsafe_code)]

//! Selection and scroll state of a tile board.
//!
//! # Indices
//!
//! All indices are content indices: positions in the full, unpaged list of
//! the current mode (categories or visible songs). A tile slot shows content
//! index `slot + offset`.
//!
//! - `locked` is the committed selection.
//! - `preview` is the candidate shown in the preview panel.
//! - `actual_selection` is what the pointer (or the keyboard) currently
//!   focuses. Tile highlight is a projection of it, see
//!   [`NavigationState::focused_slot`].
//!
//! # Invariants
//!
//! 1. `offset` is a multiple of the column count and never exceeds the
//!    scroll limit of the current count.
//! 2. With an empty list every index is `None`.
//! 3. `locked` and `preview` are below the current count when present.

use std::ops::Range;

use crate::collection::SongCollection;

/// Hierarchy level the board is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardMode {
    /// Top-level category covers.
    #[default]
    CategoryList,
    /// Songs of the active category.
    SongList,
}

impl BoardMode {
    /// Mode implied by the collection's active category.
    pub fn of(collection: &dyn SongCollection) -> Self {
        if collection.active_category().is_some() {
            Self::SongList
        } else {
            Self::CategoryList
        }
    }

    /// Number of items in this mode's list.
    pub fn count(self, collection: &dyn SongCollection) -> usize {
        match self {
            Self::CategoryList => collection.category_count(),
            Self::SongList => collection.visible_song_count(),
        }
    }
}

/// Identity of the last refreshed list: active category and item count.
pub type HierarchyKey = (Option<usize>, usize);

/// Mutable navigation state owned by one board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Current hierarchy level.
    pub mode: BoardMode,
    /// Committed selection.
    pub locked: Option<usize>,
    /// Candidate selection shown in the preview panel.
    pub preview: Option<usize>,
    /// Content index under pointer or keyboard focus.
    pub actual_selection: Option<usize>,
    /// Content index shown in slot 0.
    pub offset: usize,
    /// Last refreshed hierarchy, used to skip redundant refreshes.
    pub last_known: Option<HierarchyKey>,
}

impl NavigationState {
    /// Create a state showing the category list with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every index, scroll to the top, and forget the last refresh.
    pub fn reset(&mut self) {
        self.locked = None;
        self.preview = None;
        self.actual_selection = None;
        self.offset = 0;
        self.last_known = None;
    }

    /// Index reset used when switching hierarchy level: the first item is
    /// previewed and focused, nothing is committed.
    pub fn reset_for_hierarchy(&mut self, mode: BoardMode, count: usize) {
        self.mode = mode;
        let first = (count > 0).then_some(0);
        self.preview = first;
        self.actual_selection = first;
        self.locked = None;
    }

    /// Drop indices that no longer point into a list of `count` items.
    ///
    /// With `count == 0` this clears everything.
    pub fn forget_stale(&mut self, count: usize) {
        for index in [
            &mut self.locked,
            &mut self.preview,
            &mut self.actual_selection,
        ] {
            if index.is_some_and(|i| i >= count) {
                *index = None;
            }
        }
    }

    /// Keyboard focus follows the committed selection.
    pub fn follow_lock(&mut self) {
        self.preview = self.locked;
        self.actual_selection = self.locked;
    }

    /// Content indices currently mapped to tile slots.
    pub fn visible_window(&self, slot_count: usize) -> Range<usize> {
        self.offset..self.offset + slot_count
    }

    /// Whether a content index is shown on some tile.
    pub fn is_visible(&self, index: usize, slot_count: usize) -> bool {
        self.visible_window(slot_count).contains(&index)
    }

    /// Slot that shows the focused item, if it is on screen.
    pub fn focused_slot(&self, slot_count: usize, count: usize) -> Option<usize> {
        let index = self.actual_selection?;
        (index < count && self.is_visible(index, slot_count)).then(|| index - self.offset)
    }
}
