#![forbid(unsafe_code)]

//! Navigation commands and their effect on [`NavigationState`].
//!
//! Every command reads the current list length from the collection, applies
//! strict bounds, and ignores requests that would leave the list: moving past
//! the first or last item is a no-op, never a wraparound.

use tileboard_core::debug;

use crate::collection::SongCollection;
use crate::nav_state::{BoardMode, NavigationState};
use crate::scroll::{ScrollSynchronizer, TileSlot};

/// Logical navigation command, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// One tile to the left.
    MoveLeft,
    /// One tile to the right.
    MoveRight,
    /// One row up.
    MoveUp,
    /// One row down.
    MoveDown,
    /// Previous category (tabs only).
    PageUp,
    /// Next category (tabs only).
    PageDown,
    /// Drill into the previewed category, or commit the previewed song.
    Commit,
    /// Go back to the category list (tabs only).
    Cancel,
    /// First movement without a focused tile: lock the preview or the first tile.
    DirectSelect,
}

/// What an input did to the board, for the host screen to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardResponse {
    /// Nothing changed.
    Ignored,
    /// The committed selection moved to a content index.
    Moved(usize),
    /// A content index became the preview.
    Previewed(usize),
    /// A content index was committed.
    Locked(usize),
    /// The board now browses the songs of this category.
    EnteredCategory(usize),
    /// The board went back to the category list.
    ShowedCategories,
    /// The window scrolled; carries the new offset.
    Scrolled(usize),
    /// The user asked to leave the song board.
    Exit,
}

/// Applies [`NavCommand`]s with mode-aware bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationController {
    sync: ScrollSynchronizer,
}

impl NavigationController {
    /// Create a controller that scrolls with `sync`.
    pub const fn new(sync: ScrollSynchronizer) -> Self {
        Self { sync }
    }

    /// The synchronizer that places the scroll window.
    #[inline]
    pub fn sync(&self) -> &ScrollSynchronizer {
        &self.sync
    }

    /// Re-read the collection before handling input.
    ///
    /// Adopts the mode implied by the active category, drops indices that
    /// fell out of range, and refreshes the slots when the browsed list
    /// changed since the last refresh. Returns the current count.
    pub fn sync_collection(
        &self,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        collection: &dyn SongCollection,
    ) -> usize {
        state.mode = BoardMode::of(collection);
        let count = state.mode.count(collection);
        state.forget_stale(count);
        self.sync
            .after_hierarchy_change(state, (collection.active_category(), count), slots);
        count
    }

    /// Apply one command.
    pub fn apply(
        &self,
        command: NavCommand,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        let count = state.mode.count(collection);
        let cols = self.sync.cols();
        match command {
            NavCommand::MoveLeft => match state.locked {
                Some(locked) if locked > 0 => self.move_to(locked - 1, false, state, slots, count),
                _ => BoardResponse::Ignored,
            },
            NavCommand::MoveRight => match state.locked {
                Some(locked) if locked + 1 < count => {
                    self.move_to(locked + 1, false, state, slots, count)
                }
                _ => BoardResponse::Ignored,
            },
            NavCommand::MoveUp => match state.locked {
                Some(locked) if locked >= cols => {
                    self.move_to(locked - cols, true, state, slots, count)
                }
                _ => BoardResponse::Ignored,
            },
            NavCommand::MoveDown => match state.locked {
                Some(locked) if locked + cols < count => {
                    self.move_to(locked + cols, true, state, slots, count)
                }
                _ => BoardResponse::Ignored,
            },
            NavCommand::PageUp => self.page(false, state, slots, collection),
            NavCommand::PageDown => self.page(true, state, slots, collection),
            NavCommand::Commit => match (state.mode, state.preview) {
                (BoardMode::CategoryList, Some(category)) => {
                    self.enter_category(category, state, slots, collection)
                }
                (BoardMode::SongList, Some(song)) => {
                    state.locked = Some(song);
                    debug!(song, "song committed");
                    BoardResponse::Locked(song)
                }
                (_, None) => BoardResponse::Ignored,
            },
            NavCommand::Cancel => {
                if state.mode == BoardMode::SongList && collection.tabs_enabled() {
                    self.show_categories(state, slots, collection)
                } else {
                    BoardResponse::Ignored
                }
            }
            NavCommand::DirectSelect => self.direct_select(state, slots, count),
        }
    }

    /// Start browsing a category: preview its first song, commit nothing.
    pub fn enter_category(
        &self,
        category: usize,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        collection.enter_category(category);
        let mode = BoardMode::of(collection);
        let count = mode.count(collection);
        state.reset_for_hierarchy(mode, count);
        self.sync
            .after_hierarchy_change(state, (collection.active_category(), count), slots);
        match collection.active_category() {
            Some(active) => {
                debug!(category = active, songs = count, "entered category");
                BoardResponse::EnteredCategory(active)
            }
            None => BoardResponse::Ignored,
        }
    }

    /// Leave the active category and show the category list.
    pub fn show_categories(
        &self,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        collection.show_categories();
        let count = BoardMode::CategoryList.count(collection);
        state.reset_for_hierarchy(BoardMode::CategoryList, count);
        self.sync
            .after_hierarchy_change(state, (collection.active_category(), count), slots);
        debug!(categories = count, "showing categories");
        BoardResponse::ShowedCategories
    }

    /// Commit `index` and scroll it into view. Out-of-range indices are ignored.
    pub fn select(
        &self,
        index: usize,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        count: usize,
    ) -> BoardResponse {
        if index >= count {
            return BoardResponse::Ignored;
        }
        state.locked = Some(index);
        state.follow_lock();
        self.resync(state, slots, count);
        BoardResponse::Locked(index)
    }

    fn move_to(
        &self,
        index: usize,
        always_resync: bool,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        count: usize,
    ) -> BoardResponse {
        state.locked = Some(index);
        if always_resync || !state.is_visible(index, self.sync.slot_count()) {
            self.resync(state, slots, count);
        }
        BoardResponse::Moved(index)
    }

    fn page(
        &self,
        forward: bool,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        if !collection.tabs_enabled() || state.mode != BoardMode::SongList {
            return BoardResponse::Ignored;
        }
        state.reset();
        if forward {
            collection.next_category();
        } else {
            collection.prev_category();
        }
        let Some(category) = collection.active_category() else {
            return BoardResponse::Ignored;
        };
        let response = self.enter_category(category, state, slots, collection);
        if state.mode.count(collection) > 0 {
            state.locked = Some(0);
        }
        response
    }

    fn direct_select(
        &self,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        count: usize,
    ) -> BoardResponse {
        if count == 0 {
            return BoardResponse::Ignored;
        }
        let index = state.preview.unwrap_or(0);
        state.locked = Some(index);
        state.preview = Some(index);
        state.actual_selection = Some(index);
        self.resync(state, slots, count);
        BoardResponse::Locked(index)
    }

    fn resync(&self, state: &mut NavigationState, slots: &mut Vec<TileSlot>, count: usize) {
        state.offset = self.sync.resync(state.locked.unwrap_or(0), count);
        self.sync.refresh_slots(state.offset, count, slots);
    }
}
