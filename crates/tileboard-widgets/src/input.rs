#![forbid(unsafe_code)]

//! Keyboard and pointer reconciliation.
//!
//! Keyboard input moves the committed selection and keyboard focus follows
//! it. Pointer input moves the focus freely and commits with a two-click
//! gesture: the first click previews a tile, a second click on the previewed
//! tile locks it.
//!
//! # Keyboard
//!
//! Only key releases act. When no tile is focused (or nothing is locked) the
//! first key, other than Escape, Backspace, PageUp and PageDown, only
//! bootstraps the selection via [`NavCommand::DirectSelect`].
//!
//! | Key | Command |
//! |-----|---------|
//! | Enter | [`NavCommand::Commit`] |
//! | Escape, Backspace | [`NavCommand::Cancel`] |
//! | PageUp / PageDown | category paging |
//! | Shift+Up / Shift+Down | category paging when tabs are enabled |
//! | Arrows | moves |
//!
//! Unless the key ends up handled, by the host beforehand or by the board
//! entering a category or going back to the category list, preview and
//! focus snap to the committed selection.

use tileboard_core::debug;
use tileboard_core::event::{KeyCode, KeyEvent, PointerEvent};
use tileboard_core::geometry::Rect;

use crate::collection::SongCollection;
use crate::grid::GridGeometry;
use crate::nav_state::{BoardMode, NavigationState};
use crate::navigation::{BoardResponse, NavCommand, NavigationController};
use crate::scroll::{ScrollSynchronizer, TileSlot};
use crate::theme::ThemeLayout;

/// Translates device events into navigation commands.
#[derive(Debug, Clone, PartialEq)]
pub struct InputReconciler {
    controller: NavigationController,
    grid: GridGeometry,
    cover_big_rect: Rect,
    text_bg_rect: Rect,
    scroll_rect: Option<Rect>,
}

impl InputReconciler {
    /// Create a reconciler for a laid-out grid and the panels of `theme`.
    pub fn new(grid: GridGeometry, theme: &ThemeLayout) -> Self {
        let sync = ScrollSynchronizer::new(grid.cols(), grid.rows());
        Self {
            controller: NavigationController::new(sync),
            grid,
            cover_big_rect: theme.cover_big_rect,
            text_bg_rect: theme.text_bg_rect,
            scroll_rect: theme.scroll_rect,
        }
    }

    /// The command layer.
    #[inline]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// The tile layout used for hit testing.
    #[inline]
    pub fn grid(&self) -> &GridGeometry {
        &self.grid
    }

    /// Map a key to a command. `tabs` enables the Shift+arrow paging aliases.
    pub fn key_command(event: &KeyEvent, tabs: bool) -> Option<NavCommand> {
        let command = match event.code {
            KeyCode::Enter => NavCommand::Commit,
            KeyCode::Escape | KeyCode::Backspace => NavCommand::Cancel,
            KeyCode::PageUp => NavCommand::PageUp,
            KeyCode::PageDown => NavCommand::PageDown,
            KeyCode::Left => NavCommand::MoveLeft,
            KeyCode::Right => NavCommand::MoveRight,
            KeyCode::Up if tabs && event.shift() => NavCommand::PageUp,
            KeyCode::Up => NavCommand::MoveUp,
            KeyCode::Down if tabs && event.shift() => NavCommand::PageDown,
            KeyCode::Down => NavCommand::MoveDown,
            _ => return None,
        };
        Some(command)
    }

    /// Handle a keyboard event.
    ///
    /// Sets `event.handled` when the key switched the hierarchy level. Keys
    /// the host already marked handled are still dispatched, but preview and
    /// focus do not snap to the lock afterwards.
    pub fn handle_key(
        &self,
        event: &mut KeyEvent,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        if !event.is_release() {
            return BoardResponse::Ignored;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tile_board_key", code = ?event.code).entered();

        let count = self.controller.sync_collection(state, slots, collection);
        let unfocused =
            state.locked.is_none() || state.focused_slot(self.grid.slot_count(), count).is_none();
        let bootstrap = unfocused
            && !matches!(
                event.code,
                KeyCode::Escape | KeyCode::Backspace | KeyCode::PageUp | KeyCode::PageDown
            );

        let response = if bootstrap {
            self.controller
                .apply(NavCommand::DirectSelect, state, slots, collection)
        } else {
            match Self::key_command(event, collection.tabs_enabled()) {
                Some(command) => {
                    let response = self.controller.apply(command, state, slots, collection);
                    event.handled |= matches!(
                        (command, response),
                        (NavCommand::Commit, BoardResponse::EnteredCategory(_))
                            | (NavCommand::Cancel, BoardResponse::ShowedCategories)
                    );
                    response
                }
                None => BoardResponse::Ignored,
            }
        };

        if !event.handled {
            state.follow_lock();
        }
        response
    }

    /// Handle a pointer event: hover, clicks and wheel.
    pub fn handle_pointer(
        &self,
        event: &PointerEvent,
        state: &mut NavigationState,
        slots: &mut Vec<TileSlot>,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "tile_board_pointer",
            x = event.x,
            y = event.y,
            wheel = event.wheel
        )
        .entered();

        let count = self.controller.sync_collection(state, slots, collection);
        let (x, y) = event.position();
        let mut response = BoardResponse::Ignored;

        let hit = self
            .grid
            .hit_test(x, y)
            .and_then(|slot| slots.get(slot).and_then(|tile| tile.content()));
        state.actual_selection = hit;

        if let Some(index) = hit {
            if event.left() || state.mode == BoardMode::CategoryList {
                if state.preview == Some(index) {
                    if state.locked != Some(index) {
                        state.locked = Some(index);
                        response = BoardResponse::Locked(index);
                    }
                } else {
                    state.preview = Some(index);
                    state.locked = None;
                    response = BoardResponse::Previewed(index);
                }
            }
        }

        if event.right() {
            if !collection.tabs_enabled() {
                debug!("exit requested");
                return BoardResponse::Exit;
            }
            if state.mode == BoardMode::SongList && collection.category_count() > 0 {
                return self.controller.show_categories(state, slots, collection);
            }
        } else if event.left() {
            match (state.mode, state.preview) {
                (BoardMode::SongList, Some(preview)) => {
                    if self.cover_big_rect.contains(x, y) || self.text_bg_rect.contains(x, y) {
                        state.locked = Some(preview);
                        response = BoardResponse::Locked(preview);
                    }
                }
                (BoardMode::CategoryList, Some(preview)) if hit.is_some() => {
                    return self
                        .controller
                        .enter_category(preview, state, slots, collection);
                }
                _ => {}
            }
        }

        if event.wheel != 0 && self.scroll_rect.is_none_or(|area| area.contains(x, y)) {
            let sync = self.controller.sync();
            let offset = sync.scroll_by(state.offset, event.wheel, count);
            if offset != state.offset {
                state.offset = offset;
                sync.refresh_slots(offset, count, slots);
                if response == BoardResponse::Ignored {
                    response = BoardResponse::Scrolled(offset);
                }
            }
        }

        response
    }
}
