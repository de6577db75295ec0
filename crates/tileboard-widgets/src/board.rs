#![forbid(unsafe_code)]

//! The song tile board widget.
//!
//! A [`TileBoard`] owns its layout and navigation state and borrows the song
//! collection for each call. Rendering is left to the host: it draws
//! [`TileBoard::slots`] into [`GridGeometry::tiles`], highlights
//! [`TileBoard::focused_slot`], and fills the preview panel from
//! [`TileBoard::preview`].
//!
//! # Example
//!
//! ```
//! use tileboard_core::event::{KeyCode, KeyEvent};
//! use tileboard_widgets::{BoardResponse, SongInfo, CategoryInfo, SongLibrary, ThemeLayout, TileBoard};
//!
//! let mut library = SongLibrary::new().with_category(
//!     CategoryInfo::new("Rock", "rock.png"),
//!     vec![SongInfo::new("Queen", "Bohemian Rhapsody")],
//! );
//! let mut board = TileBoard::new(ThemeLayout::default())?;
//! board.on_show(&mut library);
//!
//! let mut enter = KeyEvent::release(KeyCode::Enter);
//! board.handle_key(&mut enter, &mut library); // focus the first category
//! let mut enter = KeyEvent::release(KeyCode::Enter);
//! let response = board.handle_key(&mut enter, &mut library);
//! assert_eq!(response, BoardResponse::EnteredCategory(0));
//! assert!(enter.handled);
//! # Ok::<(), tileboard_widgets::BoardError>(())
//! ```

use tileboard_core::event::{Event, KeyEvent, PointerEvent};
use tileboard_core::geometry::Rect;
use tileboard_core::{debug, info};

use crate::collection::SongCollection;
use crate::error::Result;
use crate::grid::GridGeometry;
use crate::input::InputReconciler;
use crate::nav_state::{BoardMode, NavigationState};
use crate::navigation::BoardResponse;
use crate::preview::PreviewPanel;
use crate::scroll::TileSlot;
use crate::theme::ThemeLayout;

/// Paginated grid of song or category covers with a preview panel.
#[derive(Debug, Clone)]
pub struct TileBoard {
    theme: ThemeLayout,
    input: InputReconciler,
    state: NavigationState,
    slots: Vec<TileSlot>,
    visible: bool,
}

impl TileBoard {
    /// Build a board from a theme.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`](crate::BoardError) when
    /// the theme cannot produce a grid.
    pub fn new(theme: ThemeLayout) -> Result<Self> {
        let grid = GridGeometry::from_theme(&theme)?;
        let input = InputReconciler::new(grid, &theme);
        let mut slots = Vec::with_capacity(input.grid().slot_count());
        input.controller().sync().refresh_slots(0, 0, &mut slots);
        info!(
            cols = theme.cols,
            rows = theme.rows,
            tile_width = input.grid().tile_width(),
            tile_height = input.grid().tile_height(),
            "tile board created"
        );
        Ok(Self {
            theme,
            input,
            state: NavigationState::new(),
            slots,
            visible: true,
        })
    }

    /// Prepare the board for display.
    ///
    /// Without tabs the board goes straight into the first category. The
    /// first item of the current list is previewed and locked; keyboard
    /// focus starts unset so the first key only bootstraps it. With an empty
    /// list (for example a search filter without matches) nothing is
    /// selected.
    pub fn on_show(&mut self, collection: &mut dyn SongCollection) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tile_board_show").entered();

        let controller = self.input.controller();
        if !collection.tabs_enabled()
            && collection.category_count() > 0
            && collection.active_category().is_none()
        {
            controller.enter_category(0, &mut self.state, &mut self.slots, collection);
        }

        self.state.reset();
        let count = controller.sync_collection(&mut self.state, &mut self.slots, collection);
        if count > 0 {
            self.state.preview = Some(0);
            self.state.locked = Some(0);
        }
        self.visible = true;
        debug!(mode = ?self.state.mode, count, "tile board shown");
    }

    /// The board left the screen.
    pub fn on_hide(&mut self) {
        self.visible = false;
        debug!("tile board hidden");
    }

    /// Handle a keyboard event. Hidden boards ignore input.
    pub fn handle_key(
        &mut self,
        event: &mut KeyEvent,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        if !self.visible {
            return BoardResponse::Ignored;
        }
        self.input
            .handle_key(event, &mut self.state, &mut self.slots, collection)
    }

    /// Handle a pointer event. Hidden boards ignore input.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        if !self.visible {
            return BoardResponse::Ignored;
        }
        self.input
            .handle_pointer(event, &mut self.state, &mut self.slots, collection)
    }

    /// Dispatch any board event.
    pub fn handle_event(
        &mut self,
        event: &mut Event,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        match event {
            Event::Key(key) => self.handle_key(key, collection),
            Event::Pointer(pointer) => self.handle_pointer(pointer, collection),
        }
    }

    /// Committed selection: the song to play, or the focused category.
    #[inline]
    pub fn selected_song(&self) -> Option<usize> {
        self.state.locked
    }

    /// Commit a visible song chosen elsewhere (e.g. by a random pick) and
    /// scroll it into view. Ignored outside a category or out of range.
    pub fn set_selected_song(
        &mut self,
        index: usize,
        collection: &mut dyn SongCollection,
    ) -> BoardResponse {
        let controller = self.input.controller();
        let count = controller.sync_collection(&mut self.state, &mut self.slots, collection);
        if self.state.mode != BoardMode::SongList {
            return BoardResponse::Ignored;
        }
        controller.select(index, &mut self.state, &mut self.slots, count)
    }

    /// Category being browsed, or `None` on the category list.
    pub fn selected_category(&self, collection: &dyn SongCollection) -> Option<usize> {
        collection.active_category()
    }

    /// Hierarchy level currently shown.
    #[inline]
    pub fn mode(&self) -> BoardMode {
        self.state.mode
    }

    /// Content index under pointer or keyboard focus.
    #[inline]
    pub fn actual_selection(&self) -> Option<usize> {
        self.state.actual_selection
    }

    /// Slot to highlight, if the focused item is on screen.
    pub fn focused_slot(&self) -> Option<usize> {
        let (_, count) = self.state.last_known?;
        self.state.focused_slot(self.slots.len(), count)
    }

    /// Whether the board is shown and accepts input.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the board without resetting its state.
    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Bounding rectangle of the tile grid.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.input.grid().bounds()
    }

    /// Current slot mapping, row-major.
    #[inline]
    pub fn slots(&self) -> &[TileSlot] {
        &self.slots
    }

    /// Navigation state, read-only.
    #[inline]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Tile layout.
    #[inline]
    pub fn grid(&self) -> &GridGeometry {
        self.input.grid()
    }

    /// Theme the board was built from.
    #[inline]
    pub fn theme(&self) -> &ThemeLayout {
        &self.theme
    }

    /// Content of the preview panel.
    pub fn preview(&self, collection: &dyn SongCollection) -> PreviewPanel {
        PreviewPanel::build(&self.state, collection)
    }
}
