#![forbid(unsafe_code)]

//! Song tile board public facade crate.
//!
//! Re-exports the board widget, its collection and theme types, and the
//! canonical input events, plus a prelude for hosts that just want a board
//! on screen.

use std::fmt;
use std::path::Path;

// --- Core re-exports -------------------------------------------------------

pub use tileboard_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerButtons, PointerEvent,
};
pub use tileboard_core::geometry::Rect;

// --- Widget re-exports -----------------------------------------------------

pub use tileboard_widgets::{
    BoardError, BoardMode, BoardResponse, CategoryInfo, CategoryPreview, NavCommand,
    PreviewPanel, SongCollection, SongInfo, SongLibrary, SongPreview, ThemeLayout, TileBoard,
    TileSlot,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tile board hosts.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading a theme file.
    Io(std::io::Error),
    /// The theme is malformed or cannot produce a grid.
    Board(BoardError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Board(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<BoardError> for Error {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

/// Standard result type for tile board hosts.
pub type Result<T> = std::result::Result<T, Error>;

/// Read and validate a JSON theme file.
pub fn load_theme(path: impl AsRef<Path>) -> Result<ThemeLayout> {
    let json = std::fs::read_to_string(path)?;
    Ok(ThemeLayout::from_json(&json)?)
}

/// Build a board from a JSON theme file.
pub fn board_from_theme_file(path: impl AsRef<Path>) -> Result<TileBoard> {
    Ok(TileBoard::new(load_theme(path)?)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoardMode, BoardResponse, Error, Event, KeyCode, KeyEvent, PointerButtons, PointerEvent,
        PreviewPanel, Rect, Result, SongCollection, SongInfo, SongLibrary, ThemeLayout, TileBoard,
    };

    pub use crate::{core, widgets};
}

pub use tileboard_core as core;
pub use tileboard_widgets as widgets;
