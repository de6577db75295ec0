#![forbid(unsafe_code)]

//! Song tile board widget: a paginated grid of cover tiles with a preview
//! panel, browsing either categories or the songs of one category.

pub mod board;
pub mod collection;
pub mod error;
pub mod grid;
pub mod input;
pub mod nav_state;
pub mod navigation;
pub mod preview;
pub mod scroll;
pub mod theme;

pub use board::TileBoard;
pub use collection::{CategoryInfo, SongCollection, SongInfo, SongLibrary};
pub use error::{BoardError, Result};
pub use grid::GridGeometry;
pub use input::InputReconciler;
pub use nav_state::{BoardMode, HierarchyKey, NavigationState};
pub use navigation::{BoardResponse, NavCommand, NavigationController};
pub use preview::{CategoryPreview, PreviewPanel, SongPreview, format_length};
pub use scroll::{ScrollSynchronizer, TileSlot};
pub use theme::ThemeLayout;
