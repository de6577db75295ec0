#![forbid(unsafe_code)]

//! Content of the preview panel next to the grid.
//!
//! The panel shows the big cover and a text block for the previewed item:
//! artist, title and playable length for a song, name and song count for a
//! category. A missing or out-of-range preview yields [`PreviewPanel::Blank`].

use crate::collection::SongCollection;
use crate::nav_state::{BoardMode, NavigationState};

/// Preview of a song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPreview {
    /// Cover reference.
    pub cover: String,
    /// Performing artist.
    pub artist: String,
    /// Song title.
    pub title: String,
    /// Playable length as `mm:ss`.
    pub length: String,
    /// Show the duet icon.
    pub is_duet: bool,
    /// Show the video icon.
    pub has_video: bool,
}

/// Preview of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPreview {
    /// Cover reference.
    pub cover: String,
    /// Display name.
    pub name: String,
    /// Number of songs in the category, ignoring the search filter.
    pub song_count: usize,
}

/// What the preview panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewPanel {
    /// Nothing previewed; the panel shows its default cover and no text.
    #[default]
    Blank,
    /// A song of the active category.
    Song(SongPreview),
    /// A category on the category list.
    Category(CategoryPreview),
}

impl PreviewPanel {
    /// Build the panel for the current preview index.
    pub fn build(state: &NavigationState, collection: &dyn SongCollection) -> Self {
        let Some(index) = state.preview else {
            return Self::Blank;
        };
        match state.mode {
            BoardMode::SongList => collection.visible_song(index).map_or(Self::Blank, |song| {
                Self::Song(SongPreview {
                    cover: song.cover.clone(),
                    artist: song.artist.clone(),
                    title: song.title.clone(),
                    length: format_length(song.playable_length()),
                    is_duet: song.is_duet,
                    has_video: song.has_video,
                })
            }),
            BoardMode::CategoryList => collection.category(index).map_or(Self::Blank, |info| {
                Self::Category(CategoryPreview {
                    cover: info.cover.clone(),
                    name: info.name.clone(),
                    song_count: collection.songs_in_category(index),
                })
            }),
        }
    }

    /// Whether nothing is previewed.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Cover reference of the previewed item.
    pub fn cover(&self) -> Option<&str> {
        match self {
            Self::Blank => None,
            Self::Song(song) => Some(&song.cover),
            Self::Category(category) => Some(&category.cover),
        }
    }
}

/// Format seconds as zero-padded `mm:ss`. Fractions of a second are dropped.
pub fn format_length(seconds: f32) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let minutes = (seconds / 60.0).floor();
    let rest = (seconds - minutes * 60.0) as u32;
    format!("{:02}:{:02}", minutes as u32, rest)
}
