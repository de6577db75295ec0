#![forbid(unsafe_code)]

//! Theme layout record for the tile board.
//!
//! The board reads its geometry once at construction: where the tile grid
//! sits, how many columns and rows it has, the spacing between tiles, and the
//! rectangles of the big cover preview and its text background (both of which
//! accept "commit" clicks). Theme files are JSON; missing fields fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};
use tileboard_core::geometry::Rect;

use crate::error::{BoardError, Result};

/// Layout values consumed by [`TileBoard`](crate::board::TileBoard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLayout {
    /// Rectangle covered by the tile grid.
    pub tile_rect: Rect,
    /// Number of tile columns.
    pub cols: usize,
    /// Number of tile rows.
    pub rows: usize,
    /// Horizontal gap between tiles.
    pub space_w: f32,
    /// Vertical gap between tiles.
    pub space_h: f32,
    /// Big cover preview panel.
    pub cover_big_rect: Rect,
    /// Text background under the big cover (artist/title/length).
    pub text_bg_rect: Rect,
    /// Wheel input only scrolls while the pointer is inside this area.
    /// `None` means the whole render surface.
    pub scroll_rect: Option<Rect>,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            tile_rect: Rect::new(40.0, 110.0, 700.0, 540.0),
            cols: 5,
            rows: 4,
            space_w: 10.0,
            space_h: 10.0,
            cover_big_rect: Rect::new(790.0, 110.0, 450.0, 450.0),
            text_bg_rect: Rect::new(790.0, 570.0, 450.0, 80.0),
            scroll_rect: None,
        }
    }
}

impl ThemeLayout {
    /// Parse a JSON theme document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: ThemeLayout = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn grid(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Set the spacing between tiles.
    #[must_use]
    pub fn spacing(mut self, space_w: f32, space_h: f32) -> Self {
        self.space_w = space_w;
        self.space_h = space_h;
        self
    }

    /// Set the rectangle covered by the tile grid.
    #[must_use]
    pub fn tile_rect(mut self, rect: Rect) -> Self {
        self.tile_rect = rect;
        self
    }

    /// Set the big cover and text background panel rectangles.
    #[must_use]
    pub fn preview_panel(mut self, cover_big: Rect, text_bg: Rect) -> Self {
        self.cover_big_rect = cover_big;
        self.text_bg_rect = text_bg;
        self
    }

    /// Restrict wheel scrolling to an area.
    #[must_use]
    pub fn scroll_rect(mut self, rect: Rect) -> Self {
        self.scroll_rect = Some(rect);
        self
    }

    /// Validate the layout, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 {
            return Err(BoardError::invalid("cols", self.cols, "must be at least 1"));
        }
        if self.rows == 0 {
            return Err(BoardError::invalid("rows", self.rows, "must be at least 1"));
        }
        validate_spacing("space_w", self.space_w)?;
        validate_spacing("space_h", self.space_h)?;
        if !self.tile_rect.is_finite() || self.tile_rect.is_empty() {
            return Err(BoardError::invalid(
                "tile_rect",
                format!("{:?}", self.tile_rect),
                "must be finite with positive size",
            ));
        }
        for (field, rect) in [
            ("cover_big_rect", self.cover_big_rect),
            ("text_bg_rect", self.text_bg_rect),
        ] {
            if !rect.is_finite() {
                return Err(BoardError::invalid(
                    field,
                    format!("{rect:?}"),
                    "must be finite",
                ));
            }
        }
        Ok(())
    }
}

fn validate_spacing(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BoardError::invalid(field, value, "must be finite and >= 0"))
    }
}
