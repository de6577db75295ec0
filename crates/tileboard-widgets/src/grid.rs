#![forbid(unsafe_code)]

//! Tile grid geometry.
//!
//! Splits the board rectangle into `cols * rows` equally sized tiles separated
//! by fixed spacing. Tiles are stored row-major, so slot `i` sits at row
//! `i / cols`, column `i % cols`. Tile sizes are truncated to whole units so
//! covers land on pixel boundaries.

use tileboard_core::geometry::Rect;

use crate::error::{BoardError, Result};
use crate::theme::ThemeLayout;

/// Immutable tile layout for a board.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    bounds: Rect,
    cols: usize,
    rows: usize,
    tile_width: f32,
    tile_height: f32,
    tiles: Vec<Rect>,
}

impl GridGeometry {
    /// Lay out `cols * rows` tiles inside `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] when either dimension is
    /// zero or the spacing leaves no room for tiles.
    pub fn new(bounds: Rect, cols: usize, rows: usize, space_w: f32, space_h: f32) -> Result<Self> {
        if cols == 0 {
            return Err(BoardError::invalid("cols", cols, "must be at least 1"));
        }
        if rows == 0 {
            return Err(BoardError::invalid("rows", rows, "must be at least 1"));
        }

        let tile_width = ((bounds.width - space_w * (cols - 1) as f32) / cols as f32).trunc();
        let tile_height = ((bounds.height - space_h * (rows - 1) as f32) / rows as f32).trunc();
        if !(tile_width > 0.0) {
            return Err(BoardError::invalid(
                "tile_rect.width",
                bounds.width,
                "too narrow for column count and spacing",
            ));
        }
        if !(tile_height > 0.0) {
            return Err(BoardError::invalid(
                "tile_rect.height",
                bounds.height,
                "too short for row count and spacing",
            ));
        }

        let mut tiles = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(Rect::new(
                    bounds.x + col as f32 * (tile_width + space_w),
                    bounds.y + row as f32 * (tile_height + space_h),
                    tile_width,
                    tile_height,
                ));
            }
        }

        Ok(Self {
            bounds,
            cols,
            rows,
            tile_width,
            tile_height,
            tiles,
        })
    }

    /// Validate a theme and lay out its grid.
    pub fn from_theme(theme: &ThemeLayout) -> Result<Self> {
        theme.validate()?;
        Self::new(
            theme.tile_rect,
            theme.cols,
            theme.rows,
            theme.space_w,
            theme.space_h,
        )
    }

    /// Number of tile columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tile slots (`cols * rows`).
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.tiles.len()
    }

    /// Width of every tile.
    #[inline]
    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }

    /// Height of every tile.
    #[inline]
    pub fn tile_height(&self) -> f32 {
        self.tile_height
    }

    /// The board rectangle the grid was laid out in.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// All tile rectangles, row-major.
    #[inline]
    pub fn tiles(&self) -> &[Rect] {
        &self.tiles
    }

    /// Rectangle of one slot.
    #[inline]
    pub fn tile(&self, slot: usize) -> Option<Rect> {
        self.tiles.get(slot).copied()
    }

    /// First slot whose rectangle contains the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_sizes_subtract_spacing() {
        let grid = GridGeometry::new(Rect::new(0.0, 0.0, 540.0, 330.0), 5, 3, 10.0, 15.0)
            .expect("valid grid");
        assert_eq!(grid.tile_width(), 100.0);
        assert_eq!(grid.tile_height(), 100.0);
        assert_eq!(grid.slot_count(), 15);
    }

    #[test]
    fn tiles_are_row_major() {
        let grid = GridGeometry::new(Rect::new(10.0, 20.0, 540.0, 330.0), 5, 3, 10.0, 15.0)
            .expect("valid grid");
        assert_eq!(grid.tile(0), Some(Rect::new(10.0, 20.0, 100.0, 100.0)));
        assert_eq!(grid.tile(1), Some(Rect::new(120.0, 20.0, 100.0, 100.0)));
        assert_eq!(grid.tile(5), Some(Rect::new(10.0, 135.0, 100.0, 100.0)));
        assert_eq!(grid.tile(14), Some(Rect::new(450.0, 250.0, 100.0, 100.0)));
        assert_eq!(grid.tile(15), None);
    }

    #[test]
    fn tile_size_truncates() {
        let grid = GridGeometry::new(Rect::from_size(100.0, 100.0), 3, 3, 0.0, 0.0)
            .expect("valid grid");
        assert_eq!(grid.tile_width(), 33.0);
        assert_eq!(grid.tile_height(), 33.0);
    }

    #[test]
    fn zero_dimensions_fail() {
        let bounds = Rect::from_size(100.0, 100.0);
        assert!(matches!(
            GridGeometry::new(bounds, 0, 3, 0.0, 0.0),
            Err(BoardError::InvalidConfiguration { field: "cols", .. })
        ));
        assert!(matches!(
            GridGeometry::new(bounds, 3, 0, 0.0, 0.0),
            Err(BoardError::InvalidConfiguration { field: "rows", .. })
        ));
    }

    #[test]
    fn spacing_larger_than_board_fails() {
        let bounds = Rect::from_size(100.0, 100.0);
        assert!(GridGeometry::new(bounds, 5, 1, 30.0, 0.0).is_err());
    }

    #[test]
    fn hit_test_finds_slot_and_skips_gaps() {
        let grid = GridGeometry::new(Rect::new(0.0, 0.0, 540.0, 330.0), 5, 3, 10.0, 15.0)
            .expect("valid grid");
        assert_eq!(grid.hit_test(5.0, 5.0), Some(0));
        assert_eq!(grid.hit_test(125.0, 140.0), Some(6));
        // Horizontal gap between slot 0 and slot 1.
        assert_eq!(grid.hit_test(105.0, 5.0), None);
        assert_eq!(grid.hit_test(-1.0, 5.0), None);
    }

    #[test]
    fn from_theme_validates() {
        let theme = ThemeLayout::default().grid(0, 2);
        assert!(GridGeometry::from_theme(&theme).is_err());
        let grid = GridGeometry::from_theme(&ThemeLayout::default()).expect("default theme");
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.bounds(), ThemeLayout::default().tile_rect);
    }
}
