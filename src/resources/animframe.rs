//! Sprite atlas descriptor.
//!
//! An [`AnimFrame`] owns one texture and an [`AtlasGrid`] that slices it into
//! equally sized cells. The grid math is kept separate from the texture so it
//! can be evaluated without a GPU.
//!
//! # Layout contract
//!
//! Cells are addressed row-major. A sprite's animation for a given pose lives
//! on row `identity * Pose::COUNT + pose offset` (modulo the number of rows),
//! and its frames run left to right along that row.

use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Rectangle, Texture2D};

use crate::error::{Result, SpriteError};

/// Minimal view of a loaded texture needed to slice it into cells.
///
/// Implemented for raylib's [`Texture2D`]. Tests provide their own
/// lightweight implementations.
pub trait AtlasTexture {
    /// GPU handle id. Zero means the texture is not usable.
    fn id(&self) -> u32;
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
}

impl AtlasTexture for Texture2D {
    fn id(&self) -> u32 {
        self.id
    }

    fn width(&self) -> u32 {
        self.width.max(0) as u32
    }

    fn height(&self) -> u32 {
        self.height.max(0) as u32
    }
}

/// Fixed grid subdividing an atlas texture.
///
/// A zero cell dimension means "grid undefined": every field is then zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtlasGrid {
    /// Cell width in texture pixels.
    pub cell_width: u32,
    /// Cell height in texture pixels.
    pub cell_height: u32,
    /// Half the cell width, used as the draw pivot for centered sprites.
    pub center_x: u32,
    /// Half the cell height, used as the draw pivot for centered sprites.
    pub center_y: u32,
    /// Whole cells along X.
    pub columns: u32,
    /// Whole cells along Y.
    pub rows: u32,
}

impl AtlasGrid {
    /// Slice a `texture_width` x `texture_height` image into cells.
    ///
    /// Partial cells at the right and bottom edges are dropped.
    pub fn new(texture_width: u32, texture_height: u32, cell_width: u32, cell_height: u32) -> Self {
        if cell_width == 0 || cell_height == 0 {
            return Self::default();
        }
        Self {
            cell_width,
            cell_height,
            center_x: cell_width / 2,
            center_y: cell_height / 2,
            columns: texture_width / cell_width,
            rows: texture_height / cell_height,
        }
    }

    /// Whether a cell size was configured.
    pub fn is_defined(&self) -> bool {
        self.cell_width > 0 && self.cell_height > 0
    }

    /// Total number of addressable cells.
    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Texture-space rectangle of the cell at (`column`, `row`).
    ///
    /// Expects `column < columns` and `row < rows`; out-of-range indices give
    /// a rectangle outside the texture. Offsets are computed in `f32` so they
    /// cannot overflow.
    pub fn cell_rect(&self, column: u32, row: u32) -> Rectangle {
        Rectangle {
            x: column as f32 * self.cell_width as f32,
            y: row as f32 * self.cell_height as f32,
            width: self.cell_width as f32,
            height: self.cell_height as f32,
        }
    }
}

/// A texture atlas together with its cell grid.
///
/// The texture is owned: releasing the frame consumes it, so the underlying
/// resource can only be freed once.
#[derive(Debug)]
pub struct AnimFrame<T: AtlasTexture = Texture2D> {
    texture: T,
    grid: AtlasGrid,
}

impl<T: AtlasTexture> AnimFrame<T> {
    /// Wrap an already loaded texture and compute its grid.
    pub fn from_texture(texture: T, cell_width: u32, cell_height: u32) -> Self {
        let grid = AtlasGrid::new(texture.width(), texture.height(), cell_width, cell_height);
        Self { texture, grid }
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn grid(&self) -> &AtlasGrid {
        &self.grid
    }

    /// True when the texture handle is usable for drawing.
    pub fn is_loaded(&self) -> bool {
        self.texture.id() > 0
    }

    /// Free the texture. Consuming `self` makes a second release impossible.
    pub fn release(self) {
        info!("Releasing atlas texture id {}", self.texture.id());
        drop(self);
    }
}

impl AnimFrame<Texture2D> {
    /// Load `path` through raylib and slice it into `cell_width` x `cell_height` cells.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Self> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| SpriteError::AssetLoad {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        if texture.id == 0 {
            return Err(SpriteError::AssetLoad {
                path: path.to_string(),
                reason: "texture has no GPU handle".to_string(),
            });
        }
        let frame = Self::from_texture(texture, cell_width, cell_height);
        let grid = frame.grid();
        info!(
            "Loaded atlas {}: {}x{} cells of {}x{} px",
            path, grid.columns, grid.rows, grid.cell_width, grid.cell_height
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeTexture {
        id: u32,
        width: u32,
        height: u32,
    }

    impl AtlasTexture for FakeTexture {
        fn id(&self) -> u32 {
            self.id
        }
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
    }

    fn tex(id: u32, width: u32, height: u32) -> FakeTexture {
        FakeTexture { id, width, height }
    }

    #[test]
    fn test_grid_divides_texture() {
        let grid = AtlasGrid::new(72, 196, 12, 14);
        assert_eq!(grid.columns, 6);
        assert_eq!(grid.rows, 14);
        assert_eq!(grid.center_x, 6);
        assert_eq!(grid.center_y, 7);
        assert_eq!(grid.cell_count(), 84);
        assert!(grid.is_defined());
    }

    #[test]
    fn test_grid_truncates_remainder_strip() {
        let grid = AtlasGrid::new(75, 200, 12, 14);
        assert_eq!(grid.columns, 6);
        assert_eq!(grid.rows, 14);
    }

    #[test]
    fn test_grid_center_floors_odd_sizes() {
        let grid = AtlasGrid::new(30, 30, 5, 3);
        assert_eq!(grid.center_x, 2);
        assert_eq!(grid.center_y, 1);
    }

    #[test]
    fn test_grid_single_cell_when_texture_matches_cell() {
        let grid = AtlasGrid::new(12, 14, 12, 14);
        assert_eq!(grid.cell_count(), 1);
    }

    #[test]
    fn test_zero_cell_width_leaves_grid_undefined() {
        let grid = AtlasGrid::new(72, 196, 0, 14);
        assert_eq!(grid, AtlasGrid::default());
        assert!(!grid.is_defined());
        assert_eq!(grid.cell_count(), 0);
    }

    #[test]
    fn test_zero_cell_height_leaves_grid_undefined() {
        let grid = AtlasGrid::new(72, 196, 12, 0);
        assert_eq!(grid, AtlasGrid::default());
    }

    #[test]
    fn test_cell_rect() {
        let grid = AtlasGrid::new(72, 196, 12, 14);
        let r = grid.cell_rect(5, 5);
        assert_eq!(r.x, 60.0);
        assert_eq!(r.y, 70.0);
        assert_eq!(r.width, 12.0);
        assert_eq!(r.height, 14.0);
    }

    #[test]
    fn test_cell_rect_out_of_range_does_not_overflow() {
        let grid = AtlasGrid::new(72, 196, 12, 14);
        let r = grid.cell_rect(u32::MAX, u32::MAX);
        assert!(r.x > 72.0);
        assert!(r.y > 196.0);
    }

    #[test]
    fn test_from_texture_zero_cell_keeps_texture_validity() {
        let loaded = AnimFrame::from_texture(tex(3, 72, 196), 0, 0);
        assert!(loaded.is_loaded());
        assert_eq!(*loaded.grid(), AtlasGrid::default());

        let broken = AnimFrame::from_texture(tex(0, 0, 0), 0, 0);
        assert!(!broken.is_loaded());
        assert_eq!(*broken.grid(), AtlasGrid::default());
    }

    #[test]
    fn test_from_texture_invalid_handle_still_slices() {
        let frame = AnimFrame::from_texture(tex(0, 48, 14), 12, 14);
        assert!(!frame.is_loaded());
        assert_eq!(frame.grid().columns, 4);
        assert_eq!(frame.grid().rows, 1);
    }

    #[test]
    fn test_texture_smaller_than_cell_gives_empty_grid() {
        let frame = AnimFrame::from_texture(tex(1, 8, 8), 12, 14);
        assert!(frame.grid().is_defined());
        assert_eq!(frame.grid().cell_count(), 0);
    }
}
