//! Demo configuration resource.
//!
//! All settings are compile-time constants. The demo reads no config file,
//! command-line option or environment variable to change them.

use bevy_ecs::prelude::*;

const DEFAULT_WINDOW_WIDTH: i32 = 800;
const DEFAULT_WINDOW_HEIGHT: i32 = 450;
const DEFAULT_WINDOW_TITLE: &str = "raylib sprite system demo";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ATLAS_PATH: &str = "img/slime.png";
const DEFAULT_CELL_WIDTH: u32 = 12;
const DEFAULT_CELL_HEIGHT: u32 = 14;
const DEFAULT_SECONDS_PER_FRAME: f32 = 1.0 / 16.0;
const DEFAULT_MOVE_SPEED: f32 = 5.0;
const DEFAULT_ROSTER_ORIGIN_X: f32 = 100.0;
const DEFAULT_ROSTER_ORIGIN_Y: f32 = 200.0;
const DEFAULT_ROSTER_SPACING: f32 = 50.0;

/// Demo configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct DemoConfig {
    /// Window width in pixels.
    pub window_width: i32,
    /// Window height in pixels.
    pub window_height: i32,
    pub window_title: &'static str,
    /// Frame-rate hint handed to raylib.
    pub target_fps: u32,
    /// Sprite atlas image, relative to the working directory.
    pub atlas_path: &'static str,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Animation speed shared by the whole roster.
    pub seconds_per_frame: f32,
    /// Pixels the roster moves per tick while an arrow key is held.
    pub move_speed: f32,
    /// Position of the first roster sprite.
    pub roster_origin: (f32, f32),
    /// Horizontal distance between consecutive roster sprites.
    pub roster_spacing: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE,
            target_fps: DEFAULT_TARGET_FPS,
            atlas_path: DEFAULT_ATLAS_PATH,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            seconds_per_frame: DEFAULT_SECONDS_PER_FRAME,
            move_speed: DEFAULT_MOVE_SPEED,
            roster_origin: (DEFAULT_ROSTER_ORIGIN_X, DEFAULT_ROSTER_ORIGIN_Y),
            roster_spacing: DEFAULT_ROSTER_SPACING,
        }
    }

    /// Starting position of the roster sprite in `slot`.
    pub fn roster_position(&self, slot: usize) -> (f32, f32) {
        let (x, y) = self.roster_origin;
        (x + slot as f32 * self.roster_spacing, y)
    }
}
