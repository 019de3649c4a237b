//! Sprite-sheet animation component.
//!
//! A [`Sprite`] stores the per-instance animation state: which atlas rows it
//! owns (`identity` and [`Pose`]), the current frame, and the frame timer.
//! The atlas itself lives in [`AtlasStore`](crate::resources::atlasstore::AtlasStore)
//! and is referenced by key.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::animframe::AtlasGrid;

/// Animation state selecting a block of atlas rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Pose {
    #[default]
    Idle,
    Move,
}

impl Pose {
    /// Number of poses packed per sprite identity in the atlas.
    pub const COUNT: u32 = 2;

    /// Row offset of this pose inside a sprite's block of atlas rows.
    ///
    /// Part of the atlas layout contract. Keep this table in sync with the
    /// art, not with the declaration order of the variants.
    pub const fn atlas_row_offset(self) -> u32 {
        match self {
            Pose::Idle => 0,
            Pose::Move => 1,
        }
    }

    /// Idle becomes Move and Move becomes Idle.
    pub const fn toggled(self) -> Self {
        match self {
            Pose::Idle => Pose::Move,
            Pose::Move => Pose::Idle,
        }
    }
}

/// Everything the renderer needs to blit one sprite cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    /// Cell in texture pixel space.
    pub source: Rectangle,
    /// Target rectangle on screen.
    pub dest: Rectangle,
    /// Pivot relative to `dest`, used for rotation and scaling.
    pub origin: Vector2,
}

impl SpriteDraw {
    /// Screen area the blit actually covers.
    ///
    /// raylib places the quad's top-left corner at `dest - origin` when the
    /// rotation is zero.
    pub fn screen_rect(&self) -> Rectangle {
        Rectangle {
            x: self.dest.x - self.origin.x,
            y: self.dest.y - self.origin.y,
            ..self.dest
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Sprite {
    /// Row selector into the shared atlas.
    pub identity: u32,
    /// Key of the bound atlas. `None` until [`Sprite::bind`] is called.
    pub atlas_key: Option<Arc<str>>,
    pub pose: Pose,
    pub current_frame: u32,
    /// Seconds accumulated since the last frame step.
    pub elapsed_time: f32,
    pub seconds_per_frame: f32,
    /// When false the frame index is frozen.
    pub animate: bool,
    /// Draw with the cell center at the given position instead of the top-left corner.
    pub center_origin: bool,
}

impl Sprite {
    pub fn new(identity: u32, seconds_per_frame: f32) -> Self {
        Self {
            identity,
            atlas_key: None,
            pose: Pose::Idle,
            current_frame: 0,
            elapsed_time: 0.0,
            seconds_per_frame,
            animate: true,
            center_origin: false,
        }
    }

    pub fn with_center_origin(mut self, center_origin: bool) -> Self {
        self.center_origin = center_origin;
        self
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Attach this sprite to the atlas stored under `atlas_key`.
    pub fn bind(&mut self, atlas_key: impl Into<Arc<str>>) {
        self.atlas_key = Some(atlas_key.into());
    }

    pub fn is_bound(&self) -> bool {
        self.atlas_key.is_some()
    }

    /// Advance the frame timer by `dt` seconds.
    ///
    /// At most one frame step happens per call, however large `dt` is: a long
    /// hitch makes the animation fall behind rather than skip frames. The
    /// timer restarts from zero on every step. Does nothing while animation is
    /// disabled or the grid has no cells.
    pub fn advance(&mut self, dt: f32, grid: &AtlasGrid) {
        if !self.animate {
            return;
        }
        let total = grid.cell_count();
        if total == 0 {
            return;
        }
        self.elapsed_time += dt;
        if self.elapsed_time >= self.seconds_per_frame {
            self.elapsed_time = 0.0;
            self.current_frame += 1;
            if self.current_frame >= total {
                self.current_frame = 0;
            }
        }
    }

    /// Atlas row holding this sprite's current pose.
    ///
    /// Rows wrap around the atlas height, so distinct identities alias once
    /// `identity * Pose::COUNT + offset` reaches `rows`.
    pub fn atlas_row(&self, grid: &AtlasGrid) -> Option<u32> {
        if grid.rows == 0 {
            return None;
        }
        let packed = u64::from(self.identity) * u64::from(Pose::COUNT)
            + u64::from(self.pose.atlas_row_offset());
        Some((packed % u64::from(grid.rows)) as u32)
    }

    pub fn atlas_column(&self, grid: &AtlasGrid) -> Option<u32> {
        if grid.columns == 0 {
            return None;
        }
        Some(self.current_frame % grid.columns)
    }

    /// Source, destination and origin for drawing this sprite at `position`.
    ///
    /// Returns `None` when the grid has no cells to sample from.
    pub fn draw_params(&self, grid: &AtlasGrid, position: Vector2) -> Option<SpriteDraw> {
        let row = self.atlas_row(grid)?;
        let column = self.atlas_column(grid)?;
        let source = grid.cell_rect(column, row);

        let mut dest = Rectangle {
            x: position.x,
            y: position.y,
            width: grid.cell_width as f32,
            height: grid.cell_height as f32,
        };
        let mut origin = Vector2 { x: 0.0, y: 0.0 };
        if self.center_origin {
            origin = Vector2 {
                x: grid.center_x as f32,
                y: grid.center_y as f32,
            };
            dest.x -= origin.x;
            dest.y -= origin.y;
        }

        Some(SpriteDraw {
            source,
            dest,
            origin,
        })
    }
}
