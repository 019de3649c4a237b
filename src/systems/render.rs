//! Roster rendering.
//!
//! Rendering goes through the [`SpriteCanvas`] trait instead of raylib's draw
//! handle directly. Every raylib draw handle implements it for [`Texture2D`];
//! tests implement it with a recorder.
//!
//! We render inside raylib's drawing scope and query the ECS World, the same
//! way for the sprites and for the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rosterslot::RosterSlot;
use crate::components::sprite::{Sprite, SpriteDraw};
use crate::resources::animframe::{AnimFrame, AtlasTexture};
use crate::resources::atlasstore::AtlasStore;
use crate::resources::debugmode::DebugMode;

/// Caption printed in the top-left corner.
pub const CAPTION: &str = "Simple sprite system with Raylib";

/// Drawing surface the renderer needs.
pub trait SpriteCanvas<T> {
    /// Blit `source` (texture pixels) of `texture` into `dest` (screen pixels).
    fn draw_region(
        &mut self,
        texture: &T,
        source: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    );

    fn draw_label(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);

    fn draw_outline(&mut self, rect: Rectangle, color: Color);
}

impl<D: RaylibDraw> SpriteCanvas<Texture2D> for D {
    fn draw_region(
        &mut self,
        texture: &Texture2D,
        source: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    ) {
        self.draw_texture_pro(texture, source, dest, origin, rotation, tint);
    }

    fn draw_label(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.draw_text(text, x, y, font_size, color);
    }

    fn draw_outline(&mut self, rect: Rectangle, color: Color) {
        self.draw_rectangle_lines_ex(rect, 1.0, color);
    }
}

/// Resolve the atlas of `sprite` and compute where to draw it.
///
/// `None` when the sprite is unbound, its atlas is missing, the atlas texture
/// is not loaded, or the grid has no cells.
fn resolve<'a, T: AtlasTexture>(
    atlases: &'a AtlasStore<T>,
    sprite: &Sprite,
    position: Vector2,
) -> Option<(&'a AnimFrame<T>, SpriteDraw)> {
    let atlas = atlases.get(sprite.atlas_key.as_deref()?)?;
    if !atlas.is_loaded() {
        return None;
    }
    let draw = sprite.draw_params(atlas.grid(), position)?;
    Some((atlas, draw))
}

/// Collect roster entries sorted by slot.
fn roster(world: &mut World) -> Vec<(RosterSlot, Sprite, MapPosition)> {
    let mut q = world.query::<(&RosterSlot, &Sprite, &MapPosition)>();
    let mut entries: Vec<(RosterSlot, Sprite, MapPosition)> = q
        .iter(world)
        .map(|(slot, sprite, pos)| (*slot, sprite.clone(), *pos))
        .collect();
    entries.sort_by_key(|(slot, _, _)| *slot);
    entries
}

/// Draw every roster sprite with its slot label, then the caption.
///
/// Sprites whose atlas cannot be drawn are skipped without a texture draw
/// call; their label is still printed.
pub fn render_pass<T, C>(world: &mut World, canvas: &mut C)
where
    T: AtlasTexture + 'static,
    C: SpriteCanvas<T>,
{
    let entries = roster(world);
    let atlases = world.non_send_resource::<AtlasStore<T>>();

    for (slot, sprite, position) in entries.iter() {
        if let Some((atlas, draw)) = resolve(atlases, sprite, position.pos) {
            canvas.draw_region(
                atlas.texture(),
                draw.source,
                draw.dest,
                draw.origin,
                0.0,
                Color::WHITE,
            );
        }
        canvas.draw_label(
            &slot.0.to_string(),
            position.pos.x as i32 - 20,
            position.pos.y as i32 - 30,
            20,
            Color::GRAY,
        );
    }

    canvas.draw_label(CAPTION, 10, 10, 20, Color::WHITE);
}

/// Draw cell outlines and diagnostics while [`DebugMode`] is present.
pub fn render_debug_overlay<T, C>(world: &mut World, canvas: &mut C, fps: u32)
where
    T: AtlasTexture + 'static,
    C: SpriteCanvas<T>,
{
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let entries = roster(world);
    let atlases = world.non_send_resource::<AtlasStore<T>>();

    for (_, sprite, position) in entries.iter() {
        if let Some((_, draw)) = resolve(atlases, sprite, position.pos) {
            canvas.draw_outline(draw.screen_rect(), Color::RED);
        }
    }

    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    canvas.draw_label(&text, 10, 40, 10, Color::LIGHTGRAY);
    let text = format!("Sprites: {}", entries.len());
    canvas.draw_label(&text, 10, 55, 10, Color::LIGHTGRAY);

    let mut y = 70;
    for (key, atlas) in atlases.iter() {
        let grid = atlas.grid();
        let text = format!(
            "Atlas '{}': {}x{} cells of {}x{} px",
            key, grid.columns, grid.rows, grid.cell_width, grid.cell_height
        );
        canvas.draw_label(&text, 10, y, 10, Color::LIGHTGRAY);
        y += 15;
    }
}
