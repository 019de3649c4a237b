//! Sprite animation system.
//!
//! [`sprite_animation`] advances the frame timer of every bound
//! [`Sprite`](crate::components::sprite::Sprite) using the grid of the atlas it
//! is bound to. Unbound sprites and sprites whose atlas key is unknown are left
//! untouched.
//!
//! The system is generic over the texture type so it can run against test
//! textures; the game registers `sprite_animation::<Texture2D>`.

use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::animframe::AtlasTexture;
use crate::resources::atlasstore::AtlasStore;
use crate::resources::worldtime::WorldTime;

/// Advance every bound sprite by the last frame's delta.
pub fn sprite_animation<T: AtlasTexture + 'static>(
    mut query: Query<&mut Sprite>,
    atlases: NonSend<AtlasStore<T>>,
    time: Res<WorldTime>,
) {
    for mut sprite in query.iter_mut() {
        let grid = match sprite.atlas_key.as_deref().and_then(|key| atlases.get(key)) {
            Some(atlas) => *atlas.grid(),
            None => continue,
        };
        sprite.advance(time.delta, &grid);
    }
}
