//! Roster setup.
//!
//! The demo shows one slime per [`SlimeColor`]. A slime's identity is its
//! color's index, so each color owns the pair of atlas rows
//! `2 * index` (idle) and `2 * index + 1` (move).

use std::sync::Arc;

use bevy_ecs::prelude::*;
use log::info;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rosterslot::RosterSlot;
use crate::components::sprite::Sprite;
use crate::resources::democonfig::DemoConfig;

/// Key of the slime atlas in the [`AtlasStore`](crate::resources::atlasstore::AtlasStore).
pub const SLIME_ATLAS: &str = "slime";

/// Slime colors, in atlas order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlimeColor {
    Aquamarine,
    Blue,
    BlueGreen,
    DarkBlue,
    Gold,
    Green,
    LightBlue,
    Maroon,
    Orange,
    PaleGreen,
    Pink,
    Purple,
    Red,
    Violet,
}

impl SlimeColor {
    /// Every color in roster order.
    pub const ALL: [SlimeColor; 14] = [
        SlimeColor::Aquamarine,
        SlimeColor::Blue,
        SlimeColor::BlueGreen,
        SlimeColor::DarkBlue,
        SlimeColor::Gold,
        SlimeColor::Green,
        SlimeColor::LightBlue,
        SlimeColor::Maroon,
        SlimeColor::Orange,
        SlimeColor::PaleGreen,
        SlimeColor::Pink,
        SlimeColor::Purple,
        SlimeColor::Red,
        SlimeColor::Violet,
    ];

    /// Sprite identity used for atlas row selection.
    pub fn identity(self) -> u32 {
        self as u32
    }
}

/// Spawn one slime per color, bound to `atlas_key`, laid out in a row.
///
/// Returns the spawned entities in slot order.
pub fn spawn_roster(world: &mut World, atlas_key: &str, config: &DemoConfig) -> Vec<Entity> {
    let key: Arc<str> = Arc::from(atlas_key);
    let entities: Vec<Entity> = SlimeColor::ALL
        .iter()
        .enumerate()
        .map(|(slot, color)| {
            let mut sprite =
                Sprite::new(color.identity(), config.seconds_per_frame).with_center_origin(true);
            sprite.bind(Arc::clone(&key));
            let (x, y) = config.roster_position(slot);
            world
                .spawn((
                    sprite,
                    MapPosition::new(x, y),
                    RosterSlot(slot),
                    InputControlled::new(config.move_speed),
                ))
                .id()
        })
        .collect();
    info!("Spawned {} slimes bound to atlas '{}'", entities.len(), atlas_key);
    entities
}
