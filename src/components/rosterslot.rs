//! Roster slot component.
//!
//! The [`RosterSlot`] is the index of an entity in the roster. The renderer
//! draws in slot order and prints the slot number as the sprite's label.

use bevy_ecs::prelude::Component;

/// Position of an entity in the roster.
///
/// Lower slots are drawn first, so higher slots end up on top.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RosterSlot(pub usize);
