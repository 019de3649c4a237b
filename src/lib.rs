//! Slime sprites library.
//!
//! Sprite-sheet animation on top of raylib and bevy_ecs: an atlas sliced into
//! a grid of cells, per-sprite frame timers, and the mapping from a sprite's
//! identity, pose and frame to a cell of the atlas. Exposed as a library for
//! integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
