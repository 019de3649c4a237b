//! Demo systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite frame timers against their atlas grid
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the roster and the debug overlay through a [`render::SpriteCanvas`]
//! - [`rostercontroller`] – translate input state into pose toggles and movement
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod input;
pub mod render;
pub mod rostercontroller;
pub mod time;
