//! ECS resources made available to systems.
//!
//! Overview
//! - `animframe` – atlas texture plus the grid slicing it into cells
//! - `atlasstore` – loaded atlases keyed by string IDs
//! - `debugmode` – presence toggles the debug overlay
//! - `democonfig` – compile-time window, atlas and roster settings
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `worldtime` – simulation time and delta
pub mod animframe;
pub mod atlasstore;
pub mod debugmode;
pub mod democonfig;
pub mod input;
pub mod worldtime;
