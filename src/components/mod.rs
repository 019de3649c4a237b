//! ECS components for roster entities.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – per-tick keyboard movement speed
//! - [`mapposition`] – screen position a sprite is drawn at
//! - [`rosterslot`] – draw order and label index inside the roster
//! - [`sprite`] – sprite-sheet animation state and cell mapping

pub mod inputcontrolled;
pub mod mapposition;
pub mod rosterslot;
pub mod sprite;
