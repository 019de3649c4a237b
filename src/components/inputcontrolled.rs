//! Keyboard-controlled movement component.
//!
//! Entities with [`InputControlled`] are moved by
//! [`roster_controller`](crate::systems::rostercontroller::roster_controller)
//! while arrow keys are held. Every controlled entity moves by the same amount,
//! so the whole roster travels together.

use bevy_ecs::prelude::Component;

/// Movement applied per tick while a direction key is held.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Pixels moved per tick along each held direction.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
