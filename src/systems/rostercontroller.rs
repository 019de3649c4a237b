//! Roster controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! drives the whole roster at once:
//! - Space toggles every sprite's pose through [`TogglePoseEvent`].
//! - F11 toggles the debug overlay through [`SwitchDebugEvent`].
//! - Held arrow keys move every [`InputControlled`] entity by its `speed`.
//!
//! Movement is per tick, not per second, so it follows the frame rate.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::events::posetoggle::TogglePoseEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

pub fn roster_controller(
    mut query: Query<(&InputControlled, &mut MapPosition)>,
    input: Res<InputState>,
    mut commands: Commands,
) {
    if input.toggle_pose.just_pressed {
        commands.trigger(TogglePoseEvent {});
    }
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.move_right.active {
        dx += 1.0;
    }
    if input.move_left.active {
        dx -= 1.0;
    }
    if input.move_up.active {
        dy -= 1.0;
    }
    if input.move_down.active {
        dy += 1.0;
    }
    if dx == 0.0 && dy == 0.0 {
        return;
    }

    for (controlled, mut position) in query.iter_mut() {
        position.translate(dx * controlled.speed, dy * controlled.speed);
    }
}
