//! Input polling.
//!
//! [`update_input_state`] reads the keyboard from raylib each frame and writes
//! the results into [`crate::resources::input::InputState`]. Reacting to the
//! keys is left to [`crate::systems::rostercontroller`].
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::resources::input::InputState;

/// Poll raylib for every bound key and update the `InputState` resource.
pub fn update_input_state(world: &mut World, rl: &RaylibHandle) {
    let mut input = world.resource_mut::<InputState>();
    for state in input.states_mut() {
        let key = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
        state.just_released = rl.is_key_released(key);
    }
}
