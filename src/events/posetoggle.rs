//! Event and observer to flip the pose of every sprite.
//!
//! Emitting a [`TogglePoseEvent`] switches each [`Sprite`] between
//! [`Pose::Idle`](crate::components::sprite::Pose::Idle) and
//! [`Pose::Move`](crate::components::sprite::Pose::Move). The frame index and
//! timer are left alone, so the animation continues on the new row.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::sprite::Sprite;

/// Event used to toggle the pose of the whole roster.
#[derive(Event, Debug, Clone, Copy)]
pub struct TogglePoseEvent {}

/// Observer that toggles the pose of every [`Sprite`].
pub fn toggle_pose_observer(_trigger: On<TogglePoseEvent>, mut sprites: Query<&mut Sprite>) {
    let mut count = 0;
    for mut sprite in sprites.iter_mut() {
        sprite.pose = sprite.pose.toggled();
        count += 1;
    }
    debug!("Toggled pose on {} sprite(s)", count);
}
