//! Simulation clock resource.

use bevy_ecs::prelude::Resource;

/// Frame timing shared by all systems.
///
/// `delta` is the duration of the last tick in seconds as reported by raylib.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
        }
    }
}
