//! Slime sprites entry point.
//!
//! A raylib demo of sprite-sheet animation:
//! - **raylib** for windowing, input, texture loading and drawing
//! - **bevy_ecs** to hold the roster, its resources and the per-tick systems
//!
//! Fourteen slimes share one atlas (`img/slime.png`, 12x14 px cells). Arrow
//! keys move them all, Space toggles idle/move, F11 shows the debug overlay.
//!
//! # Main Loop
//!
//! 1. Open the window and load the atlas (exit with failure if it can't be loaded)
//! 2. Spawn the roster and register observers and systems
//! 3. Each frame: poll input, move/toggle the roster, advance animations, draw
//! 4. Release the atlas, then close the window
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::process::ExitCode;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::{Color, RaylibDraw, Texture2D};

use slimesprites::events::posetoggle::toggle_pose_observer;
use slimesprites::events::switchdebug::switch_debug_observer;
use slimesprites::game::{SLIME_ATLAS, spawn_roster};
use slimesprites::resources::animframe::AnimFrame;
use slimesprites::resources::atlasstore::AtlasStore;
use slimesprites::resources::democonfig::DemoConfig;
use slimesprites::resources::input::InputState;
use slimesprites::resources::worldtime::WorldTime;
use slimesprites::systems::animation::sprite_animation;
use slimesprites::systems::input::update_input_state;
use slimesprites::systems::render::{render_debug_overlay, render_pass};
use slimesprites::systems::rostercontroller::roster_controller;
use slimesprites::systems::time::update_world_time;

/// Sprite-sheet animation demo.
///
/// Takes no options: every setting is compiled in.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _cli = Cli::parse();
    let config = DemoConfig::new();

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title(config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);

    let slime_frame = match AnimFrame::load(
        &mut rl,
        &thread,
        config.atlas_path,
        config.cell_width,
        config.cell_height,
    ) {
        Ok(frame) => frame,
        Err(e) => {
            log::error!("{}", e);
            // returning drops the handle, which closes the window
            return ExitCode::FAILURE;
        }
    };

    let mut atlases: AtlasStore = AtlasStore::new();
    atlases.insert(SLIME_ATLAS, slime_frame);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_non_send_resource(atlases);

    world.spawn(Observer::new(toggle_pose_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    spawn_roster(&mut world, SLIME_ATLAS, &config);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(roster_controller);
    update.add_systems(sprite_animation::<Texture2D>.after(roster_controller));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Entering main loop");
    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        update_input_state(&mut world, &rl);

        update.run(&mut world);

        let fps = rl.get_fps();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render_pass::<Texture2D, _>(&mut world, &mut d);
        render_debug_overlay::<Texture2D, _>(&mut world, &mut d, fps);
    }

    // Textures must be released while the GL context is still alive.
    if let Some(mut atlases) = world.remove_non_send_resource::<AtlasStore>() {
        atlases.clear();
    }
    log::info!("Bye");
    ExitCode::SUCCESS
}
