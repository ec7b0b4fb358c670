use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;

use ricochet::config::{self, TuningConfig};
use ricochet::{graphics, hud, level, player};

/// Configure Rapier physics: the heavier-than-Earth gravity the jump arc is
/// tuned against.
fn setup_physics_config(mut rapier_config: Query<&mut RapierConfiguration>, config: Res<TuningConfig>) {
    for mut cfg in rapier_config.iter_mut() {
        cfg.gravity = Vec3::new(0.0, config.gravity_y, 0.0);
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ricochet".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.53, 0.73, 0.92)))
        // Insert TuningConfig with compiled defaults; load_tuning_config will
        // overwrite it from assets/tuning.toml (if present) in the Startup
        // schedule.
        .insert_resource(TuningConfig::default())
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins((player::PlayerPlugin, level::LevelPlugin))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_tuning_config,
                graphics::setup_camera.after(config::load_tuning_config),
                graphics::setup_lighting.after(config::load_tuning_config),
                hud::setup_hud
                    .after(graphics::setup_camera)
                    .after(config::load_tuning_config),
                level::spawn_level.after(config::load_tuning_config),
                player::spawn_player.after(config::load_tuning_config),
                setup_physics_config.after(config::load_tuning_config),
            ),
        )
        .add_systems(Update, hud::hud_status_system)
        .run();
}
