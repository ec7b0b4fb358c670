//! Player module: body entity, input handling, movement, and projectiles.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `Projectile`) and resources (`MoveIntent`, `GroundContact`, `ProjectileRegistry`) |
//! | [`control`] | Ground-contact polling, WASD/Space input, camera-relative velocity |
//! | [`projectile`] | Pointer-button spawning, per-kind kinematics, lifetime removal |
//!
//! All public items are re-exported at this level so the rest of the crate can
//! use flat `crate::player::*` imports without knowing the sub-module layout.

pub mod control;
pub mod projectile;
pub mod state;

// ── Flat re-exports ────────────────────────────────────────────────────────────

pub use control::{
    apply_move_intent_system, camera_relative_velocity, ground_contact_system,
    keyboard_to_intent_system,
};
pub use projectile::{
    boomerang_position, projectile_fire_system, projectile_step_system, screen_to_ground_target,
};
pub use state::{
    ContactState, GroundContact, MoveIntent, Player, Projectile, ProjectileId, ProjectileKind,
    ProjectileRegistry,
};

use crate::config::TuningConfig;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Player systems and state, wired in the fixed per-frame order the
/// simulation depends on: collision events are consumed first, then input is
/// polled, then the single velocity write happens, then projectiles spawn and
/// step.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveIntent>()
            .init_resource::<GroundContact>()
            .init_resource::<ProjectileRegistry>()
            .add_systems(
                Update,
                (
                    ground_contact_system,
                    keyboard_to_intent_system,
                    apply_move_intent_system,
                    projectile_fire_system,
                    projectile_step_system,
                )
                    .chain(),
            );
    }
}

// ── Body spawn ─────────────────────────────────────────────────────────────────

/// Spawn the player body above the ground platform.
///
/// A dynamic ball with rotations locked: the body slides and falls but never
/// tumbles, so the camera-relative velocity writes always act in a stable
/// frame.  Collision events are enabled for the ground-contact tracker.  The
/// body is created once per session and never despawned.
pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<TuningConfig>,
) {
    commands.spawn((
        Player,
        // Physics
        RigidBody::Dynamic,
        Collider::ball(config.player_radius),
        Velocity::zero(),
        LockedAxes::ROTATION_LOCKED,
        ActiveEvents::COLLISION_EVENTS,
        // Transform / visuals
        Transform::from_xyz(0.0, config.player_spawn_y, 0.0),
        Visibility::default(),
        Mesh3d(meshes.add(Sphere::new(config.player_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.35, 0.9),
            ..default()
        })),
    ));

    info!("player body spawned at height {}", config.player_spawn_y);
}
