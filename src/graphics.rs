//! Camera and lighting setup.
//!
//! The camera is fixed and isometric: movement input is rotated by the same
//! yaw ([`crate::constants::CAMERA_YAW`]) so "forward" tracks the view
//! diagonal.  Nothing here runs per frame.

use bevy::prelude::*;

/// Spawn the fixed isometric camera looking down at the platform field.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(20.0, 20.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Directional key light plus a soft ambient fill.
pub fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
}
