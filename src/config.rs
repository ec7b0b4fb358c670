//! Runtime tuning configuration loaded from `assets/tuning.toml`.
//!
//! [`TuningConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_tuning_config`] reads
//! `assets/tuning.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! Add `config: Res<TuningConfig>` to any system parameter list and read
//! values with `config.move_speed`, `config.arrow_lifetime`, etc.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable movement, projectile, and timer configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/tuning.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    // ── Player: Movement ─────────────────────────────────────────────────────
    pub move_speed: f32,
    pub jump_speed: f32,
    pub camera_yaw: f32,
    pub player_radius: f32,
    pub player_spawn_y: f32,

    // ── Physics ──────────────────────────────────────────────────────────────
    pub gravity_y: f32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub arrow_speed: f32,
    pub arrow_lifetime: f32,
    pub boomerang_lifetime: f32,
    pub boomerang_radius: f32,
    pub boomerang_spin_rate: f32,

    // ── Aiming ───────────────────────────────────────────────────────────────
    pub target_plane_span: f32,
    pub target_plane_height: f32,

    // ── Level timer ──────────────────────────────────────────────────────────
    pub spawn_window_secs: u32,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            // Player: Movement
            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            camera_yaw: CAMERA_YAW,
            player_radius: PLAYER_RADIUS,
            player_spawn_y: PLAYER_SPAWN_Y,
            // Physics
            gravity_y: GRAVITY_Y,
            // Projectiles
            arrow_speed: ARROW_SPEED,
            arrow_lifetime: ARROW_LIFETIME,
            boomerang_lifetime: BOOMERANG_LIFETIME,
            boomerang_radius: BOOMERANG_RADIUS,
            boomerang_spin_rate: BOOMERANG_SPIN_RATE,
            // Aiming
            target_plane_span: TARGET_PLANE_SPAN,
            target_plane_height: TARGET_PLANE_HEIGHT,
            // Level timer
            spawn_window_secs: SPAWN_WINDOW_SECS,
            // HUD
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

/// Startup system: attempt to load `assets/tuning.toml` and overwrite the
/// `TuningConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are logged
/// but do not abort the game.  A missing file is silently ignored (defaults
/// are already in place from `insert_resource`).
pub fn load_tuning_config(mut config: ResMut<TuningConfig>) {
    let path = "assets/tuning.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<TuningConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("loaded tuning config from {path}");
            }
            Err(e) => {
                warn!("failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present; defaults are already in place; not an error.
            info!("no {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_constants() {
        let config = TuningConfig::default();
        assert_eq!(config.move_speed, MOVE_SPEED);
        assert_eq!(config.jump_speed, JUMP_SPEED);
        assert_eq!(config.spawn_window_secs, SPAWN_WINDOW_SECS);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config: TuningConfig = toml::from_str("move_speed = 12.0").unwrap();
        assert_eq!(config.move_speed, 12.0);
        assert_eq!(config.jump_speed, JUMP_SPEED);
        assert_eq!(config.arrow_speed, ARROW_SPEED);
    }
}
