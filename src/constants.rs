//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found and reasoned about in
//! one place.  [`crate::config::TuningConfig`] mirrors every constant and can
//! override it from `assets/tuning.toml` without recompiling.

// ── Player: Movement ──────────────────────────────────────────────────────────

/// Horizontal movement speed (world units / second).
///
/// Applied as a direct velocity, not a force: releasing every movement key
/// stops the player dead on the same frame.
pub const MOVE_SPEED: f32 = 8.0;

/// Vertical velocity applied on a successful jump (world units / second).
pub const JUMP_SPEED: f32 = 10.0;

/// Fixed isometric camera yaw (radians).  Raw WASD directions are rotated by
/// this angle so "forward" tracks the camera diagonal instead of world −Z.
pub const CAMERA_YAW: f32 = -std::f32::consts::FRAC_PI_4;

/// Player ball-collider radius.
pub const PLAYER_RADIUS: f32 = 0.5;

/// Player spawn height above the ground platform.  High enough that the body
/// visibly drops in on level start; the first landing sets the grounded flag.
pub const PLAYER_SPAWN_Y: f32 = 5.0;

// ── Physics ───────────────────────────────────────────────────────────────────

/// World gravity along −Y.  Stronger than Earth gravity so jumps feel snappy
/// at `JUMP_SPEED` = 10.
pub const GRAVITY_Y: f32 = -20.0;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Arrow flight speed (world units / second).
pub const ARROW_SPEED: f32 = 20.0;

/// Seconds after which an arrow self-removes.
pub const ARROW_LIFETIME: f32 = 2.0;

/// Seconds a boomerang takes to fly one full circle, which is also its
/// lifetime: it is removed the moment the revolution completes.
pub const BOOMERANG_LIFETIME: f32 = 1.0;

/// Radius of the boomerang's circular path around its launch point.
pub const BOOMERANG_RADIUS: f32 = 2.0;

/// Cosmetic spin rate of the boomerang about its own axis (radians / second).
pub const BOOMERANG_SPIN_RATE: f32 = 10.0;

// ── Aiming ────────────────────────────────────────────────────────────────────

/// Width/depth of the world-plane region that the full window maps onto when
/// converting a cursor position into a projectile target.  Normalized screen
/// coordinates map as `n * TARGET_PLANE_SPAN - TARGET_PLANE_SPAN / 2`.
///
/// This is a flat affine approximation, not a camera ray cast; see
/// `screen_to_ground_target` before changing it.
pub const TARGET_PLANE_SPAN: f32 = 40.0;

/// Fixed height of projectile target points.
pub const TARGET_PLANE_HEIGHT: f32 = 2.0;

// ── Level timer ───────────────────────────────────────────────────────────────

/// Length of the hostile spawn window in seconds.  Each level advance resets
/// the countdown to this value.
pub const SPAWN_WINDOW_SECS: u32 = 60;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Font size for the status overlay text.
pub const HUD_FONT_SIZE: f32 = 18.0;
