//! Player input, ground contact, and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`ground_contact_system`]: polls collision enter/exit events into
//!    [`GroundContact`].
//! 2. [`keyboard_to_intent_system`]: rebuilds [`MoveIntent`] from WASD/Space
//!    pressed-state.
//! 3. [`apply_move_intent_system`]: converts `MoveIntent` + `GroundContact`
//!    into a single `Velocity` write on the player body.
//!
//! The input abstraction layer (`MoveIntent`) makes the movement logic fully
//! testable: tests populate the resource directly and run only
//! [`apply_move_intent_system`].

use super::state::{ContactState, GroundContact, MoveIntent, Player};
use crate::config::TuningConfig;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// ── Step 1: Ground contact ────────────────────────────────────────────────────

/// Poll collision enter/exit events for the player body into [`GroundContact`].
///
/// Any collision-enter involving the player sets `Grounded`; any
/// collision-exit sets `Airborne`.  No contact-normal check is made, so a
/// lateral bump against a platform side also counts as ground, matching the
/// intended loose platforming feel.  Events are consumed at the start of the
/// frame, before movement reads the flag.
pub fn ground_contact_system(
    mut collisions: MessageReader<CollisionEvent>,
    q_player: Query<Entity, With<Player>>,
    mut contact: ResMut<GroundContact>,
) {
    let Ok(player) = q_player.single() else {
        // No player body yet; drain the queue so stale events from a previous
        // body never leak into the next one.
        collisions.clear();
        return;
    };

    for event in collisions.read() {
        match event {
            CollisionEvent::Started(e1, e2, _) if *e1 == player || *e2 == player => {
                contact.0 = ContactState::Grounded;
            }
            CollisionEvent::Stopped(e1, e2, _) if *e1 == player || *e2 == player => {
                contact.0 = ContactState::Airborne;
            }
            _ => {}
        }
    }
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Rebuild [`MoveIntent`] from the current key pressed-state.
///
/// - **W** → forward, **S** → backward, **A** → left, **D** → right
/// - **Space** → jump
///
/// Reading pressed-state rather than key events makes the flags idempotent
/// under OS key auto-repeat: a held key is simply `true` every frame.
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<MoveIntent>,
) {
    intent.forward = keys.pressed(KeyCode::KeyW);
    intent.backward = keys.pressed(KeyCode::KeyS);
    intent.left = keys.pressed(KeyCode::KeyA);
    intent.right = keys.pressed(KeyCode::KeyD);
    intent.jump = keys.pressed(KeyCode::Space);
}

// ── Step 3: Apply intent → physics ────────────────────────────────────────────

/// Camera-relative horizontal velocity for the given intent.
///
/// Builds the raw direction vector (z −1 forward, z +1 backward, x −1 left,
/// x +1 right), normalizes it, rotates it by the fixed camera yaw so input is
/// relative to the isometric view, and scales by the move speed.  Returns
/// `Vec3::ZERO` when no direction flag is set.
pub fn camera_relative_velocity(intent: &MoveIntent, config: &TuningConfig) -> Vec3 {
    let mut dir = Vec3::ZERO;
    if intent.forward {
        dir.z -= 1.0;
    }
    if intent.backward {
        dir.z += 1.0;
    }
    if intent.left {
        dir.x -= 1.0;
    }
    if intent.right {
        dir.x += 1.0;
    }

    if dir == Vec3::ZERO {
        return Vec3::ZERO;
    }

    let dir = dir.normalize();
    let (sin, cos) = config.camera_yaw.sin_cos();
    Vec3::new(dir.x * cos + dir.z * sin, 0.0, -dir.x * sin + dir.z * cos) * config.move_speed
}

/// Convert [`MoveIntent`] into a single `Velocity` write on the player body.
///
/// This is the **only** system that writes player physics; the input systems
/// only write to `MoveIntent`.  Per frame:
///
/// | Condition | Effect |
/// |---|---|
/// | any direction flag set | horizontal velocity = camera-rotated unit dir × move speed |
/// | no direction flag set  | horizontal velocity = exactly zero (hard stop) |
/// | always                 | vertical velocity preserved (gravity / jump arcs untouched) |
/// | jump held && grounded  | vertical velocity = jump speed; grounded cleared this tick |
///
/// The grounded flag is cleared in the same tick the jump fires (before the
/// physics step reports the corresponding collision-exit), so a still-true
/// flag cannot grant a second jump within one frame.  A frame that fires
/// before the player body exists is a silent no-op.
pub fn apply_move_intent_system(
    mut q: Query<&mut Velocity, With<Player>>,
    intent: Res<MoveIntent>,
    mut contact: ResMut<GroundContact>,
    config: Res<TuningConfig>,
) {
    let Ok(mut velocity) = q.single_mut() else {
        return;
    };

    let horizontal = camera_relative_velocity(&intent, &config);
    let mut next = Vec3::new(horizontal.x, velocity.linvel.y, horizontal.z);

    if intent.jump && contact.is_grounded() {
        next.y = config.jump_speed;
        contact.0 = ContactState::Airborne;
    }

    velocity.linvel = next;
}

// ── Unit tests ────────────────────────────────────────────────────────────────
