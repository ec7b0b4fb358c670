//! Projectile spawning and kinematics.
//!
//! Pointer buttons launch two projectile types from the player's position:
//! the primary button an arrow, any other button a boomerang.  Both are purely
//! kinematic (no colliders, no physics bodies) and self-remove when their
//! lifetime expires.  Live projectiles are tracked in [`ProjectileRegistry`]
//! keyed by id.

use super::state::{Player, Projectile, ProjectileKind, ProjectileRegistry};
use crate::config::TuningConfig;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::f32::consts::TAU;

// ── Aiming ────────────────────────────────────────────────────────────────────

/// Map normalized screen coordinates (0..1 per axis) onto the fixed-height
/// aiming plane.
///
/// A flat affine map: screen X spans world X across `target_plane_span`
/// centred on the origin, screen Y likewise spans world Z, and Y is pinned to
/// `target_plane_height`.  Deliberately *not* a camera ray cast: the fixed
/// isometric view makes this approximation close enough to feel right, and it
/// keeps aiming independent of camera internals.  Swap this function for a
/// ray cast if that ever changes.
pub fn screen_to_ground_target(normalized: Vec2, config: &TuningConfig) -> Vec3 {
    let span = config.target_plane_span;
    Vec3::new(
        normalized.x * span - span / 2.0,
        config.target_plane_height,
        normalized.y * span - span / 2.0,
    )
}

// ── Kinematic models ──────────────────────────────────────────────────────────

/// Boomerang position at `elapsed` seconds: one full circle of `radius`
/// around `origin` over `lifetime` seconds, in the XZ plane, height unchanged.
///
/// The path starts and ends at `origin + (radius, 0, 0)`; it returns to a
/// point offset from the launch point, not to the launch point itself.
pub fn boomerang_position(origin: Vec3, elapsed: f32, lifetime: f32, radius: f32) -> Vec3 {
    let angle = TAU * elapsed / lifetime;
    Vec3::new(
        origin.x + angle.cos() * radius,
        origin.y,
        origin.z + angle.sin() * radius,
    )
}

impl ProjectileKind {
    /// Fixed lifetime in seconds for this kind.
    pub fn lifetime(&self, config: &TuningConfig) -> f32 {
        match self {
            ProjectileKind::Arrow { .. } => config.arrow_lifetime,
            ProjectileKind::Boomerang { .. } => config.boomerang_lifetime,
        }
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Spawn a projectile on pointer-button press.
///
/// Primary button → arrow aimed at the cursor's plane target; any other
/// button → boomerang circling the launch point.  Both spawn at the player's
/// current position with a freshly allocated registry id.  The entity spawn
/// goes through `Commands`, so the projectile becomes visible to the step
/// system on the next tick with a clean zero elapsed time.  Fires before the
/// player body exists are silent no-ops.
#[allow(clippy::too_many_arguments)]
pub fn projectile_fire_system(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    q_player: Query<&Transform, With<Player>>,
    mut registry: ResMut<ProjectileRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<TuningConfig>,
) {
    if buttons.get_just_pressed().next().is_none() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(player) = q_player.single() else {
        return;
    };

    let origin = player.translation;
    let normalized = Vec2::new(cursor.x / window.width(), cursor.y / window.height());
    let target = screen_to_ground_target(normalized, &config);

    for button in buttons.get_just_pressed() {
        let kind = if *button == MouseButton::Left {
            ProjectileKind::Arrow {
                direction: (target - origin).normalize_or_zero(),
            }
        } else {
            ProjectileKind::Boomerang { origin }
        };

        let id = registry.allocate_id();
        let entity = commands
            .spawn((
                Projectile { id, age: 0.0, kind },
                Transform::from_translation(origin),
                Visibility::default(),
                projectile_mesh(&kind, &mut meshes),
                projectile_material(&kind, &mut materials),
            ))
            .id();
        registry.insert(id, entity);
    }
}

/// Arrow: a thin shaft.  Boomerang: a small ring.
fn projectile_mesh(kind: &ProjectileKind, meshes: &mut Assets<Mesh>) -> Mesh3d {
    let mesh = match kind {
        ProjectileKind::Arrow { .. } => meshes.add(Cylinder::new(0.05, 0.5)),
        ProjectileKind::Boomerang { .. } => meshes.add(Torus {
            minor_radius: 0.05,
            major_radius: 0.2,
        }),
    };
    Mesh3d(mesh)
}

fn projectile_material(
    kind: &ProjectileKind,
    materials: &mut Assets<StandardMaterial>,
) -> MeshMaterial3d<StandardMaterial> {
    let color = match kind {
        ProjectileKind::Arrow { .. } => Color::srgb(0.55, 0.35, 0.18),
        ProjectileKind::Boomerang { .. } => Color::srgb(0.95, 0.78, 0.22),
    };
    MeshMaterial3d(materials.add(StandardMaterial {
        base_color: color,
        ..default()
    }))
}

// ── Stepping ──────────────────────────────────────────────────────────────────

/// Advance every live projectile one tick and remove the expired ones.
///
/// Age increases monotonically.  A projectile whose age crosses its lifetime
/// is removed from the registry and despawned in that same tick, without being
/// stepped again.  Surviving projectiles move per their kind:
///
/// - **Arrow**: translates along its fixed spawn direction at the arrow
///   speed; heading never changes after spawn.
/// - **Boomerang**: position is recomputed absolutely from its elapsed time
///   on the circle around its origin, plus a cosmetic spin about its own axis.
pub fn projectile_step_system(
    mut commands: Commands,
    mut q: Query<(Entity, &mut Projectile, &mut Transform)>,
    mut registry: ResMut<ProjectileRegistry>,
    time: Res<Time>,
    config: Res<TuningConfig>,
) {
    let dt = time.delta_secs();
    for (entity, mut projectile, mut transform) in q.iter_mut() {
        projectile.age += dt;
        if projectile.age >= projectile.kind.lifetime(&config) {
            registry.remove(projectile.id);
            commands.entity(entity).despawn();
            continue;
        }

        match projectile.kind {
            ProjectileKind::Arrow { direction } => {
                transform.translation += direction * config.arrow_speed * dt;
            }
            ProjectileKind::Boomerang { origin } => {
                transform.translation = boomerang_position(
                    origin,
                    projectile.age,
                    config.boomerang_lifetime,
                    config.boomerang_radius,
                );
                transform.rotate_y(config.boomerang_spin_rate * dt);
            }
        }
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // 64 fps: exactly representable in f32, so age sums stay exact and the
    // lifetime boundary lands on a precise frame.
    const DT: f32 = 1.0 / 64.0;

    fn stepping_world() -> World {
        let mut world = World::new();
        world.insert_resource(TuningConfig::default());
        world.insert_resource(ProjectileRegistry::default());
        world.insert_resource(Time::<()>::default());
        world
    }

    /// Advance the clock by `DT` and run one step pass.
    fn step_once(world: &mut World, schedule: &mut Schedule) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(DT));
        schedule.run(world);
    }

    fn spawn_projectile(world: &mut World, kind: ProjectileKind, at: Vec3) -> Entity {
        let id = world.resource_mut::<ProjectileRegistry>().allocate_id();
        let entity = world
            .spawn((
                Projectile { id, age: 0.0, kind },
                Transform::from_translation(at),
            ))
            .id();
        world.resource_mut::<ProjectileRegistry>().insert(id, entity);
        entity
    }

    // ── screen_to_ground_target ───────────────────────────────────────────────

    #[test]
    fn screen_corners_map_to_plane_corners() {
        let config = TuningConfig::default();
        assert_eq!(
            screen_to_ground_target(Vec2::new(0.0, 0.0), &config),
            Vec3::new(-20.0, 2.0, -20.0)
        );
        assert_eq!(
            screen_to_ground_target(Vec2::new(1.0, 1.0), &config),
            Vec3::new(20.0, 2.0, 20.0)
        );
        assert_eq!(
            screen_to_ground_target(Vec2::new(0.5, 0.5), &config),
            Vec3::new(0.0, 2.0, 0.0)
        );
    }

    // ── boomerang kinematics ──────────────────────────────────────────────────

    #[test]
    fn boomerang_starts_and_ends_at_radius_offset() {
        let origin = Vec3::new(3.0, 1.5, -4.0);
        let start = boomerang_position(origin, 0.0, 1.0, 2.0);
        let end = boomerang_position(origin, 1.0, 1.0, 2.0);
        let expected = origin + Vec3::new(2.0, 0.0, 0.0);
        assert!((start - expected).length() < 1e-4, "start {start:?}");
        assert!((end - expected).length() < 1e-4, "end {end:?}");
    }

    #[test]
    fn boomerang_height_never_changes() {
        let origin = Vec3::new(0.0, 5.0, 0.0);
        for i in 0..20 {
            let pos = boomerang_position(origin, i as f32 * 0.05, 1.0, 2.0);
            assert_eq!(pos.y, 5.0);
        }
    }

    #[test]
    fn boomerang_stays_on_its_circle() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        for i in 0..20 {
            let pos = boomerang_position(origin, i as f32 * 0.05, 1.0, 2.0);
            let planar = Vec2::new(pos.x - origin.x, pos.z - origin.z);
            assert!((planar.length() - 2.0).abs() < 1e-4);
        }
    }

    // ── projectile_step_system ────────────────────────────────────────────────

    #[test]
    fn arrow_travels_straight_at_arrow_speed() {
        let mut world = stepping_world();
        let mut schedule = Schedule::default();
        schedule.add_systems(projectile_step_system);

        let origin = Vec3::new(0.0, 0.5, 0.0);
        let direction = Vec3::new(1.0, 0.0, 0.0);
        let entity = spawn_projectile(&mut world, ProjectileKind::Arrow { direction }, origin);

        for _ in 0..30 {
            step_once(&mut world, &mut schedule);
        }

        let pos = world.entity(entity).get::<Transform>().unwrap().translation;
        let expected = 20.0 * 30.0 * DT;
        assert!(
            ((pos - origin).length() - expected).abs() < 1e-3,
            "expected {expected} units along +X, got {pos:?}"
        );
        assert_eq!(pos.y, origin.y);
        assert_eq!(pos.z, origin.z);
    }

    #[test]
    fn arrow_completes_exactly_once_at_lifetime() {
        let mut world = stepping_world();
        let mut schedule = Schedule::default();
        schedule.add_systems(projectile_step_system);

        let direction = Vec3::new(0.0, 0.0, -1.0);
        let entity =
            spawn_projectile(&mut world, ProjectileKind::Arrow { direction }, Vec3::ZERO);

        // Lifetime 2.0 s at 64 fps: alive through frame 127, removed on the
        // frame that carries age to exactly 2.0.
        for frame in 1..=127 {
            step_once(&mut world, &mut schedule);
            assert!(
                world.get_entity(entity).is_ok(),
                "projectile removed early at frame {frame}"
            );
            assert_eq!(world.resource::<ProjectileRegistry>().len(), 1);
        }
        step_once(&mut world, &mut schedule);
        assert!(world.get_entity(entity).is_err(), "projectile must be gone");
        assert!(world.resource::<ProjectileRegistry>().is_empty());

        // Further frames are no-ops: nothing is stepped or double-removed.
        step_once(&mut world, &mut schedule);
        assert!(world.resource::<ProjectileRegistry>().is_empty());
    }

    #[test]
    fn boomerang_removed_after_one_revolution() {
        let mut world = stepping_world();
        let mut schedule = Schedule::default();
        schedule.add_systems(projectile_step_system);

        let origin = Vec3::new(2.0, 1.0, 2.0);
        let entity = spawn_projectile(&mut world, ProjectileKind::Boomerang { origin }, origin);

        // Lifetime 1.0 s: alive through frame 63, removed on frame 64.
        for _ in 1..=63 {
            step_once(&mut world, &mut schedule);
        }
        assert!(world.get_entity(entity).is_ok());
        let pos = world.entity(entity).get::<Transform>().unwrap().translation;
        let planar = Vec2::new(pos.x - origin.x, pos.z - origin.z);
        assert!((planar.length() - 2.0).abs() < 1e-3, "off circle: {pos:?}");

        step_once(&mut world, &mut schedule);
        assert!(world.get_entity(entity).is_err());
        assert!(world.resource::<ProjectileRegistry>().is_empty());
    }

    #[test]
    fn boomerang_path_ignores_where_the_player_aimed() {
        // Two boomerangs launched from the same origin trace identical paths
        // regardless of cursor target: the kind carries no target at all.
        let origin = Vec3::new(-1.0, 2.0, 4.0);
        let a = ProjectileKind::Boomerang { origin };
        let b = ProjectileKind::Boomerang { origin };
        assert_eq!(a, b);
    }
}
