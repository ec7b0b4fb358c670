//! Level layouts, construction, and the spawn-window timer.
//!
//! A level is static geometry (platforms plus spawner/portal markers) built
//! from [`LevelCatalog`], paired with [`LevelTimer`], the 1 Hz countdown that
//! gates whether hostile spawning is permitted.  Advancing a level tears the
//! old geometry down, rebuilds from the catalog, and resets the timer in one
//! atomic step; a level id missing from the catalog is a hard
//! [`GameError::UnknownLevel`] rather than a silent empty world.

use crate::config::TuningConfig;
use crate::constants::SPAWN_WINDOW_SECS;
use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

// ── Level timer ───────────────────────────────────────────────────────────────

/// Countdown state machine for the hostile spawn window.
///
/// While `spawning` is true the countdown runs on a fixed 1 Hz clock;
/// `spawning` flips false exactly when `remaining_secs` reaches zero and stays
/// false until an explicit level advance.  `remaining_secs` never goes
/// negative.  This resource is the only gate the (external) hostile-spawning
/// system and the HUD read.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct LevelTimer {
    /// Whole seconds left in the current spawn window.
    pub remaining_secs: u32,
    /// Whether hostile spawning is currently permitted.
    pub spawning: bool,
    /// 1-indexed current level.
    pub current_level: u32,
}

impl Default for LevelTimer {
    fn default() -> Self {
        Self {
            remaining_secs: SPAWN_WINDOW_SECS,
            spawning: true,
            current_level: 1,
        }
    }
}

impl LevelTimer {
    /// One 1 Hz tick: decrement while the window is open, close it on zero.
    pub fn tick(&mut self) {
        if !self.spawning {
            return;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            if self.remaining_secs == 0 {
                self.spawning = false;
            }
        }
    }

    /// Level advance: bump the level, reopen the window at `window_secs`.
    pub fn advance(&mut self, window_secs: u32) {
        self.current_level += 1;
        self.remaining_secs = window_secs;
        self.spawning = true;
    }

    #[inline]
    pub fn is_spawning(&self) -> bool {
        self.spawning
    }

    #[inline]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }
}

/// External request to move to the next level.
///
/// Written by the level-complete UI path; consumed by
/// [`advance_level_system`], which performs the timer reset and the geometry
/// rebuild together.
#[derive(Message, Debug, Clone, Copy)]
pub struct AdvanceLevel;

// ── Level catalog ─────────────────────────────────────────────────────────────

/// One axis-aligned platform: a fixed cuboid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformDef {
    /// Centre of the cuboid.
    pub position: Vec3,
    /// Full extents along each axis.
    pub scale: Vec3,
}

/// Static geometry description for one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub platforms: Vec<PlatformDef>,
    /// Where the hostile spawner marker sits.
    pub spawner_position: Vec3,
    /// Where the exit portal marker sits.
    pub portal_position: Vec3,
}

/// All defined level layouts, keyed by 1-indexed level id.
#[derive(Resource, Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelLayout>,
}

impl LevelCatalog {
    /// Look up the layout for `level`, or fail with [`GameError::UnknownLevel`].
    pub fn layout(&self, level: u32) -> GameResult<&LevelLayout> {
        let index = level.checked_sub(1).map(|i| i as usize);
        index
            .and_then(|i| self.levels.get(i))
            .ok_or(GameError::UnknownLevel {
                level,
                highest: self.levels.len() as u32,
            })
    }

    /// Highest level id with a defined layout.
    pub fn highest_level(&self) -> u32 {
        self.levels.len() as u32
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelLayout {
                    platforms: vec![
                        PlatformDef {
                            position: Vec3::new(0.0, 0.0, 0.0),
                            scale: Vec3::new(20.0, 1.0, 20.0),
                        },
                        PlatformDef {
                            position: Vec3::new(-8.0, 1.0, -8.0),
                            scale: Vec3::new(4.0, 0.5, 4.0),
                        },
                        PlatformDef {
                            position: Vec3::new(8.0, 1.0, 8.0),
                            scale: Vec3::new(4.0, 0.5, 4.0),
                        },
                    ],
                    spawner_position: Vec3::new(-8.0, 2.0, -8.0),
                    portal_position: Vec3::new(8.0, 2.0, 8.0),
                },
                LevelLayout {
                    platforms: vec![
                        PlatformDef {
                            position: Vec3::new(0.0, 0.0, 0.0),
                            scale: Vec3::new(30.0, 1.0, 30.0),
                        },
                        PlatformDef {
                            position: Vec3::new(-12.0, 1.0, -12.0),
                            scale: Vec3::new(6.0, 0.5, 6.0),
                        },
                        PlatformDef {
                            position: Vec3::new(12.0, 1.0, 12.0),
                            scale: Vec3::new(6.0, 0.5, 6.0),
                        },
                        PlatformDef {
                            position: Vec3::new(0.0, 2.0, 0.0),
                            scale: Vec3::new(4.0, 0.5, 4.0),
                        },
                    ],
                    spawner_position: Vec3::new(-12.0, 2.0, -12.0),
                    portal_position: Vec3::new(12.0, 2.0, 12.0),
                },
            ],
        }
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

/// Marker for every entity belonging to the current level's geometry, so an
/// advance can tear the whole level down in one query.
#[derive(Component)]
pub struct LevelGeometry;

fn build_level(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layout: &LevelLayout,
) {
    let platform_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.39, 0.58, 0.93),
        ..default()
    });

    for platform in &layout.platforms {
        commands.spawn((
            LevelGeometry,
            RigidBody::Fixed,
            Collider::cuboid(
                platform.scale.x / 2.0,
                platform.scale.y / 2.0,
                platform.scale.z / 2.0,
            ),
            Transform::from_translation(platform.position),
            Visibility::default(),
            Mesh3d(meshes.add(Cuboid::new(
                platform.scale.x,
                platform.scale.y,
                platform.scale.z,
            ))),
            MeshMaterial3d(platform_material.clone()),
        ));
    }

    // Spawner and portal are cosmetic markers: no colliders, no behavior here.
    commands.spawn((
        LevelGeometry,
        Transform::from_translation(layout.spawner_position),
        Visibility::default(),
        Mesh3d(meshes.add(Sphere::new(0.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.85, 0.15, 0.15),
            ..default()
        })),
    ));
    commands.spawn((
        LevelGeometry,
        Transform::from_translation(layout.portal_position),
        Visibility::default(),
        Mesh3d(meshes.add(Torus {
            minor_radius: 0.2,
            major_radius: 1.0,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.2, 0.8),
            emissive: LinearRgba::new(0.27, 0.1, 0.4, 1.0),
            ..default()
        })),
    ));
}

/// Startup system: build the geometry for the starting level.
///
/// Fallible: a starting level with no catalog entry halts construction with a
/// reported [`GameError::UnknownLevel`] instead of leaving an empty world.
pub fn spawn_level(
    mut commands: Commands,
    catalog: Res<LevelCatalog>,
    timer: Res<LevelTimer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) -> Result {
    let layout = catalog.layout(timer.current_level)?;
    build_level(&mut commands, &mut meshes, &mut materials, layout);
    info!(
        "level {} built: {} platforms",
        timer.current_level,
        layout.platforms.len()
    );
    Ok(())
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// 1 Hz countdown tick.  The only writer of [`LevelTimer`] on the slow clock.
pub fn level_timer_system(mut timer: ResMut<LevelTimer>) {
    timer.tick();
}

/// Translate the player's "next level" input into an [`AdvanceLevel`] message.
///
/// Enter advances to the next level, but only once the spawn window has
/// closed; presses during an open window are ignored.
pub fn level_advance_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    timer: Res<LevelTimer>,
    mut writer: MessageWriter<AdvanceLevel>,
) {
    if keys.just_pressed(KeyCode::Enter) && !timer.is_spawning() {
        writer.write(AdvanceLevel);
    }
}

/// Apply a pending [`AdvanceLevel`]: validate the next level against the
/// catalog, then atomically bump the timer state, tear down the old geometry,
/// and build the new layout.
///
/// Validation happens before any mutation, so an advance past the last
/// defined level fails with [`GameError::UnknownLevel`] and leaves the current
/// level fully intact.
#[allow(clippy::too_many_arguments)]
pub fn advance_level_system(
    mut messages: MessageReader<AdvanceLevel>,
    mut commands: Commands,
    mut timer: ResMut<LevelTimer>,
    catalog: Res<LevelCatalog>,
    config: Res<TuningConfig>,
    q_geometry: Query<Entity, With<LevelGeometry>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) -> Result {
    if messages.is_empty() {
        return Ok(());
    }
    // Multiple requests in one frame collapse into a single advance.
    messages.clear();

    let next_level = timer.current_level + 1;
    let layout = catalog.layout(next_level)?;

    timer.advance(config.spawn_window_secs);
    for entity in &q_geometry {
        commands.entity(entity).despawn();
    }
    build_level(&mut commands, &mut meshes, &mut materials, layout);
    info!(
        "advanced to level {}; spawn window reset to {}s",
        timer.current_level, timer.remaining_secs
    );
    Ok(())
}

/// Level timer and construction, on their two clocks: the countdown ticks on
/// a fixed 1 s schedule, advance handling runs on the frame clock.
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelTimer>()
            .init_resource::<LevelCatalog>()
            .add_message::<AdvanceLevel>()
            .add_systems(
                Update,
                level_timer_system.run_if(on_timer(Duration::from_secs(1))),
            )
            .add_systems(
                Update,
                (level_advance_input_system, advance_level_system).chain(),
            );
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── LevelTimer ────────────────────────────────────────────────────────────

    #[test]
    fn window_closes_exactly_at_zero() {
        let mut timer = LevelTimer::default();
        assert!(timer.is_spawning());

        for tick in 1..=59 {
            timer.tick();
            assert!(timer.is_spawning(), "window closed early at tick {tick}");
            assert_eq!(timer.remaining_secs(), 60 - tick);
        }

        timer.tick();
        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.is_spawning());
    }

    #[test]
    fn closed_window_never_goes_negative() {
        let mut timer = LevelTimer {
            remaining_secs: 0,
            spawning: false,
            current_level: 1,
        };
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.is_spawning());
    }

    #[test]
    fn advance_reopens_the_window_and_bumps_the_level() {
        let mut timer = LevelTimer {
            remaining_secs: 0,
            spawning: false,
            current_level: 1,
        };
        timer.advance(60);
        assert_eq!(
            timer,
            LevelTimer {
                remaining_secs: 60,
                spawning: true,
                current_level: 2,
            }
        );
    }

    // ── LevelCatalog ──────────────────────────────────────────────────────────

    #[test]
    fn catalog_defines_the_first_two_levels() {
        let catalog = LevelCatalog::default();
        let one = catalog.layout(1).expect("level 1 must exist");
        let two = catalog.layout(2).expect("level 2 must exist");
        assert_eq!(one.platforms.len(), 3);
        assert_eq!(two.platforms.len(), 4);
    }

    #[test]
    fn missing_levels_are_explicit_errors() {
        let catalog = LevelCatalog::default();
        assert_eq!(
            catalog.layout(3),
            Err(GameError::UnknownLevel {
                level: 3,
                highest: 2
            })
        );
        assert_eq!(
            catalog.layout(0),
            Err(GameError::UnknownLevel {
                level: 0,
                highest: 2
            })
        );
    }
}
