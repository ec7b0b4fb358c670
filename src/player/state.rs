//! Player components and resources.
//!
//! All ECS components and Bevy resources that describe player state live here.
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`]: input, ground contact, movement
//! - [`super::projectile`]: projectile spawning and kinematics

use bevy::prelude::*;
use std::collections::HashMap;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player body entity.
#[derive(Component)]
pub struct Player;

/// Per-projectile state attached to each live projectile entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    /// Registry id allocated at spawn; unique among live projectiles.
    pub id: ProjectileId,
    /// Seconds since this projectile was spawned; monotonically increasing.
    pub age: f32,
    /// Kinematic model plus the data it was captured with at spawn.
    pub kind: ProjectileKind,
}

/// The two projectile kinds with their spawn-time kinematic inputs.
///
/// Each variant carries exactly the data its model reads:
/// - an arrow flies along a fixed direction captured at spawn, so it keeps the
///   direction, not the origin;
/// - a boomerang circles its launch point, so it keeps the origin and nothing
///   else (the aim target never influences its path).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileKind {
    Arrow {
        /// Unit vector from spawn position toward the aim target.
        direction: Vec3,
    },
    Boomerang {
        /// Centre of the circular flight path.
        origin: Vec3,
    },
}

// ── Resources ──────────────────────────────────────────────────────────────────

/// Deduplicated movement input for the current frame.
///
/// Rebuilt every frame from key pressed-state by
/// [`super::control::keyboard_to_intent_system`], which makes it idempotent
/// under key auto-repeat.  Multiple simultaneous directions are valid and
/// combine into a diagonal.  Tests can populate this directly to drive
/// movement without a real keyboard.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Two-state ground-contact machine for the player body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactState {
    /// No supporting contact; jumping is not permitted.
    #[default]
    Airborne,
    /// In contact with a surface; the next jump input is honoured.
    Grounded,
}

/// Tracks whether the player currently has a supporting contact.
///
/// Driven by collision enter/exit events polled at the start of every frame;
/// any contact counts, with no distinction between landing on a platform top
/// and bumping a wall.  Cleared optimistically by the movement system on a
/// successful jump so a held jump key cannot fire twice in one frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundContact(pub ContactState);

impl GroundContact {
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.0 == ContactState::Grounded
    }
}

/// Id assigned to each projectile at spawn.
pub type ProjectileId = u64;

/// Registry of live projectiles keyed by id.
///
/// Ids are allocated from a monotonically increasing counter, so an id is
/// never shared by two simultaneously live projectiles.  The fire system
/// inserts on spawn; the step system removes in the same tick a projectile's
/// lifetime expires.
#[derive(Resource, Default, Debug)]
pub struct ProjectileRegistry {
    live: HashMap<ProjectileId, Entity>,
    next_id: ProjectileId,
}

impl ProjectileRegistry {
    /// Allocate a fresh id for a projectile about to spawn.
    pub fn allocate_id(&mut self) -> ProjectileId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Record a newly spawned projectile entity under its id.
    pub fn insert(&mut self, id: ProjectileId, entity: Entity) {
        self.live.insert(id, entity);
    }

    /// Remove a completed projectile.  Returns its entity if it was live.
    pub fn remove(&mut self, id: ProjectileId) -> Option<Entity> {
        self.live.remove(&id)
    }

    pub fn contains(&self, id: ProjectileId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate over `(id, entity)` pairs of live projectiles.
    pub fn iter(&self) -> impl Iterator<Item = (ProjectileId, Entity)> + '_ {
        self.live.iter().map(|(id, entity)| (*id, *entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_monotonic_and_unique() {
        let mut registry = ProjectileRegistry::default();
        let a = registry.allocate_id();
        let b = registry.allocate_id();
        let c = registry.allocate_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn registry_insert_remove_roundtrip() {
        let mut registry = ProjectileRegistry::default();
        let id = registry.allocate_id();
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        registry.insert(id, entity);

        assert!(registry.contains(id));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.remove(id), Some(entity));
        assert!(registry.is_empty());
        // Removing again is a no-op.
        assert_eq!(registry.remove(id), None);
    }

    #[test]
    fn registry_iter_lists_exactly_the_live_projectiles() {
        let mut registry = ProjectileRegistry::default();
        let mut world = World::new();

        let first = (registry.allocate_id(), world.spawn_empty().id());
        let second = (registry.allocate_id(), world.spawn_empty().id());
        registry.insert(first.0, first.1);
        registry.insert(second.0, second.1);
        registry.remove(first.0);

        let live: Vec<_> = registry.iter().collect();
        assert_eq!(live, vec![second]);
    }

    #[test]
    fn ground_contact_defaults_to_airborne() {
        let contact = GroundContact::default();
        assert!(!contact.is_grounded());
    }
}
