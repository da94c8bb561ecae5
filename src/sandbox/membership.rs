//! Reconciles light enable intents against actual scene attachment

use bevy_ecs::entity::Entity;

use crate::scene::Scene;

/// Per-light attachment bookkeeping.
///
/// Tracks whether the light entity is currently in the scene and issues a
/// single add or remove only when the enabled intent flips. The flag held
/// here is the sole source of truth; the scene is never queried. Starts
/// detached; the initial attach of an enabled light goes through
/// [`reconcile`](Self::reconcile) like every later transition.
#[derive(Debug)]
pub struct LightMembership {
    entity: Entity,
    attached: bool,
}

impl LightMembership {
    /// A controller for a light that is not yet in the scene
    pub fn detached(entity: Entity) -> Self {
        Self {
            entity,
            attached: false,
        }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Converge scene attachment to the enabled intent.
    ///
    /// Exactly one add fires on false→true and one remove on true→false;
    /// calling every frame with an unchanged intent does nothing.
    pub fn reconcile(&mut self, enabled: bool, scene: &mut Scene) {
        if enabled && !self.attached {
            scene.add_entity(self.entity);
            self.attached = true;
        } else if !enabled && self.attached {
            scene.remove_entity(self.entity);
            self.attached = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    fn spawn_light() -> (World, Entity) {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        (world, entity)
    }

    #[test]
    fn starts_detached() {
        let (_world, entity) = spawn_light();
        let membership = LightMembership::detached(entity);
        assert!(!membership.is_attached());
    }

    #[test]
    fn attaches_once_on_enable() {
        let (_world, entity) = spawn_light();
        let mut scene = Scene::new();
        let mut membership = LightMembership::detached(entity);

        membership.reconcile(true, &mut scene);
        assert!(membership.is_attached());
        assert!(scene.contains(entity));

        // Steady-state frames are no-ops; a second add would trip the
        // scene's double-add assertion.
        membership.reconcile(true, &mut scene);
        membership.reconcile(true, &mut scene);
        assert_eq!(scene.entity_count(), 1);
    }

    #[test]
    fn toggle_off_then_on() {
        let (_world, entity) = spawn_light();
        let mut scene = Scene::new();
        let mut membership = LightMembership::detached(entity);

        membership.reconcile(true, &mut scene);
        membership.reconcile(false, &mut scene);
        assert!(!membership.is_attached());
        assert!(!scene.contains(entity));

        membership.reconcile(false, &mut scene);
        assert_eq!(scene.entity_count(), 0);

        membership.reconcile(true, &mut scene);
        assert!(membership.is_attached());
        assert!(scene.contains(entity));
    }

    #[test]
    fn disabled_light_never_touches_scene() {
        let (_world, entity) = spawn_light();
        let mut scene = Scene::new();
        let mut membership = LightMembership::detached(entity);

        for _ in 0..3 {
            membership.reconcile(false, &mut scene);
        }
        assert!(!membership.is_attached());
        assert_eq!(scene.entity_count(), 0);
    }
}
