//! Scene management

mod light;

pub use light::*;

use std::collections::HashSet;

use bevy_ecs::entity::Entity;

/// The set of entities currently visible to the renderer.
///
/// Membership is driven exclusively by the sandbox's reconciliation logic;
/// adding an entity that is already present, or removing one that is not,
/// indicates a bookkeeping bug upstream.
#[derive(Debug, Default)]
pub struct Scene {
    entities: HashSet<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the scene. Must not already be present.
    pub fn add_entity(&mut self, entity: Entity) {
        let inserted = self.entities.insert(entity);
        debug_assert!(inserted, "entity {entity:?} added to scene twice");
        log::debug!("scene: added entity {entity:?}");
    }

    /// Remove an entity from the scene. Must be present.
    pub fn remove_entity(&mut self, entity: Entity) {
        let removed = self.entities.remove(&entity);
        debug_assert!(removed, "entity {entity:?} removed from scene twice");
        log::debug!("scene: removed entity {entity:?}");
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
