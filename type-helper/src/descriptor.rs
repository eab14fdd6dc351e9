//! Model descriptors
//!
//! A descriptor resolves an entity name to its columns and associations.
//! It is passed into the generator explicitly rather than looked up globally.

use std::collections::HashMap;

use crate::error::ModelError;
use crate::ir::{Association, Column, Entity};

/// Source of entity definitions
pub trait ModelDescriptor {
    /// Ordered columns of an entity
    fn columns(&self, entity: &str) -> Result<Vec<Column>, ModelError>;

    /// Ordered associations of an entity
    fn associations(&self, entity: &str) -> Result<Vec<Association>, ModelError>;

    /// The whole entity
    fn entity(&self, entity: &str) -> Result<Entity, ModelError> {
        Ok(Entity {
            name: entity.to_string(),
            columns: self.columns(entity)?,
            associations: self.associations(entity)?,
        })
    }
}

/// Descriptor over entities held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryDescriptor {
    entities: HashMap<String, Entity>,
}

impl MemoryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity, replacing any entity of the same name
    pub fn insert(&mut self, entity: Entity) {
        self.entities.insert(entity.name.clone(), entity);
    }

    /// Builder form of [`MemoryDescriptor::insert`]
    pub fn with(mut self, entity: Entity) -> Self {
        self.insert(entity);
        self
    }

    fn get(&self, entity: &str) -> Result<&Entity, ModelError> {
        self.entities
            .get(entity)
            .ok_or_else(|| ModelError::NotFound(entity.to_string()))
    }
}

impl ModelDescriptor for MemoryDescriptor {
    fn columns(&self, entity: &str) -> Result<Vec<Column>, ModelError> {
        Ok(self.get(entity)?.columns.clone())
    }

    fn associations(&self, entity: &str) -> Result<Vec<Association>, ModelError> {
        Ok(self.get(entity)?.associations.clone())
    }

    fn entity(&self, entity: &str) -> Result<Entity, ModelError> {
        self.get(entity).cloned()
    }
}
