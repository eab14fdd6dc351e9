//! Derivation facade over one entity
//!
//! Each accessor is computed on first use and cached for the lifetime of
//! the helper.

use once_cell::unsync::OnceCell;

use crate::derive::{
    self, ArgumentDeclaration, DependencySet, FieldDeclaration, association_arguments,
    association_fields, column_arguments, column_fields,
};
use crate::ir::Entity;

/// Derived declarations for a single entity
#[derive(Debug)]
pub struct ModelHelper<'a> {
    entity: &'a Entity,
    fields: OnceCell<Vec<FieldDeclaration>>,
    arguments: OnceCell<Vec<ArgumentDeclaration>>,
    dependencies: OnceCell<DependencySet>,
}

impl<'a> ModelHelper<'a> {
    pub fn new(entity: &'a Entity) -> Self {
        Self {
            entity,
            fields: OnceCell::new(),
            arguments: OnceCell::new(),
            dependencies: OnceCell::new(),
        }
    }

    /// The entity being derived
    pub fn entity(&self) -> &'a Entity {
        self.entity
    }

    /// Output fields: scalar columns first, then associations
    pub fn fields(&self) -> &[FieldDeclaration] {
        self.fields.get_or_init(|| {
            let mut fields = column_fields(&self.entity.columns);
            fields.extend(association_fields(&self.entity.associations));
            tracing::debug!(entity = %self.entity.name, count = fields.len(), "derived fields");
            fields
        })
    }

    /// Input arguments: client-settable columns first, then associations
    pub fn arguments(&self) -> &[ArgumentDeclaration] {
        self.arguments.get_or_init(|| {
            let mut arguments = column_arguments(&self.entity.columns);
            arguments.extend(association_arguments(&self.entity.associations));
            tracing::debug!(entity = %self.entity.name, count = arguments.len(), "derived arguments");
            arguments
        })
    }

    /// Entities referenced by associations
    pub fn dependencies(&self) -> &DependencySet {
        self.dependencies
            .get_or_init(|| derive::extract_dependencies(&self.entity.associations))
    }
}
