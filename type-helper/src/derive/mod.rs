//! Derivation engine
//!
//! Turns an entity's columns and associations into schema declarations:
//! - Scalar type mapping
//! - Column fields and arguments
//! - Association fields and arguments
//! - Dependency extraction

mod column;
mod declaration;
mod relation;
mod types;

use std::collections::BTreeSet;

use crate::ir::Association;

pub use column::{
    IGNORED_COLUMNS_FOR_INPUT, column_to_argument, column_to_field, scalar_columns,
};
pub use declaration::{ArgumentDeclaration, FieldDeclaration, TypeExpr};
pub use relation::{association_to_argument, association_to_field};
pub use types::{SchemaType, map_scalar_type};

pub(crate) use column::{derive_arguments as column_arguments, derive_fields as column_fields};
pub(crate) use relation::{
    derive_arguments as association_arguments, derive_fields as association_fields,
};

/// Distinct entity names referenced by an entity's associations
pub type DependencySet = BTreeSet<String>;

/// Collect the entities an entity's associations point at
///
/// Cardinality does not matter; duplicates collapse.
pub fn extract_dependencies(associations: &[Association]) -> DependencySet {
    associations
        .iter()
        .map(Association::target_entity)
        .collect()
}
