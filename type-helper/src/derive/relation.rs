//! Association derivation
//!
//! `has_many`/`has_and_belongs_to_many` become list fields and `_ids`
//! arguments; `belongs_to`/`has_one` become single fields and `_id`
//! arguments. Everything derived here is optional.

use super::declaration::{ArgumentDeclaration, FieldDeclaration, TypeExpr};
use crate::ir::{Association, Cardinality};
use crate::naming;

/// Output field for an association
pub fn association_to_field(association: &Association) -> FieldDeclaration {
    let target_type = TypeExpr::Object(naming::type_name(&association.target_entity()));
    let type_expr = match association.cardinality {
        Cardinality::Many => TypeExpr::list_of(target_type),
        Cardinality::One => target_type,
    };

    FieldDeclaration {
        name: association.name.clone(),
        type_expr,
        nullable: true,
    }
}

/// Input argument for an association
pub fn association_to_argument(association: &Association) -> ArgumentDeclaration {
    let singular = naming::singularize(&association.name);
    let (name, type_expr) = match association.cardinality {
        Cardinality::Many => (format!("{singular}_ids"), TypeExpr::list_of(TypeExpr::Id)),
        Cardinality::One => (format!("{singular}_id"), TypeExpr::Id),
    };

    ArgumentDeclaration {
        name,
        type_expr,
        required: false,
    }
}

/// Output fields for every association, in order
pub fn derive_fields(associations: &[Association]) -> Vec<FieldDeclaration> {
    associations.iter().map(association_to_field).collect()
}

/// Input arguments for every association, in order
pub fn derive_arguments(associations: &[Association]) -> Vec<ArgumentDeclaration> {
    associations.iter().map(association_to_argument).collect()
}
