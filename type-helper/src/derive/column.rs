//! Column derivation
//!
//! Turns scalar columns into output fields and input arguments.
//! Foreign-key columns never reach this module: they surface only
//! through association derivation.

use super::declaration::{ArgumentDeclaration, FieldDeclaration, TypeExpr};
use super::types::map_scalar_type;
use crate::ir::Column;

/// Name of the identity column
pub const ID_COLUMN: &str = "id";

/// Server-managed columns never exposed as input arguments
pub const IGNORED_COLUMNS_FOR_INPUT: [&str; 3] = ["id", "created_at", "updated_at"];

/// Output field for a column
pub fn column_to_field(column: &Column) -> FieldDeclaration {
    if column.name == ID_COLUMN {
        return FieldDeclaration {
            name: ID_COLUMN.to_string(),
            type_expr: TypeExpr::Id,
            nullable: false,
        };
    }

    FieldDeclaration {
        name: column.name.clone(),
        type_expr: TypeExpr::Scalar(map_scalar_type(&column.scalar_type, &column.name)),
        nullable: true,
    }
}

/// Input argument for a column, if clients may set it
pub fn column_to_argument(column: &Column) -> Option<ArgumentDeclaration> {
    if IGNORED_COLUMNS_FOR_INPUT.contains(&column.name.as_str()) {
        return None;
    }

    Some(ArgumentDeclaration {
        name: column.name.clone(),
        type_expr: TypeExpr::Scalar(map_scalar_type(&column.scalar_type, &column.name)),
        required: false,
    })
}

/// Columns eligible for scalar derivation, in order
pub fn scalar_columns(columns: &[Column]) -> impl Iterator<Item = &Column> {
    columns.iter().filter(|column| !column.is_foreign_key())
}

/// Output fields for every scalar column
pub fn derive_fields(columns: &[Column]) -> Vec<FieldDeclaration> {
    scalar_columns(columns).map(column_to_field).collect()
}

/// Input arguments for every client-settable scalar column
pub fn derive_arguments(columns: &[Column]) -> Vec<ArgumentDeclaration> {
    scalar_columns(columns).filter_map(column_to_argument).collect()
}
