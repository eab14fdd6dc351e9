//! Type mapping from column scalar types to GraphQL scalar types
//!
//! Supported column types follow the Rails migration types:
//! integer, boolean, float, string, text, datetime and date.

use std::fmt;

use crate::ir::ScalarType;

/// A GraphQL scalar type as named in graphql-ruby
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Int,
    Boolean,
    Float,
    String,
    DateTime,
    Date,
    /// No scalar exists for the column type; left for the operator to fix
    Unmapped {
        /// Original column type name
        type_name: String,
        /// Column carrying the type
        column: String,
    },
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Int => f.write_str("Int"),
            SchemaType::Boolean => f.write_str("Boolean"),
            SchemaType::Float => f.write_str("Float"),
            SchemaType::String => f.write_str("String"),
            SchemaType::DateTime => f.write_str("GraphQL::Types::ISO8601DateTime"),
            SchemaType::Date => f.write_str("GraphQL::Types::ISO8601Date"),
            SchemaType::Unmapped { type_name, column } => {
                write!(f, "# not implemented: {type_name}, for attr: {column}")
            }
        }
    }
}

/// Map a column scalar type to a GraphQL scalar type
pub fn map_scalar_type(scalar_type: &ScalarType, column: &str) -> SchemaType {
    match scalar_type {
        ScalarType::Integer => SchemaType::Int,
        ScalarType::Boolean => SchemaType::Boolean,
        ScalarType::Float => SchemaType::Float,
        ScalarType::String | ScalarType::Text => SchemaType::String,
        ScalarType::Datetime => SchemaType::DateTime,
        ScalarType::Date => SchemaType::Date,
        ScalarType::Other(type_name) => {
            tracing::warn!(column, type_name = %type_name, "no GraphQL scalar for column type");
            SchemaType::Unmapped {
                type_name: type_name.clone(),
                column: column.to_string(),
            }
        }
    }
}
