//! Intermediate Representation (IR) of a relational model
//!
//! The IR is what a model descriptor hands to the derivation engine:
//! one entity with its ordered columns and ordered associations.

use crate::naming;

/// Suffix marking a column as a foreign key
pub const FOREIGN_KEY_SUFFIX: &str = "_id";

/// A relational model (table/class)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity class name (e.g., "Post")
    pub name: String,

    /// Columns, in declaration order
    pub columns: Vec<Column>,

    /// Associations to other entities, in declaration order
    pub associations: Vec<Association>,
}

impl Entity {
    /// Create an entity without columns or associations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            associations: Vec::new(),
        }
    }

    /// Append a column
    pub fn column(mut self, name: impl Into<String>, scalar_type: ScalarType) -> Self {
        self.columns.push(Column::new(name, scalar_type));
        self
    }

    /// Append an association
    pub fn association(mut self, association: Association) -> Self {
        self.associations.push(association);
        self
    }
}

/// A column in an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (snake_case)
    pub name: String,

    /// Column scalar type
    pub scalar_type: ScalarType,
}

impl Column {
    /// Create a column
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            scalar_type,
        }
    }

    /// Whether the column references another entity by key
    pub fn is_foreign_key(&self) -> bool {
        self.name.ends_with(FOREIGN_KEY_SUFFIX)
    }
}

/// Column scalar types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Integer,
    Boolean,
    Float,
    String,
    Text,
    Datetime,
    Date,
    /// Any type the mapper has no schema scalar for
    Other(String),
}

impl ScalarType {
    /// Parse a column type name as reported by the model layer
    ///
    /// `bigint` and `primary_key` are reported as integers by ActiveRecord,
    /// so they normalize to [`ScalarType::Integer`].
    pub fn parse(type_name: &str) -> Self {
        match type_name {
            "integer" | "bigint" | "primary_key" => ScalarType::Integer,
            "boolean" => ScalarType::Boolean,
            "float" => ScalarType::Float,
            "string" => ScalarType::String,
            "text" => ScalarType::Text,
            "datetime" => ScalarType::Datetime,
            "date" => ScalarType::Date,
            other => ScalarType::Other(other.to_string()),
        }
    }
}

/// An association to another entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    /// Association name (e.g., "comments", "author")
    pub name: String,

    /// One or many
    pub cardinality: Cardinality,

    /// Explicit target class override (`class_name:`)
    pub class_name: Option<String>,
}

impl Association {
    /// A one-cardinality association
    pub fn one(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinality: Cardinality::One,
            class_name: None,
        }
    }

    /// A many-cardinality association
    pub fn many(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinality: Cardinality::Many,
            class_name: None,
        }
    }

    /// Override the target class
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Name of the referenced entity
    ///
    /// The explicit override wins; otherwise the association name is
    /// singularized and camelized (`comments` → `Comment`).
    pub fn target_entity(&self) -> String {
        match &self.class_name {
            Some(class_name) => class_name.clone(),
            None => naming::class_name(&self.name),
        }
    }
}

/// Association cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

impl Cardinality {
    /// Cardinality of an ActiveRecord association macro
    pub fn from_macro(macro_name: &str) -> Option<Self> {
        match macro_name {
            "belongs_to" | "has_one" => Some(Cardinality::One),
            "has_many" | "has_and_belongs_to_many" => Some(Cardinality::Many),
            _ => None,
        }
    }
}
