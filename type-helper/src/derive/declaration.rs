//! Derived schema declarations
//!
//! Output types are built from [`FieldDeclaration`]s and input types from
//! [`ArgumentDeclaration`]s. Both render in graphql-ruby declaration form.

use std::fmt;

use super::types::SchemaType;

/// Type expression of a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// The identity scalar
    Id,
    /// A mapped scalar
    Scalar(SchemaType),
    /// A reference to another output type (e.g., "CommentType")
    Object(String),
    /// A list of the inner type
    List(Box<TypeExpr>),
}

impl TypeExpr {
    /// List of the given type
    pub fn list_of(inner: TypeExpr) -> Self {
        TypeExpr::List(Box::new(inner))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Id => f.write_str("ID"),
            TypeExpr::Scalar(scalar) => write!(f, "{scalar}"),
            TypeExpr::Object(name) => f.write_str(name),
            TypeExpr::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

/// A member of an output type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub type_expr: TypeExpr,
    pub nullable: bool,
}

impl fmt::Display for FieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field :{}, {}, null: {}",
            self.name, self.type_expr, self.nullable
        )
    }
}

/// A member of an input type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDeclaration {
    pub name: String,
    pub type_expr: TypeExpr,
    pub required: bool,
}

impl fmt::Display for ArgumentDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "argument :{}, {}, required: {}",
            self.name, self.type_expr, self.required
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_field() {
        let field = FieldDeclaration {
            name: "comments".to_string(),
            type_expr: TypeExpr::list_of(TypeExpr::Object("CommentType".to_string())),
            nullable: true,
        };
        assert_eq!(field.to_string(), "field :comments, [CommentType], null: true");
    }

    #[test]
    fn test_render_argument() {
        let argument = ArgumentDeclaration {
            name: "title".to_string(),
            type_expr: TypeExpr::Scalar(SchemaType::String),
            required: false,
        };
        assert_eq!(
            argument.to_string(),
            "argument :title, String, required: false"
        );
    }

    #[test]
    fn test_render_id_list() {
        assert_eq!(TypeExpr::list_of(TypeExpr::Id).to_string(), "[ID]");
    }
}
