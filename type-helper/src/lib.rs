//! type-helper
//!
//! Derives GraphQL declarations from relational models:
//! - Output type fields and input type arguments for an entity
//! - The set of entities its associations depend on
//! - Resolution of those dependencies against already generated artifacts
//!
//! Models, artifacts, prompts and emission are collaborators passed in as
//! traits, so the same engine serves a Rails project on disk or an
//! in-memory fixture.

pub mod artifacts;
pub mod derive;
pub mod descriptor;
pub mod emit;
mod error;
pub mod helper;
pub mod interaction;
pub mod ir;
pub mod naming;
pub mod options;
pub mod resolve;

pub use error::{EmitError, GeneratorError, InteractionError, ModelError, ScaffoldError};
pub use helper::ModelHelper;
pub use options::{GenerationFlags, GenerationRequest};
pub use resolve::Generator;
