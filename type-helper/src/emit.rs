//! Emission of derived declarations
//!
//! Each emitter decides how derived declarations reach the project:
//! printing them, writing files, or recording them for inspection.

use crate::artifacts::SupportArtifact;
use crate::derive::{ArgumentDeclaration, DependencySet, FieldDeclaration};
use crate::error::EmitError;
use crate::options::GenerationFlags;

/// A sink for derived declarations
pub trait Emitter {
    /// Emit the output type of an entity
    fn emit_type(&mut self, _entity: &str, _fields: &[FieldDeclaration]) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit the input type of an entity
    fn emit_input(
        &mut self,
        _entity: &str,
        _arguments: &[ArgumentDeclaration],
    ) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit create/update/delete mutations
    ///
    /// Authorization is part of the mutations unless `flags.skip_policy`.
    fn emit_mutations(&mut self, _entity: &str, _flags: &GenerationFlags) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit the policy of an entity
    fn emit_policy(&mut self, _entity: &str) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit an empty output type for an entity without a model
    fn emit_placeholder(&mut self, _entity: &str) -> Result<(), EmitError> {
        Ok(())
    }

    /// Emit a support artifact
    fn emit_support(&mut self, _support: SupportArtifact) -> Result<(), EmitError> {
        Ok(())
    }

    /// Report the dependencies found for an entity
    fn report_dependencies(
        &mut self,
        _entity: &str,
        _dependencies: &DependencySet,
    ) -> Result<(), EmitError> {
        Ok(())
    }

    /// Report a dependency whose artifacts all exist
    fn report_satisfied(&mut self, _dependency: &str) -> Result<(), EmitError> {
        Ok(())
    }
}

/// Something an emitter was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Type { entity: String, fields: Vec<String> },
    Input { entity: String, arguments: Vec<String> },
    Mutations { entity: String, authorized: bool },
    Policy { entity: String },
    Placeholder { entity: String },
    Support(SupportArtifact),
    Dependencies { entity: String, dependencies: Vec<String> },
    Satisfied { dependency: String },
}

/// Emitter that records every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingEmitter {
    pub emitted: Vec<Emitted>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities an output type was emitted for, in order
    pub fn typed_entities(&self) -> Vec<&str> {
        self.emitted
            .iter()
            .filter_map(|emitted| match emitted {
                Emitted::Type { entity, .. } => Some(entity.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Emitter for RecordingEmitter {
    fn emit_type(&mut self, entity: &str, fields: &[FieldDeclaration]) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Type {
            entity: entity.to_string(),
            fields: fields.iter().map(ToString::to_string).collect(),
        });
        Ok(())
    }

    fn emit_input(
        &mut self,
        entity: &str,
        arguments: &[ArgumentDeclaration],
    ) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Input {
            entity: entity.to_string(),
            arguments: arguments.iter().map(ToString::to_string).collect(),
        });
        Ok(())
    }

    fn emit_mutations(&mut self, entity: &str, flags: &GenerationFlags) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Mutations {
            entity: entity.to_string(),
            authorized: !flags.skip_policy,
        });
        Ok(())
    }

    fn emit_policy(&mut self, entity: &str) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Policy {
            entity: entity.to_string(),
        });
        Ok(())
    }

    fn emit_placeholder(&mut self, entity: &str) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Placeholder {
            entity: entity.to_string(),
        });
        Ok(())
    }

    fn emit_support(&mut self, support: SupportArtifact) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Support(support));
        Ok(())
    }

    fn report_dependencies(
        &mut self,
        entity: &str,
        dependencies: &DependencySet,
    ) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Dependencies {
            entity: entity.to_string(),
            dependencies: dependencies.iter().cloned().collect(),
        });
        Ok(())
    }

    fn report_satisfied(&mut self, dependency: &str) -> Result<(), EmitError> {
        self.emitted.push(Emitted::Satisfied {
            dependency: dependency.to_string(),
        });
        Ok(())
    }
}
