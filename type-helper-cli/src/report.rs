//! Terminal report of derived declarations
//!
//! Prints what would go into each artifact of the project tree, so the
//! operator can review declarations before writing them.

use std::io::Write;

use type_helper::artifacts::{ArtifactKind, SupportArtifact};
use type_helper::derive::{ArgumentDeclaration, DependencySet, FieldDeclaration};
use type_helper::emit::Emitter;
use type_helper::{EmitError, GenerationFlags, ScaffoldError, naming};

use crate::project::ProjectTree;

/// Emitter writing a readable report
pub struct ReportEmitter<W> {
    out: W,
    tree: ProjectTree,
}

impl<W: Write> ReportEmitter<W> {
    pub fn new(out: W, tree: ProjectTree) -> Self {
        Self { out, tree }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, title: &str, entity: &str, kind: ArtifactKind) -> Result<(), EmitError> {
        let path = self.tree.relative_path(entity, kind);
        writeln!(self.out, "\n== {title} ({})", path.display())?;
        Ok(())
    }
}

impl<W: Write> Emitter for ReportEmitter<W> {
    fn emit_type(&mut self, entity: &str, fields: &[FieldDeclaration]) -> Result<(), EmitError> {
        let title = format!("Types::{}", naming::type_name(entity));
        self.heading(&title, entity, ArtifactKind::Type)?;
        for field in fields {
            writeln!(self.out, "  {field}")?;
        }
        Ok(())
    }

    fn emit_input(
        &mut self,
        entity: &str,
        arguments: &[ArgumentDeclaration],
    ) -> Result<(), EmitError> {
        let title = format!("Types::Inputs::{entity}Input");
        self.heading(&title, entity, ArtifactKind::Input)?;
        for argument in arguments {
            writeln!(self.out, "  {argument}")?;
        }
        Ok(())
    }

    fn emit_mutations(&mut self, entity: &str, flags: &GenerationFlags) -> Result<(), EmitError> {
        for kind in ArtifactKind::MUTATIONS {
            let path = self.tree.relative_path(entity, kind);
            writeln!(self.out, "\n== {entity} {kind} ({})", path.display())?;
        }
        if !flags.skip_policy {
            writeln!(self.out, "  authorized through {entity}Policy")?;
        }
        Ok(())
    }

    fn emit_policy(&mut self, entity: &str) -> Result<(), EmitError> {
        self.heading(&format!("{entity}Policy"), entity, ArtifactKind::Policy)?;
        writeln!(self.out, "  create? update? delete? denied until implemented")?;
        Ok(())
    }

    fn emit_placeholder(&mut self, entity: &str) -> Result<(), EmitError> {
        let title = format!("Types::{} (no model, empty)", naming::type_name(entity));
        self.heading(&title, entity, ArtifactKind::Type)
    }

    fn emit_support(&mut self, support: SupportArtifact) -> Result<(), EmitError> {
        let path = self.tree.support_relative_path(support);
        writeln!(self.out, "\n== {support} ({})", path.display())?;
        if support == SupportArtifact::ApplicationPolicy {
            let error = ScaffoldError::Unauthenticated;
            writeln!(
                self.out,
                "  rejects anonymous users with {} ({error})",
                error.code()
            )?;
        }
        Ok(())
    }

    fn report_dependencies(
        &mut self,
        _entity: &str,
        dependencies: &DependencySet,
    ) -> Result<(), EmitError> {
        let names: Vec<&str> = dependencies.iter().map(String::as_str).collect();
        writeln!(self.out, "\nFound dependencies: [{}]", names.join(", "))?;
        Ok(())
    }

    fn report_satisfied(&mut self, dependency: &str) -> Result<(), EmitError> {
        writeln!(
            self.out,
            "Mutations dependency '{dependency}' already satisfied. Run 'type-helper {dependency}' to overwrite it."
        )?;
        Ok(())
    }
}
