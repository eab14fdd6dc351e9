//! Generated artifacts and where they are looked up
//!
//! Every entity needs six artifacts: its output type, policy, input type
//! and the create/update/delete mutations. Support artifacts are shared
//! base files the generated artifacts rely on.

use std::collections::HashSet;
use std::fmt;

/// An artifact generated for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Type,
    Policy,
    Input,
    MutationCreate,
    MutationUpdate,
    MutationDelete,
}

impl ArtifactKind {
    /// Every artifact an entity needs to be satisfied
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Type,
        ArtifactKind::Policy,
        ArtifactKind::Input,
        ArtifactKind::MutationCreate,
        ArtifactKind::MutationUpdate,
        ArtifactKind::MutationDelete,
    ];

    /// The three mutation artifacts
    pub const MUTATIONS: [ArtifactKind; 3] = [
        ArtifactKind::MutationCreate,
        ArtifactKind::MutationUpdate,
        ArtifactKind::MutationDelete,
    ];
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::Type => "type",
            ArtifactKind::Policy => "policy",
            ArtifactKind::Input => "input",
            ArtifactKind::MutationCreate => "create mutation",
            ArtifactKind::MutationUpdate => "update mutation",
            ArtifactKind::MutationDelete => "delete mutation",
        };
        f.write_str(label)
    }
}

/// A project-wide base file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportArtifact {
    /// Base class of generated policies; rejects unauthenticated users
    ApplicationPolicy,
    /// Return type of generated delete mutations
    OperationReturnType,
}

impl SupportArtifact {
    /// Prompt shown when the support artifact is missing
    pub fn prompt(&self) -> &'static str {
        match self {
            SupportArtifact::ApplicationPolicy => {
                "The generated policies are based on the base class ApplicationPolicy and it seems you don't have it in your project. Do you want to generate it?"
            }
            SupportArtifact::OperationReturnType => {
                "The generated delete mutations are based on the class OperationReturnType and it seems you don't have it in your project. Do you want to generate it?"
            }
        }
    }
}

impl fmt::Display for SupportArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportArtifact::ApplicationPolicy => f.write_str("ApplicationPolicy"),
            SupportArtifact::OperationReturnType => f.write_str("OperationReturnType"),
        }
    }
}

/// Existence checks against generated artifacts
pub trait ArtifactStore {
    /// Whether an entity's artifact already exists
    fn exists(&self, entity: &str, kind: ArtifactKind) -> bool;

    /// Whether a support artifact already exists
    fn support_exists(&self, support: SupportArtifact) -> bool;

    /// Required artifacts the entity is missing, in [`ArtifactKind::ALL`] order
    fn missing(&self, entity: &str) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| !self.exists(entity, *kind))
            .collect()
    }
}

/// Artifact store held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    artifacts: HashSet<(String, ArtifactKind)>,
    support: HashSet<SupportArtifact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an artifact
    pub fn insert(&mut self, entity: &str, kind: ArtifactKind) {
        self.artifacts.insert((entity.to_string(), kind));
    }

    /// Record every required artifact of an entity
    pub fn insert_all(&mut self, entity: &str) {
        for kind in ArtifactKind::ALL {
            self.insert(entity, kind);
        }
    }

    /// Forget an artifact
    pub fn remove(&mut self, entity: &str, kind: ArtifactKind) {
        self.artifacts.remove(&(entity.to_string(), kind));
    }

    /// Record a support artifact
    pub fn insert_support(&mut self, support: SupportArtifact) {
        self.support.insert(support);
    }
}

impl ArtifactStore for MemoryStore {
    fn exists(&self, entity: &str, kind: ArtifactKind) -> bool {
        self.artifacts.contains(&(entity.to_string(), kind))
    }

    fn support_exists(&self, support: SupportArtifact) -> bool {
        self.support.contains(&support)
    }
}
