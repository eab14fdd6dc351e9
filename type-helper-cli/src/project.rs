//! Project tree layout
//!
//! Knows where a Rails project keeps generated GraphQL artifacts and
//! probes them on disk.

use std::path::{Path, PathBuf};

use type_helper::artifacts::{ArtifactKind, ArtifactStore, SupportArtifact};
use type_helper::naming;

/// A Rails project on disk
#[derive(Debug, Clone)]
pub struct ProjectTree {
    root: PathBuf,
}

impl ProjectTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of an entity's artifact, relative to the project root
    pub fn relative_path(&self, entity: &str, kind: ArtifactKind) -> PathBuf {
        let file = naming::file_name(entity);
        let path = match kind {
            ArtifactKind::Type => format!("app/graphql/types/{file}_type.rb"),
            ArtifactKind::Policy => format!("app/policies/{file}_policy.rb"),
            ArtifactKind::Input => format!("app/graphql/types/inputs/{file}_input.rb"),
            ArtifactKind::MutationCreate => {
                format!("app/graphql/mutations/{file}_mutations/{file}_create.rb")
            }
            ArtifactKind::MutationUpdate => {
                format!("app/graphql/mutations/{file}_mutations/{file}_update.rb")
            }
            ArtifactKind::MutationDelete => {
                format!("app/graphql/mutations/{file}_mutations/{file}_delete.rb")
            }
        };
        PathBuf::from(path)
    }

    /// Path of a support artifact, relative to the project root
    pub fn support_relative_path(&self, support: SupportArtifact) -> &'static Path {
        match support {
            SupportArtifact::ApplicationPolicy => Path::new("app/policies/application_policy.rb"),
            SupportArtifact::OperationReturnType => {
                Path::new("app/graphql/types/operation_return_type.rb")
            }
        }
    }
}

impl ArtifactStore for ProjectTree {
    fn exists(&self, entity: &str, kind: ArtifactKind) -> bool {
        let path = self.root.join(self.relative_path(entity, kind));
        let exists = path.exists();
        tracing::debug!(path = %path.display(), exists, "probed artifact");
        exists
    }

    fn support_exists(&self, support: SupportArtifact) -> bool {
        self.root.join(self.support_relative_path(support)).exists()
    }
}
