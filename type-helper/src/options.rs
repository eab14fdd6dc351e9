//! Generation options
//!
//! A [`GenerationRequest`] is the unit of work; its flags travel unchanged
//! into every dependency request it spawns.

/// Which artifact groups to skip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationFlags {
    pub skip_type: bool,
    pub skip_policy: bool,
    pub skip_input: bool,
    pub skip_mutations: bool,
    pub skip_dependencies: bool,
}

impl GenerationFlags {
    /// Whether the application policy base class should be checked
    pub fn check_application_policy(&self) -> bool {
        !self.skip_policy && !self.skip_dependencies
    }

    /// Whether the operation return type should be checked
    pub fn check_operation_return_type(&self) -> bool {
        !self.skip_mutations && !self.skip_dependencies
    }
}

/// A request to generate declarations for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub entity_name: String,
    pub flags: GenerationFlags,
}

impl GenerationRequest {
    pub fn new(entity_name: impl Into<String>, flags: GenerationFlags) -> Self {
        Self {
            entity_name: entity_name.into(),
            flags,
        }
    }

    /// Request for a dependency, carrying the same flags
    pub fn for_dependency(&self, entity_name: impl Into<String>) -> Self {
        Self::new(entity_name, self.flags)
    }
}
