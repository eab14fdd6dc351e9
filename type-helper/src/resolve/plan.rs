//! Dependency decisions
//!
//! Works out what needs resolving and why, without asking anyone.

use std::collections::HashSet;

use crate::artifacts::{ArtifactKind, ArtifactStore, SupportArtifact};
use crate::derive::DependencySet;
use crate::options::GenerationFlags;

/// State of a dependency before the operator is involved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Already generated earlier in this run
    AlreadyVisited,
    /// Every required artifact exists
    Satisfied,
    /// Some required artifacts are missing
    Unresolved { missing: Vec<ArtifactKind> },
}

/// A dependency and its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPlan {
    pub dependency: String,
    pub status: DependencyStatus,
}

/// Probe the store for one dependency
pub fn assess<S>(dependency: &str, store: &S) -> DependencyStatus
where
    S: ArtifactStore + ?Sized,
{
    let missing = store.missing(dependency);
    if missing.is_empty() {
        DependencyStatus::Satisfied
    } else {
        DependencyStatus::Unresolved { missing }
    }
}

/// Status of a dependency given the entities already visited in this run
pub fn classify<S>(dependency: &str, store: &S, visited: &HashSet<String>) -> DependencyStatus
where
    S: ArtifactStore + ?Sized,
{
    if visited.contains(dependency) {
        DependencyStatus::AlreadyVisited
    } else {
        assess(dependency, store)
    }
}

/// Status of every dependency, in set order
pub fn plan_dependencies<S>(
    dependencies: &DependencySet,
    store: &S,
    visited: &HashSet<String>,
) -> Vec<DependencyPlan>
where
    S: ArtifactStore + ?Sized,
{
    dependencies
        .iter()
        .map(|dependency| DependencyPlan {
            dependency: dependency.clone(),
            status: classify(dependency, store, visited),
        })
        .collect()
}

/// Support artifacts to offer: those the flags call for and the store lacks
pub fn missing_support<S>(flags: &GenerationFlags, store: &S) -> Vec<SupportArtifact>
where
    S: ArtifactStore + ?Sized,
{
    let mut wanted = Vec::new();
    if flags.check_application_policy() {
        wanted.push(SupportArtifact::ApplicationPolicy);
    }
    if flags.check_operation_return_type() {
        wanted.push(SupportArtifact::OperationReturnType);
    }
    wanted.retain(|support| !store.support_exists(*support));
    wanted
}

/// Question asked before generating an unresolved dependency
pub fn unresolved_prompt(dependency: &str) -> String {
    format!("Found unresolved dependency for: {dependency}. Do you want to generate it?")
}

/// Question asked when an entity has no model
pub fn missing_model_prompt(entity: &str) -> String {
    format!("Model implementation for class: '{entity}' not found! Generate empty type anyway?")
}
