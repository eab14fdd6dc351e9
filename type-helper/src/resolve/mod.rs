//! Dependency resolution
//!
//! Split into a pure decision layer ([`plan`]) and the [`Generator`] that
//! asks the operator and acts on the answers.

mod generator;
pub mod plan;

pub use generator::{
    DependencyOutcome, GenerationReport, Generator, RequestOutcome, RequestReport, SupportOutcome,
};
pub use plan::{DependencyPlan, DependencyStatus};
