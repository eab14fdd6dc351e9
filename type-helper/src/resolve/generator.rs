//! Generation orchestration
//!
//! Runs a request through derivation and emission, then walks its
//! dependencies depth-first on an explicit stack. A visited set keyed by
//! entity name bounds the walk, so circular associations terminate.

use std::collections::{HashSet, VecDeque};

use super::plan::{self, DependencyStatus};
use crate::artifacts::{ArtifactKind, ArtifactStore, SupportArtifact};
use crate::descriptor::ModelDescriptor;
use crate::emit::Emitter;
use crate::error::{GeneratorError, ModelError};
use crate::helper::ModelHelper;
use crate::interaction::Interaction;
use crate::options::GenerationRequest;

/// How a request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Declarations were derived and emitted
    Generated { fields: usize, arguments: usize },
    /// No model; an empty type was accepted (and emitted unless types are skipped)
    Placeholder,
    /// No model; nothing was emitted
    Aborted,
}

/// What happened to one dependency of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyOutcome {
    Satisfied,
    AlreadyVisited,
    Generated,
    Declined { missing: Vec<ArtifactKind> },
}

/// What happened to an offered support artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportOutcome {
    Generated,
    Declined,
}

/// Result of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestReport {
    pub request: GenerationRequest,
    pub outcome: RequestOutcome,
    pub dependencies: Vec<(String, DependencyOutcome)>,
    pub support: Vec<(SupportArtifact, SupportOutcome)>,
}

impl RequestReport {
    fn new(request: GenerationRequest, outcome: RequestOutcome) -> Self {
        Self {
            request,
            outcome,
            dependencies: Vec::new(),
            support: Vec::new(),
        }
    }
}

/// Result of a whole run, requests in the order they started
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub requests: Vec<RequestReport>,
    /// Dependency requests spawned after the operator accepted them
    pub spawned: Vec<GenerationRequest>,
}

impl GenerationReport {
    /// Report of the request for an entity
    pub fn request(&self, entity: &str) -> Option<&RequestReport> {
        self.requests
            .iter()
            .find(|report| report.request.entity_name == entity)
    }
}

/// A request whose dependencies are still being walked
struct Frame {
    index: usize,
    request: GenerationRequest,
    pending: VecDeque<String>,
}

/// Drives generation requests against the collaborators
pub struct Generator<'a, D: ?Sized, S: ?Sized, I: ?Sized, E: ?Sized> {
    descriptor: &'a D,
    store: &'a S,
    interaction: &'a mut I,
    emitter: &'a mut E,
}

impl<'a, D, S, I, E> Generator<'a, D, S, I, E>
where
    D: ModelDescriptor + ?Sized,
    S: ArtifactStore + ?Sized,
    I: Interaction + ?Sized,
    E: Emitter + ?Sized,
{
    pub fn new(
        descriptor: &'a D,
        store: &'a S,
        interaction: &'a mut I,
        emitter: &'a mut E,
    ) -> Self {
        Self {
            descriptor,
            store,
            interaction,
            emitter,
        }
    }

    /// Generate the root request and every dependency the operator accepts
    pub fn run(&mut self, root: GenerationRequest) -> Result<GenerationReport, GeneratorError> {
        let mut report = GenerationReport::default();
        let mut visited = HashSet::from([root.entity_name.clone()]);
        let mut offered = HashSet::new();
        let mut stack = Vec::new();

        if let Some(frame) = self.start(root, &mut report)? {
            stack.push(frame);
        }

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let next = frame
                .pending
                .pop_front()
                .map(|dependency| (frame.index, frame.request.for_dependency(dependency)));

            let Some((index, request)) = next else {
                if let Some(frame) = stack.pop() {
                    self.finish(frame, &mut report, &mut offered)?;
                }
                continue;
            };

            let dependency = request.entity_name.clone();
            let (outcome, child) = match plan::classify(&dependency, self.store, &visited) {
                DependencyStatus::AlreadyVisited => {
                    tracing::debug!(dependency = %dependency, "dependency already generated in this run");
                    (DependencyOutcome::AlreadyVisited, None)
                }
                DependencyStatus::Satisfied => {
                    tracing::info!(dependency = %dependency, "dependency already satisfied");
                    self.emitter.report_satisfied(&dependency)?;
                    (DependencyOutcome::Satisfied, None)
                }
                DependencyStatus::Unresolved { missing } => {
                    tracing::info!(dependency = %dependency, ?missing, "unresolved dependency");
                    if self.interaction.confirm(&plan::unresolved_prompt(&dependency))? {
                        (DependencyOutcome::Generated, Some(request))
                    } else {
                        (DependencyOutcome::Declined { missing }, None)
                    }
                }
            };
            report.requests[index].dependencies.push((dependency, outcome));

            if let Some(request) = child {
                visited.insert(request.entity_name.clone());
                report.spawned.push(request.clone());
                if let Some(frame) = self.start(request, &mut report)? {
                    stack.push(frame);
                }
            }
        }

        Ok(report)
    }

    /// Resolve the model, emit its artifacts and queue its dependencies
    fn start(
        &mut self,
        request: GenerationRequest,
        report: &mut GenerationReport,
    ) -> Result<Option<Frame>, GeneratorError> {
        let index = report.requests.len();

        let entity = match self.descriptor.entity(&request.entity_name) {
            Ok(entity) => entity,
            Err(ModelError::NotFound(name)) => {
                tracing::warn!(entity = %name, "model not found");
                let outcome = if self.interaction.confirm(&plan::missing_model_prompt(&name))? {
                    if !request.flags.skip_type {
                        self.emitter.emit_placeholder(&name)?;
                    }
                    RequestOutcome::Placeholder
                } else {
                    RequestOutcome::Aborted
                };
                report.requests.push(RequestReport::new(request, outcome));
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let helper = ModelHelper::new(&entity);
        let flags = request.flags;
        let name = entity.name.as_str();

        if !flags.skip_type {
            self.emitter.emit_type(name, helper.fields())?;
        }
        if !flags.skip_input {
            self.emitter.emit_input(name, helper.arguments())?;
        }
        if !flags.skip_mutations {
            self.emitter.emit_mutations(name, &flags)?;
        }
        if !flags.skip_policy {
            self.emitter.emit_policy(name)?;
        }

        let dependencies = helper.dependencies();
        tracing::info!(entity = name, ?dependencies, "found dependencies");
        self.emitter.report_dependencies(name, dependencies)?;

        let pending = if flags.skip_dependencies {
            VecDeque::new()
        } else {
            dependencies.iter().cloned().collect()
        };

        let outcome = RequestOutcome::Generated {
            fields: helper.fields().len(),
            arguments: helper.arguments().len(),
        };
        report
            .requests
            .push(RequestReport::new(request.clone(), outcome));

        Ok(Some(Frame {
            index,
            request,
            pending,
        }))
    }

    /// Offer missing support artifacts once all dependencies are walked
    ///
    /// Each support artifact is offered at most once per run.
    fn finish(
        &mut self,
        frame: Frame,
        report: &mut GenerationReport,
        offered: &mut HashSet<SupportArtifact>,
    ) -> Result<(), GeneratorError> {
        for support in plan::missing_support(&frame.request.flags, self.store) {
            if !offered.insert(support) {
                continue;
            }
            let outcome = if self.interaction.confirm(support.prompt())? {
                self.emitter.emit_support(support)?;
                SupportOutcome::Generated
            } else {
                SupportOutcome::Declined
            };
            report.requests[frame.index].support.push((support, outcome));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::artifacts::MemoryStore;
    use crate::descriptor::MemoryDescriptor;
    use crate::emit::{Emitted, RecordingEmitter};
    use crate::interaction::ScriptedInteraction;
    use crate::ir::{Association, Entity, ScalarType};
    use crate::options::GenerationFlags;

    fn blog() -> MemoryDescriptor {
        MemoryDescriptor::new()
            .with(
                Entity::new("Post")
                    .column("id", ScalarType::Integer)
                    .column("title", ScalarType::String)
                    .column("user_id", ScalarType::Integer)
                    .association(Association::one("author").with_class_name("User"))
                    .association(Association::many("comments")),
            )
            .with(
                Entity::new("Comment")
                    .column("id", ScalarType::Integer)
                    .column("body", ScalarType::Text)
                    .column("post_id", ScalarType::Integer)
                    .association(Association::one("post")),
            )
            .with(
                Entity::new("User")
                    .column("id", ScalarType::Integer)
                    .column("email", ScalarType::String),
            )
    }

    /// Store where support artifacts exist, so only dependency prompts appear
    fn store_with_support() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_support(SupportArtifact::ApplicationPolicy);
        store.insert_support(SupportArtifact::OperationReturnType);
        store
    }

    fn run(
        descriptor: &MemoryDescriptor,
        store: &MemoryStore,
        interaction: &mut ScriptedInteraction,
        flags: GenerationFlags,
    ) -> (GenerationReport, RecordingEmitter) {
        let mut emitter = RecordingEmitter::new();
        let report = Generator::new(descriptor, store, interaction, &mut emitter)
            .run(GenerationRequest::new("Post", flags))
            .unwrap();
        (report, emitter)
    }

    #[test]
    fn test_satisfied_dependencies_are_not_prompted() {
        let descriptor = blog();
        let mut store = store_with_support();
        store.insert_all("Comment");
        store.insert_all("User");
        let mut interaction = ScriptedInteraction::always(true);

        let (report, emitter) = run(&descriptor, &store, &mut interaction, GenerationFlags::default());

        assert!(interaction.prompts().is_empty());
        assert!(report.spawned.is_empty());
        assert_eq!(
            report.requests[0].dependencies,
            [
                ("Comment".to_string(), DependencyOutcome::Satisfied),
                ("User".to_string(), DependencyOutcome::Satisfied),
            ]
        );
        assert!(emitter.emitted.contains(&Emitted::Satisfied {
            dependency: "User".to_string()
        }));
    }

    #[test]
    fn test_missing_policy_spawns_one_request() {
        let descriptor = blog();
        let mut store = store_with_support();
        store.insert_all("User");
        store.insert_all("Comment");
        store.remove("Comment", ArtifactKind::Policy);
        let mut interaction = ScriptedInteraction::always(true);
        let flags = GenerationFlags {
            skip_input: true,
            ..Default::default()
        };

        let (report, emitter) = run(&descriptor, &store, &mut interaction, flags);

        assert_eq!(report.spawned, [GenerationRequest::new("Comment", flags)]);
        assert_eq!(
            interaction.prompts(),
            ["Found unresolved dependency for: Comment. Do you want to generate it?"]
        );
        assert_eq!(emitter.typed_entities(), ["Post", "Comment"]);
    }

    #[test]
    fn test_circular_associations_terminate() {
        let descriptor = blog();
        let store = store_with_support();
        let mut interaction = ScriptedInteraction::always(true);

        let (report, emitter) = run(&descriptor, &store, &mut interaction, GenerationFlags::default());

        assert_eq!(emitter.typed_entities(), ["Post", "Comment", "User"]);
        let comment = report.request("Comment").unwrap();
        assert_eq!(
            comment.dependencies,
            [("Post".to_string(), DependencyOutcome::AlreadyVisited)]
        );
        assert_eq!(report.spawned.len(), 2);
    }

    #[test]
    fn test_depth_first_order() {
        let descriptor = blog().with(
            Entity::new("Comment")
                .column("id", ScalarType::Integer)
                .association(Association::many("reactions")),
        );
        let descriptor = descriptor.with(Entity::new("Reaction").column("id", ScalarType::Integer));
        let store = store_with_support();
        let mut interaction = ScriptedInteraction::always(true);

        let (_, emitter) = run(&descriptor, &store, &mut interaction, GenerationFlags::default());

        assert_eq!(
            emitter.typed_entities(),
            ["Post", "Comment", "Reaction", "User"]
        );
    }

    #[test]
    fn test_flags_propagate_to_every_dependency() {
        let descriptor = blog();
        let store = store_with_support();
        let mut interaction = ScriptedInteraction::always(true);
        let flags = GenerationFlags {
            skip_mutations: true,
            ..Default::default()
        };

        let (report, emitter) = run(&descriptor, &store, &mut interaction, flags);

        assert!(!report.spawned.is_empty());
        assert!(report.spawned.iter().all(|r| r.flags.skip_mutations));
        assert!(report.requests.iter().all(|r| r.request.flags == flags));
        assert!(!emitter
            .emitted
            .iter()
            .any(|e| matches!(e, Emitted::Mutations { .. })));
    }

    #[test]
    fn test_declined_dependency_is_recorded() {
        let descriptor = blog();
        let mut store = store_with_support();
        store.insert_all("User");
        let mut interaction = ScriptedInteraction::always(false);

        let (report, emitter) = run(&descriptor, &store, &mut interaction, GenerationFlags::default());

        assert!(report.spawned.is_empty());
        assert_eq!(
            report.requests[0].dependencies[0],
            (
                "Comment".to_string(),
                DependencyOutcome::Declined {
                    missing: ArtifactKind::ALL.to_vec()
                }
            )
        );
        assert_eq!(emitter.typed_entities(), ["Post"]);
    }

    /// Store counting every existence check it answers
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        probes: Cell<usize>,
    }

    impl ArtifactStore for CountingStore {
        fn exists(&self, entity: &str, kind: ArtifactKind) -> bool {
            self.probes.set(self.probes.get() + 1);
            self.inner.exists(entity, kind)
        }

        fn support_exists(&self, support: SupportArtifact) -> bool {
            self.probes.set(self.probes.get() + 1);
            self.inner.support_exists(support)
        }
    }

    #[test]
    fn test_skip_dependencies_never_prompts() {
        let descriptor = blog();
        let store = CountingStore::default();
        let mut interaction = ScriptedInteraction::always(true);
        let flags = GenerationFlags {
            skip_dependencies: true,
            ..Default::default()
        };

        let mut emitter = RecordingEmitter::new();
        let report = Generator::new(&descriptor, &store, &mut interaction, &mut emitter)
            .run(GenerationRequest::new("Post", flags))
            .unwrap();

        assert_eq!(store.probes.get(), 0);
        assert!(interaction.prompts().is_empty());
        assert!(report.requests[0].dependencies.is_empty());
        assert!(emitter.emitted.contains(&Emitted::Dependencies {
            entity: "Post".to_string(),
            dependencies: vec!["Comment".to_string(), "User".to_string()],
        }));
    }

    #[test]
    fn test_emission_follows_flags() {
        let descriptor = blog();
        let store = store_with_support();
        let mut interaction = ScriptedInteraction::always(false);
        let flags = GenerationFlags {
            skip_type: true,
            skip_policy: true,
            ..Default::default()
        };

        let (report, emitter) = run(&descriptor, &store, &mut interaction, flags);

        assert_eq!(
            report.requests[0].outcome,
            RequestOutcome::Generated {
                fields: 4,
                arguments: 3
            }
        );
        assert!(emitter.typed_entities().is_empty());
        assert_eq!(
            emitter.emitted[..2],
            [
                Emitted::Input {
                    entity: "Post".to_string(),
                    arguments: vec![
                        "argument :title, String, required: false".to_string(),
                        "argument :author_id, ID, required: false".to_string(),
                        "argument :comment_ids, [ID], required: false".to_string(),
                    ],
                },
                Emitted::Mutations {
                    entity: "Post".to_string(),
                    authorized: false,
                },
            ]
        );
    }

    #[test]
    fn test_missing_model_placeholder_or_abort() {
        let descriptor = blog();
        let store = store_with_support();

        let mut interaction = ScriptedInteraction::always(true);
        let mut emitter = RecordingEmitter::new();
        let report = Generator::new(&descriptor, &store, &mut interaction, &mut emitter)
            .run(GenerationRequest::new("Ghost", GenerationFlags::default()))
            .unwrap();
        assert_eq!(report.requests[0].outcome, RequestOutcome::Placeholder);
        assert_eq!(
            emitter.emitted,
            [Emitted::Placeholder {
                entity: "Ghost".to_string()
            }]
        );

        let mut interaction = ScriptedInteraction::always(false);
        let mut emitter = RecordingEmitter::new();
        let report = Generator::new(&descriptor, &store, &mut interaction, &mut emitter)
            .run(GenerationRequest::new("Ghost", GenerationFlags::default()))
            .unwrap();
        assert_eq!(report.requests[0].outcome, RequestOutcome::Aborted);
        assert!(emitter.emitted.is_empty());
    }

    #[test]
    fn test_placeholder_respects_skip_type() {
        let descriptor = blog();
        let store = store_with_support();
        let mut interaction = ScriptedInteraction::always(true);
        let mut emitter = RecordingEmitter::new();
        let flags = GenerationFlags {
            skip_type: true,
            ..Default::default()
        };

        let report = Generator::new(&descriptor, &store, &mut interaction, &mut emitter)
            .run(GenerationRequest::new("Ghost", flags))
            .unwrap();

        assert_eq!(report.requests[0].outcome, RequestOutcome::Placeholder);
        assert!(emitter.emitted.is_empty());
    }

    #[test]
    fn test_missing_dependency_model_does_not_stop_parent() {
        let descriptor = MemoryDescriptor::new()
            .with(
                Entity::new("Post")
                    .association(Association::many("ghosts"))
                    .association(Association::many("tags")),
            )
            .with(Entity::new("Tag").column("id", ScalarType::Integer));
        let store = store_with_support();
        // accept Ghost, refuse its placeholder, accept Tag
        let mut interaction = ScriptedInteraction::new([true, false, true]);
        let mut emitter = RecordingEmitter::new();

        let report = Generator::new(&descriptor, &store, &mut interaction, &mut emitter)
            .run(GenerationRequest::new("Post", GenerationFlags::default()))
            .unwrap();

        assert_eq!(report.request("Ghost").unwrap().outcome, RequestOutcome::Aborted);
        assert_eq!(emitter.typed_entities(), ["Post", "Tag"]);
    }

    #[test]
    fn test_support_artifacts_offered_once() {
        let descriptor = blog();
        let mut store = MemoryStore::new();
        store.insert_all("Comment");
        store.insert_all("User");
        store.remove("User", ArtifactKind::Input);
        let mut interaction = ScriptedInteraction::always(true);

        let (report, emitter) = run(&descriptor, &store, &mut interaction, GenerationFlags::default());

        let supports: Vec<_> = emitter
            .emitted
            .iter()
            .filter(|e| matches!(e, Emitted::Support(_)))
            .collect();
        assert_eq!(supports.len(), 2);
        // the dependency finishes first, so it is the one offered the support files
        assert_eq!(
            report.request("User").unwrap().support,
            [
                (SupportArtifact::ApplicationPolicy, SupportOutcome::Generated),
                (SupportArtifact::OperationReturnType, SupportOutcome::Generated),
            ]
        );
        assert!(report.request("Post").unwrap().support.is_empty());
    }
}
