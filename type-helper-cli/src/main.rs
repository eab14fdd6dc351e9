//! type-helper: Plan GraphQL declarations for a Rails model
//!
//! This tool reads `db/schema.rb` and `app/models` and, for the named model:
//! - Derives its output type fields and input type arguments
//! - Reports the type, input, mutation and policy artifacts it needs
//! - Walks the models it depends on, offering to generate unresolved ones
//!
//! Usage:
//!   type-helper Post
//!   type-helper comments --no-mutations --root ../blog

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use type_helper::interaction::{AssumeYes, Interaction};
use type_helper::resolve::RequestOutcome;
use type_helper::{GenerationFlags, GenerationRequest, Generator, naming};

mod parser;
mod project;
mod prompt;
mod report;

#[derive(Parser, Debug)]
#[command(name = "type-helper")]
#[command(about = "Derive GraphQL declarations and resolve model dependencies")]
struct Args {
    /// Model name (e.g., Post, blog_posts)
    name: String,

    /// Rails project root
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Schema file (defaults to db/schema.rb under the root)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Models directory (defaults to app/models under the root)
    #[arg(long)]
    models: Option<PathBuf>,

    /// Skip types generation
    #[arg(long)]
    no_type: bool,

    /// Skip policy generation
    #[arg(long)]
    no_policy: bool,

    /// Skip input generation
    #[arg(long)]
    no_input: bool,

    /// Skip mutations generation
    #[arg(long)]
    no_mutations: bool,

    /// Skip dependencies generation
    #[arg(long)]
    no_dependencies: bool,

    /// Answer yes to every question
    #[arg(short, long)]
    yes: bool,
}

impl Args {
    fn flags(&self) -> GenerationFlags {
        GenerationFlags {
            skip_type: self.no_type,
            skip_policy: self.no_policy,
            skip_input: self.no_input,
            skip_mutations: self.no_mutations,
            skip_dependencies: self.no_dependencies,
        }
    }
}

fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("TYPE_HELPER_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_tracing();

    let schema = args
        .schema
        .clone()
        .unwrap_or_else(|| args.root.join("db/schema.rb"));
    let models = args
        .models
        .clone()
        .unwrap_or_else(|| args.root.join("app/models"));

    // Parse the Rails project
    let project = parser::load(&schema, &models)?;
    if project.model_count() == 0 {
        eprintln!("No models found in {}", models.display());
    }

    let tree = project::ProjectTree::new(&args.root);
    let mut emitter = report::ReportEmitter::new(std::io::stdout(), tree.clone());
    let mut interaction: Box<dyn Interaction> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(prompt::Prompt)
    };

    let request = GenerationRequest::new(naming::class_name(&args.name), args.flags());
    let report =
        Generator::new(&project, &tree, interaction.as_mut(), &mut emitter).run(request)?;
    emitter.into_inner().flush()?;

    let generated = report
        .requests
        .iter()
        .filter(|r| matches!(r.outcome, RequestOutcome::Generated { .. }))
        .count();

    eprintln!(
        "\nPlanned declarations for {} of {} requested models",
        generated,
        report.requests.len()
    );

    Ok(())
}
