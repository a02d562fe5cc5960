//! CLI Adapter.

mod generate;
mod project;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::JsonFileDocumentStore;
use crate::app::AppContext;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "learnpath")]
#[command(version)]
#[command(
    about = "Generate step-by-step coding curricula and track chapter progress",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to .learnpath/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a curriculum and print it as JSON
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Generate a code snippet from a prompt
    #[clap(visible_alias = "c")]
    Code {
        /// Target programming language
        #[arg(short, long)]
        language: String,
        /// What the code should do
        prompt: String,
    },
    /// Create and inspect projects
    #[clap(visible_alias = "p")]
    Project {
        #[command(subcommand)]
        command: project::ProjectCommands,
    },
    /// Record chapter progress on a project
    Progress {
        /// Owner of the project
        #[arg(short, long)]
        user: String,
        /// Project identifier
        #[arg(short, long)]
        project: String,
        /// 1-based chapter number
        #[arg(short, long)]
        chapter: u32,
        /// Report the chapter as not completed (completions are never withdrawn)
        #[arg(long)]
        incomplete: bool,
    },
    /// Show a user's completed chapters and points
    Profile {
        #[arg(short, long)]
        user: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = open(cli.config).and_then(|ctx| match cli.command {
        Commands::Generate(args) => generate::run_generate(&ctx, args),
        Commands::Code { language, prompt } => run_code(&ctx, &prompt, &language),
        Commands::Project { command } => project::run_project(&ctx, command),
        Commands::Progress { user, project, chapter, incomplete } => {
            project::run_progress(&ctx, &user, &project, chapter, !incomplete)
        }
        Commands::Profile { user } => project::run_profile(&ctx, &user),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open(config: Option<PathBuf>) -> Result<AppContext<JsonFileDocumentStore>, AppError> {
    let root = std::env::current_dir()?;
    crate::app::api::open_context(config.as_deref(), &root)
}

fn run_code(
    ctx: &AppContext<JsonFileDocumentStore>,
    prompt: &str,
    language: &str,
) -> Result<(), AppError> {
    let code = ctx.snippets().generate(prompt, language)?;
    println!("{}", code);
    Ok(())
}
