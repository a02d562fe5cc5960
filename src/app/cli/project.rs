use clap::Subcommand;

use crate::adapters::JsonFileDocumentStore;
use crate::app::AppContext;
use crate::domain::{AppError, CurriculumRequest, UserProfile};
use crate::ports::DocumentStore;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Generate a curriculum and store it as a new project
    #[clap(visible_alias = "c")]
    Create {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        #[arg(short, long)]
        language: String,
        #[arg(long, default_value = "beginner")]
        difficulty: String,
    },
    /// List a user's projects, newest first
    #[clap(visible_alias = "ls")]
    List {
        #[arg(short, long)]
        user: String,
    },
    /// Print a project as JSON
    Show {
        #[arg(short, long)]
        user: String,
        /// Project identifier
        id: String,
    },
}

type Ctx = AppContext<JsonFileDocumentStore>;

pub fn run_project(ctx: &Ctx, command: ProjectCommands) -> Result<(), AppError> {
    match command {
        ProjectCommands::Create { user, title, description, language, difficulty } => {
            let request = CurriculumRequest { title, description, language, difficulty };
            let created = ctx.projects().create(&user, request)?;
            if created.used_fallback {
                eprintln!("⚠️  AI generation unavailable, using the fallback curriculum");
            }
            println!(
                "✅ Created project {} ({} chapters)",
                created.project.id,
                created.project.chapters.len()
            );
        }
        ProjectCommands::List { user } => {
            let projects = ctx.projects().list(&user)?;
            if projects.is_empty() {
                println!("No projects for {}", user);
            }
            for project in projects {
                println!(
                    "{}  {}  [{}/{} chapters]  {}",
                    project.id,
                    project.title,
                    project.progress.completed_chapters.len(),
                    project.progress.total_chapters,
                    project.created_at.format("%Y-%m-%d %H:%M"),
                );
            }
        }
        ProjectCommands::Show { user, id } => {
            let project = ctx.projects().get(&user, &id)?;
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
    }
    Ok(())
}

pub fn run_progress(
    ctx: &Ctx,
    user: &str,
    project_id: &str,
    chapter: u32,
    completed: bool,
) -> Result<(), AppError> {
    let project = ctx.progress().update(user, project_id, chapter, completed)?;
    if completed {
        println!(
            "✅ Chapter {} of project {} complete (current chapter: {})",
            chapter, project_id, project.progress.current_chapter
        );
    } else {
        println!("Project {} unchanged", project_id);
    }
    Ok(())
}

pub fn run_profile(ctx: &Ctx, user: &str) -> Result<(), AppError> {
    let profile = ctx.store().get_user(user)?.unwrap_or_else(|| UserProfile::new(user));
    println!("User: {}", profile.id);
    println!("Projects: {}", profile.projects.len());
    println!("Completed chapters: {}", profile.completed_chapters);
    println!("Total points: {}", profile.total_points);
    Ok(())
}
