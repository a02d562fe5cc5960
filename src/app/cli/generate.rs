use std::io::ErrorKind;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::adapters::JsonFileDocumentStore;
use crate::app::AppContext;
use crate::app::api::ChaptersPayload;
use crate::domain::{AppError, CurriculumRequest};

const DIFFICULTIES: [&str; 3] = ["beginner", "intermediate", "advanced"];

/// Curriculum inputs; any field left out is asked for interactively.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Project title
    #[arg(short, long)]
    pub title: Option<String>,
    /// What the project does
    #[arg(short, long)]
    pub description: Option<String>,
    /// Programming language
    #[arg(short, long)]
    pub language: Option<String>,
    /// beginner, intermediate or advanced (not enforced)
    #[arg(long)]
    pub difficulty: Option<String>,
}

impl GenerateArgs {
    /// Fill missing fields from the terminal. `None` means the user cancelled.
    pub fn resolve(self) -> Result<Option<CurriculumRequest>, AppError> {
        let Some(title) = value_or_prompt(self.title, "Project title")? else {
            return Ok(None);
        };
        let Some(description) = value_or_prompt(self.description, "Description")? else {
            return Ok(None);
        };
        let Some(language) = value_or_prompt(self.language, "Programming language")? else {
            return Ok(None);
        };
        let difficulty = match self.difficulty {
            Some(value) => value,
            None => match prompt_difficulty()? {
                Some(value) => value,
                None => return Ok(None),
            },
        };
        Ok(Some(CurriculumRequest { title, description, language, difficulty }))
    }
}

pub fn run_generate(
    ctx: &AppContext<JsonFileDocumentStore>,
    args: GenerateArgs,
) -> Result<(), AppError> {
    let Some(request) = args.resolve()? else {
        return Ok(());
    };

    let outcome = ctx.curriculum().generate_with_outcome(&request);
    if outcome.is_fallback() {
        eprintln!("⚠️  AI generation unavailable, using the fallback curriculum");
    }
    let payload = ChaptersPayload { chapters: outcome.chapters };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn value_or_prompt(value: Option<String>, label: &str) -> Result<Option<String>, AppError> {
    if let Some(value) = value {
        return Ok(Some(value));
    }
    match Input::<String>::new().with_prompt(label).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read {}: {}", label, err))),
    }
}

fn prompt_difficulty() -> Result<Option<String>, AppError> {
    let selection = Select::new()
        .with_prompt("Difficulty")
        .items(&DIFFICULTIES)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::config_error(format!("Failed to select difficulty: {}", err)))?;

    Ok(selection.map(|index| DIFFICULTIES[index].to_string()))
}
