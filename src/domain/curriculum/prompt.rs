//! Curriculum prompt construction.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, CurriculumRequest};

const CURRICULUM_TEMPLATE: &str = include_str!("../../assets/prompts/curriculum.j2");
const CODE_SNIPPET_TEMPLATE: &str = include_str!("../../assets/prompts/code_snippet.j2");

/// Build the curriculum instruction for a request.
///
/// All four request fields are embedded verbatim, followed by the chapter
/// schema that [`super::extract`] relies on.
pub fn build(request: &CurriculumRequest) -> Result<String, AppError> {
    render(
        CURRICULUM_TEMPLATE,
        context! {
            title => &request.title,
            description => &request.description,
            language => &request.language,
            difficulty => &request.difficulty,
        },
    )
}

/// Build the code-only instruction used for snippet generation.
pub fn build_code_snippet(prompt: &str, language: &str) -> Result<String, AppError> {
    render(CODE_SNIPPET_TEMPLATE, context! { prompt => prompt, language => language })
}

fn render(template: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(template, ctx).map_err(|err| AppError::Prompt(err.to_string()))
}
