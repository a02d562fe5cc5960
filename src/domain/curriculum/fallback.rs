//! Dependency-free curriculum used whenever the model path is unavailable.

use crate::domain::{Chapter, QuizItem};

const INTRODUCTION_TITLE: &str = "Introduction";
const INTRODUCTION_DESCRIPTION: &str = "Setting up your environment and basics of the project";
const ALL_OF_THE_ABOVE: &str = "All of the above";

/// One introductory chapter with a single quiz item.
///
/// Total and deterministic: the same inputs always give the same chapter.
/// `title` and `difficulty` are accepted for signature parity with the model
/// path and do not change the output.
pub fn generate(language: &str, _title: &str, _difficulty: &str) -> Vec<Chapter> {
    vec![Chapter {
        title: INTRODUCTION_TITLE.to_string(),
        description: INTRODUCTION_DESCRIPTION.to_string(),
        content: format!(
            "Start by understanding the basics of {}. Set up your environment for development.",
            language
        ),
        code_example: hello_world(language),
        quiz: vec![QuizItem {
            question: format!("What is {} mainly used for?", language),
            options: vec![
                "Web".to_string(),
                "Mobile".to_string(),
                "System Programming".to_string(),
                ALL_OF_THE_ABOVE.to_string(),
            ],
            correct: 3,
        }],
        completed: false,
    }]
}

/// One-line greeting written in the language's print idiom, best effort.
fn hello_world(language: &str) -> String {
    let greeting = format!("Hello, {}!", language);
    match language.trim().to_ascii_lowercase().as_str() {
        "python" | "python3" | "swift" => format!("print(\"{}\")", greeting),
        "rust" => format!("println!(\"{}\");", greeting),
        "go" | "golang" => format!("fmt.Println(\"{}\")", greeting),
        "java" => format!("System.out.println(\"{}\");", greeting),
        "kotlin" | "scala" => format!("println(\"{}\")", greeting),
        "c#" | "csharp" => format!("Console.WriteLine(\"{}\");", greeting),
        "c" => format!("printf(\"{}\\n\");", greeting),
        "c++" | "cpp" => format!("std::cout << \"{}\" << std::endl;", greeting),
        "ruby" => format!("puts \"{}\"", greeting),
        "php" => format!("echo \"{}\";", greeting),
        "bash" | "shell" | "sh" => format!("echo \"{}\"", greeting),
        _ => format!("console.log(\"{}\");", greeting),
    }
}
