//! Chapter extraction from free-form model output.
//!
//! Models tend to wrap the requested JSON in prose or code fences. The
//! extractor takes the slice from the first `[` to the last `]` and decodes
//! it as a chapter array, all or nothing. A bracket pair appearing in prose
//! before the real array (or after it) widens the slice and makes decoding
//! fail; that case falls through to the caller's fallback.

use crate::domain::{Chapter, ExtractionError};

/// Extract the chapter array embedded in `raw`.
pub fn extract(raw: &str) -> Result<Vec<Chapter>, ExtractionError> {
    let slice = bracketed_slice(raw).ok_or(ExtractionError::NoArrayFound)?;
    serde_json::from_str(slice).map_err(|err| ExtractionError::Malformed(err.to_string()))
}

/// Greedy match from the first `[` to the last `]`, inclusive.
fn bracketed_slice(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuizItem;
    use proptest::prelude::*;

    fn chapter(title: &str) -> Chapter {
        Chapter {
            title: title.to_string(),
            description: "Learn the basics".to_string(),
            content: "Variables hold values.".to_string(),
            code_example: "let x = 1;".to_string(),
            quiz: vec![QuizItem {
                question: "What is x?".to_string(),
                options: vec!["1".into(), "2".into(), "3".into(), "4".into()],
                correct: 0,
            }],
            completed: false,
        }
    }

    #[test]
    fn extracts_from_prose_and_code_fence() {
        let expected = vec![chapter("Getting Started")];
        let json = serde_json::to_string_pretty(&expected).unwrap();
        let raw = format!("Sure! Here you go:\n```json\n{}\n```", json);

        assert_eq!(extract(&raw).unwrap(), expected);
    }

    #[test]
    fn extracts_bare_array() {
        let expected = vec![chapter("One"), chapter("Two")];
        let raw = serde_json::to_string(&expected).unwrap();
        assert_eq!(extract(&raw).unwrap(), expected);
    }

    #[test]
    fn empty_array_decodes_to_empty_sequence() {
        assert_eq!(extract("Nothing to teach: []").unwrap(), Vec::<Chapter>::new());
    }

    #[test]
    fn fails_without_brackets() {
        assert_eq!(extract("I cannot help with that."), Err(ExtractionError::NoArrayFound));
    }

    #[test]
    fn fails_when_closing_bracket_precedes_opening() {
        assert_eq!(extract("oops ] then [ nothing"), Err(ExtractionError::NoArrayFound));
    }

    #[test]
    fn fails_on_invalid_json_between_brackets() {
        let result = extract("Here: [this is not json]");
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn fails_on_array_of_non_objects() {
        let result = extract("[1, 2, 3]");
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn fails_on_objects_missing_required_fields() {
        let result = extract(r#"[{"title": "Only a title"}]"#);
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn trailing_bracket_in_prose_breaks_the_match() {
        let json = serde_json::to_string(&vec![chapter("A")]).unwrap();
        let raw = format!("{} See also [1].", json);
        assert!(matches!(extract(&raw), Err(ExtractionError::Malformed(_))));
    }

    fn text_without_brackets() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:\n`]{0,40}"
    }

    fn chapter_strategy() -> impl Strategy<Value = Chapter> {
        (
            ".{0,20}",
            ".{0,20}",
            ".{0,40}",
            ".{0,40}",
            prop::collection::vec(".{0,10}", 4),
            -2i64..6,
            any::<bool>(),
        )
            .prop_map(|(title, description, content, code, options, correct, completed)| Chapter {
                title,
                description,
                content,
                code_example: code,
                quiz: vec![QuizItem { question: "q".to_string(), options, correct }],
                completed,
            })
    }

    proptest! {
        #[test]
        fn round_trips_through_surrounding_prose(
            chapters in prop::collection::vec(chapter_strategy(), 1..4),
            prefix in text_without_brackets(),
            suffix in text_without_brackets(),
        ) {
            let raw = format!("{}{}{}", prefix, serde_json::to_string(&chapters).unwrap(), suffix);
            prop_assert_eq!(extract(&raw).unwrap(), chapters);
        }
    }
}
