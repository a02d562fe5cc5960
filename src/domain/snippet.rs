//! Post-processing for generated code snippets.

/// Strip the first fenced code block down to its body.
///
/// Returns the trimmed body of the first ```` ```lang ... ``` ```` block when one
/// exists, otherwise the trimmed input. If stripping leaves nothing, the
/// original content is returned untouched.
pub fn clean_code_response(content: &str) -> String {
    let cleaned = strip_first_fence(content).unwrap_or(content).trim();
    if cleaned.is_empty() { content.to_string() } else { cleaned.to_string() }
}

fn strip_first_fence(content: &str) -> Option<&str> {
    let open = content.find("```")?;
    let after_ticks = &content[open + 3..];
    let info_len = after_ticks.chars().take_while(|ch| ch.is_ascii_lowercase()).count();
    let mut body = &after_ticks[info_len..];
    if let Some(rest) = body.strip_prefix('\n') {
        body = rest;
    }
    let close = body.find("```")?;
    Some(&body[..close])
}
