//! Prompt-facing description synthesis
//!
//! Tools are presented to the language model as one line each:
//! `name(params): docstring`. The session-context parameter is part of the
//! Rust declaration but never part of the prompt, so it is stripped from
//! the signature text before the description is composed.

/// Marker identifying the injected context parameter in signature text
const CONTEXT_MARKER: &str = "SessionContext";

/// Compose the description line for a tool
pub fn compose(name: &str, signature: &str, docstring: &str) -> String {
    format!("{name}{signature}: {}", docstring.trim())
}

/// Remove the trailing context parameter from a signature rendering
///
/// Only the last top-level parameter is considered, and only when its text
/// mentions the context type; earlier parameters may nest generics, tuples,
/// or fn pointers without being touched. Text that is not a parenthesized
/// parameter list comes back unchanged.
pub fn strip_context_param(signature: &str) -> String {
    let trimmed = signature.trim();
    let Some(inner) = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return trimmed.to_string();
    };

    let mut depth = 0usize;
    let mut last_split = None;
    let mut prev = '\0';
    for (idx, ch) in inner.char_indices() {
        match ch {
            '(' | '[' | '<' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            // `>` closes a generic unless it is the tip of a `->` arrow
            '>' if prev != '-' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => last_split = Some(idx),
            _ => {}
        }
        prev = ch;
    }

    let (kept, last) = match last_split {
        Some(idx) => (&inner[..idx], &inner[idx + 1..]),
        None => ("", inner),
    };

    if last.contains(CONTEXT_MARKER) {
        format!("({})", kept.trim_end())
    } else {
        trimmed.to_string()
    }
}
