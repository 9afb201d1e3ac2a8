//! Response normalizer
//!
//! Best-effort textual cleanup of the raw model reply before structural
//! parsing. Generative services habitually wrap structured output in
//! markdown code fences and sprinkle emphasis markers around plain-text
//! answers; this strips that incidental formatting and nothing else.

use tracing::debug;

/// Strip incidental formatting from a raw model reply
///
/// Removes a surrounding fenced-code block (with optional language tag) and
/// leading/trailing emphasis punctuation. Pure and idempotent: only a fixed
/// set of wrapper tokens at the edges is touched, never interior content
/// characters.
pub fn normalize(raw: &str) -> String {
    debug!(raw_len = raw.len(), "normalize: called");
    let mut text = raw.trim();

    // Surrounding fence, e.g. ```json\n{...}\n```
    if let Some(rest) = text.strip_prefix("```") {
        let rest = match rest.find('\n') {
            // Multi-line fence: the rest of the opening line is a language tag
            Some(idx) => &rest[idx + 1..],
            // Single-line fence: drop the language tag if one is glued on
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
        let rest = rest.trim_end();
        text = rest.strip_suffix("```").unwrap_or(rest);
        text = text.trim();
    }

    // Emphasis wrappers at the edges only. Whitespace is part of the strip
    // set so layered wrappers like `** **bold** **` come off in one pass;
    // stopping at interior whitespace would leave a second layer that only
    // another pass could remove, and this function must reach a fixpoint.
    let text = text.trim_matches(|c: char| c == '*' || c == '_' || c == '`' || c.is_whitespace());

    text.to_string()
}
