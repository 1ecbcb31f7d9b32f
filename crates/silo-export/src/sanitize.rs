/// Name used when sanitization leaves nothing behind.
pub const FALLBACK_NAME: &str = "untitled";

const UNSAFE_CHARS: [char; 10] = ['$', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Make an arbitrary string safe for use as a file or folder name.
///
/// Unsafe characters become underscores and surrounding whitespace is
/// trimmed. A result that is empty or all underscores (the input carried no
/// usable characters) falls back to [`FALLBACK_NAME`]. Total and
/// idempotent; always returns a non-empty string.
pub fn sanitize_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim();
    if trimmed.chars().all(|c| c == '_') {
        FALLBACK_NAME.to_owned()
    } else {
        trimmed.to_owned()
    }
}
