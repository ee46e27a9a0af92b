/// Split an entry into its headword and definition.
///
/// Entries read `"Word (n.): definition"`; anything without the `": "`
/// separator is treated as all headword.
pub fn split_headword(text: &str) -> (&str, &str) {
    match text.split_once(": ") {
        Some((head, rest)) => (head.trim(), rest.trim()),
        None => (text.trim(), ""),
    }
}

/// Shorten `text` to at most `max_chars` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", kept)
}
