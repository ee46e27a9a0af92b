use std::borrow::Cow;

use fauxdict_types::Entry;

/// Case-insensitive substring test. `needle` must already be lowercase.
fn contains_lowercase(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

/// Entries whose text contains `term`, ignoring case, in log order.
///
/// An empty term returns the log itself.
pub fn filter_entries<'a>(entries: &'a [Entry], term: &str) -> Cow<'a, [Entry]> {
    if term.is_empty() {
        return Cow::Borrowed(entries);
    }

    let needle = term.to_lowercase();
    Cow::Owned(
        entries
            .iter()
            .filter(|entry| contains_lowercase(&entry.text, &needle))
            .cloned()
            .collect(),
    )
}

/// Memoized filter keyed on the search term and the log length.
///
/// The log is append-only, so its length identifies its contents.
#[derive(Debug, Default)]
pub struct FilterView {
    term: String,
    needle: String,
    seen_len: Option<usize>,
    matches: Vec<usize>,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.term {
            self.needle = term.to_lowercase();
            self.term = term;
            self.seen_len = None;
        }
    }

    /// Positions in `entries` that pass the filter
    pub fn indices(&mut self, entries: &[Entry]) -> &[usize] {
        if self.seen_len != Some(entries.len()) {
            self.matches = entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| {
                    self.needle.is_empty() || contains_lowercase(&entry.text, &self.needle)
                })
                .map(|(i, _)| i)
                .collect();
            self.seen_len = Some(entries.len());
        }
        &self.matches
    }

    pub fn visible<'a>(&mut self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        self.indices(entries).iter().map(|&i| &entries[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(texts: &[&str]) -> Vec<Entry> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Entry::new(i as u64, *t))
            .collect()
    }

    #[test]
    fn test_empty_term_borrows_log() {
        let entries = log(&["Alpha", "beta"]);
        let view = filter_entries(&entries, "");
        assert!(matches!(view, Cow::Borrowed(_)));
        assert_eq!(view.as_ref(), entries.as_slice());
    }

    #[test]
    fn test_match_ignores_case() {
        let entries = log(&["Alpha", "beta", "ALPHABET"]);
        let view = filter_entries(&entries, "aLpH");
        let ids: Vec<u64> = view.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_memo_recomputes_when_log_grows() {
        let mut entries = log(&["cat", "dog"]);
        let mut view = FilterView::new();
        view.set_term("CAT");
        assert_eq!(view.indices(&entries), &[0]);

        entries.push(Entry::new(2u64, "concatenate"));
        assert_eq!(view.indices(&entries), &[0, 2]);
    }

    #[test]
    fn test_memo_recomputes_when_term_changes() {
        let entries = log(&["cat", "dog"]);
        let mut view = FilterView::new();
        assert_eq!(view.indices(&entries), &[0, 1]);

        view.set_term("dog");
        assert_eq!(view.indices(&entries), &[1]);

        view.set_term("");
        assert_eq!(view.visible(&entries).len(), 2);
    }
}
