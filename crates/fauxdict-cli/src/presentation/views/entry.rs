use std::fmt;

use crate::presentation::formatters::split_headword;
use crate::presentation::view_models::{EntryListViewModel, EntryViewModel, RandomEntryViewModel};

impl fmt::Display for EntryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, definition) = split_headword(&self.text);
        if definition.is_empty() {
            write!(f, "{:>4}  {}", self.id, head)
        } else {
            write!(f, "{:>4}  {}: {}", self.id, head, definition)
        }
    }
}

impl fmt::Display for EntryListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            match &self.search_term {
                Some(term) => writeln!(f, "No entries contain \"{}\".", term)?,
                None => writeln!(f, "No entries loaded.")?,
            }
            return Ok(());
        }

        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }

        writeln!(f)?;
        match &self.search_term {
            Some(term) => write!(
                f,
                "{} of {} loaded entries match \"{}\"",
                self.entries.len(),
                self.total_loaded,
                term
            )?,
            None => write!(f, "{} entries", self.total_loaded)?,
        }
        if self.pagination.continuation {
            writeln!(f, " ({} page(s), more available)", self.pagination.page_count)
        } else {
            writeln!(f, " (end of dictionary)")
        }
    }
}

impl fmt::Display for RandomEntryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(entry) => {
                let (head, definition) = split_headword(&entry.text);
                writeln!(f, "{}", head)?;
                if !definition.is_empty() {
                    writeln!(f, "  {}", definition)?;
                }
                writeln!(f, "\n(#{} of {} candidates)", entry.id, self.candidates)
            }
            None => match &self.search_term {
                Some(term) => writeln!(f, "No loaded entry contains \"{}\".", term),
                None => writeln!(f, "No entries loaded."),
            },
        }
    }
}
