pub mod entry;
pub mod pagination;
pub mod preference;
pub mod source;

pub use entry::{Entry, EntryId};
pub use pagination::{BATCH_SIZE, CYCLE_CAP, PaginationState};
pub use preference::{DARK_MODE_KEY, Preference, Theme};
pub use source::{DEFAULT_LIST_FIELD, FALLBACK_ENTRIES, SourceList, SourceOrigin};
