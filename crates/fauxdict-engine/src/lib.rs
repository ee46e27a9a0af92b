// Engine module - the browser's view model (source fallback, pagination, filtering, UI state)
// This layer sits between the plain data types and the runtime that drives it

pub mod coordinator;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod source;

pub use coordinator::{Coordinator, DEFAULT_SCROLL_THRESHOLD, PreferenceStore};
pub use error::{Error, Result};
pub use filter::{FilterView, filter_entries};
pub use pagination::{BatchTicket, Paginator, Phase};
pub use source::{SourceFetcher, load, parse_payload};
