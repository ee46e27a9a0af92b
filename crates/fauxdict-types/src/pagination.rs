use serde::{Deserialize, Serialize};

/// Number of entries appended by one completed batch
pub const BATCH_SIZE: usize = 10;

/// Pagination stops once the log holds this many copies of the source list
pub const CYCLE_CAP: usize = 20;

/// Snapshot of the pagination engine, suitable for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_count: u64,
    pub continuation: bool,
    pub loading: bool,
}
