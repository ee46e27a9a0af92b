use fauxdict_types::PaginationState;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryViewModel {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EntryListViewModel {
    pub entries: Vec<EntryViewModel>,
    /// Entries in the log before filtering
    pub total_loaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    pub pagination: PaginationState,
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct RandomEntryViewModel {
    pub entry: Option<EntryViewModel>,
    /// How many visible entries the pick was drawn from
    pub candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}
