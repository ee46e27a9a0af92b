use chrono::{DateTime, Utc};
use fauxdict_types::SourceOrigin;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SourceViewModel {
    pub origin: SourceOrigin,
    pub size: usize,
    pub loaded_at: DateTime<Utc>,
    /// First few items, in source order
    pub sample: Vec<String>,
}
