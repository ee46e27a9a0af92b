use fauxdict_types::{SourceList, SourceOrigin};

use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, SourceViewModel, StatusBadge,
};

const SAMPLE_SIZE: usize = 3;

pub fn present_source(source: &SourceList) -> CommandResultViewModel<SourceViewModel> {
    let content = SourceViewModel {
        origin: source.origin().clone(),
        size: source.len(),
        loaded_at: source.loaded_at(),
        sample: source.items().iter().take(SAMPLE_SIZE).cloned().collect(),
    };

    let result = CommandResultViewModel::new(content);
    match source.origin() {
        SourceOrigin::Payload { .. } => {
            let label = if source.len() == 1 {
                "1 word loaded".to_string()
            } else {
                format!("{} words loaded", source.len())
            };
            result.with_badge(StatusBadge::success(label))
        }
        SourceOrigin::Fallback { .. } => result
            .with_badge(StatusBadge::warning("Using the built-in word list"))
            .with_suggestion(
                Guidance::new("Point fauxdict at a word list")
                    .with_command(fmt::list_source("https://example.com/words.json")),
            ),
    }
}
