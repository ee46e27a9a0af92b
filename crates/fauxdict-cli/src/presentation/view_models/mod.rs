pub mod common;
pub mod entry;
pub mod result;
pub mod screen;
pub mod source;
pub mod theme;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use entry::{EntryListViewModel, EntryViewModel, RandomEntryViewModel};
pub use result::CommandResultViewModel;
pub use screen::{LoadStatus, ScreenViewModel};
pub use source::SourceViewModel;
pub use theme::ThemeViewModel;
