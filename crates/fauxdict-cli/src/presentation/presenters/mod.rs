mod entry;
mod screen;
mod source;
mod theme;

pub use entry::{present_entry_list, present_random_entry};
pub use screen::present_screen;
pub use source::present_source;
pub use theme::present_theme;
