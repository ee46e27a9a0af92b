use std::fmt;

use crate::presentation::view_models::ThemeViewModel;

impl fmt::Display for ThemeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Theme: {}", self.theme)?;
        writeln!(f, "Stored in: {}", self.preference_path)
    }
}
