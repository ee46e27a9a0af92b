use fauxdict_types::Theme;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ThemeViewModel {
    pub theme: Theme,
    pub dark_mode: bool,
    pub toggled: bool,
    pub preference_path: String,
}
