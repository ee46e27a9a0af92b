use std::path::Path;

use fauxdict_types::Preference;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, ThemeViewModel,
};

pub fn present_theme(
    preference: Preference,
    toggled: bool,
    preference_path: &Path,
) -> CommandResultViewModel<ThemeViewModel> {
    let theme = preference.theme();
    let content = ThemeViewModel {
        theme,
        dark_mode: preference.dark_mode,
        toggled,
        preference_path: preference_path.display().to_string(),
    };

    let result = CommandResultViewModel::new(content);
    if toggled {
        result.with_badge(StatusBadge::success(format!("Switched to {} mode", theme)))
    } else {
        result.with_suggestion(Guidance::new("Switch themes").with_command(cmd::THEME_TOGGLE))
    }
}
