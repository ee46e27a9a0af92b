use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which the dark mode flag is persisted
pub const DARK_MODE_KEY: &str = "darkMode";

/// The one durable user preference: whether dark mode is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    #[serde(rename = "darkMode", default)]
    pub dark_mode: bool,
}

impl Preference {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }

    pub fn theme(self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}
