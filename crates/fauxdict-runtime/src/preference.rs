use std::path::{Path, PathBuf};

use fauxdict_engine::{Error as EngineError, PreferenceStore, Result as EngineResult};
use fauxdict_types::Preference;

/// Keeps the dark mode flag in `<data_dir>/preferences.toml` as `darkMode = <bool>`
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Preference {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Preference::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "cannot read preferences");
                return Preference::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "ignoring malformed preferences");
            Preference::default()
        })
    }

    fn save(&mut self, preference: Preference) -> EngineResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::Persist(e.to_string()))?;
        }

        let content =
            toml::to_string(&preference).map_err(|e| EngineError::Persist(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| EngineError::Persist(e.to_string()))?;
        tracing::debug!(dark_mode = preference.dark_mode, "preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_light_mode() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FilePreferenceStore::in_dir(temp_dir.path());
        assert!(!store.load().dark_mode);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;
        let mut store = FilePreferenceStore::in_dir(&temp_dir.path().join("nested"));

        store.save(Preference::new(true)).unwrap();
        let written = std::fs::read_to_string(store.path())?;
        assert_eq!(written.trim(), "darkMode = true");
        assert!(store.load().dark_mode);
        Ok(())
    }

    #[test]
    fn test_garbage_file_is_light_mode() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FilePreferenceStore::in_dir(temp_dir.path());
        std::fs::write(store.path(), "darkMode = \"maybe\"")?;
        assert!(!store.load().dark_mode);
        Ok(())
    }
}
