use std::path::{Path, PathBuf};

use anyhow::Result;
use fauxdict_runtime::{Config, Session};
use serde::Serialize;
use std::fmt::Display;

use crate::args::OutputFormat;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Everything a handler needs: where data lives, how to load, how to print
pub struct HandlerContext {
    pub format: OutputFormat,
    pub data_dir: PathBuf,
    pub config: Config,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, data_dir: PathBuf, config: Config) -> Self {
        Self {
            format,
            data_dir,
            config,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// New session with the source loader already running
    pub fn start_session(&self) -> Session {
        let mut session = Session::from_config(&self.config, &self.data_dir);
        session.start_loading(&self.config, &self.data_dir);
        session
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}
