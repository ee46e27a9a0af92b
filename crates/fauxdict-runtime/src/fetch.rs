use std::path::PathBuf;
use std::time::Duration;

use fauxdict_engine::{Error as EngineError, Result as EngineResult, SourceFetcher};

/// Reads the payload from a local file
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceFetcher for FileFetcher {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> EngineResult<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| EngineError::Fetch(format!("{}: {}", self.path.display(), e)))
    }
}

/// Downloads the payload over HTTP(S)
pub struct HttpFetcher {
    url: String,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl SourceFetcher for HttpFetcher {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> EngineResult<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| EngineError::Fetch(e.to_string()))?;

        client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| EngineError::Fetch(e.to_string()))
    }
}

/// Pick the fetcher for `location`: URLs go over HTTP, anything else is a path.
pub fn fetcher_for(location: &str, timeout: Duration) -> Box<dyn SourceFetcher + Send> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpFetcher::new(location, timeout))
    } else {
        Box::new(FileFetcher::new(crate::config::expand_tilde(location)))
    }
}
