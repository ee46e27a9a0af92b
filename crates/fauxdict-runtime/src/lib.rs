pub mod config;
pub mod error;
pub mod fetch;
pub mod preference;
pub mod session;

pub use config::{Config, PagingConfig, SourceConfig, expand_tilde, resolve_data_dir};
pub use error::{Error, Result};
pub use fetch::{FileFetcher, HttpFetcher, fetcher_for};
pub use preference::FilePreferenceStore;
pub use session::{Session, SessionEvent};
