//! Runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use folio_core::Section;

/// Portfolio configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub account whose public pushes are counted.
    pub github_user: String,

    /// Skip the network call and use the fallback commit count.
    pub offline: bool,

    /// Section the document opens at.
    pub start_section: Option<Section>,

    /// How long the UI waits for terminal input per loop iteration.
    pub tick_rate: Duration,

    /// Where tracing output goes.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_user: "tahmeedt".to_string(),
            offline: false,
            start_section: None,
            tick_rate: Duration::from_millis(50),
            log_file: PathBuf::from("/tmp/folio.log"),
        }
    }
}
