use crate::config::Config;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Resolved once at startup from the config.
    pub font_dirs: Arc<Vec<PathBuf>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let font_dirs = Arc::new(config.font_dirs());
        Self {
            config: Arc::new(config),
            font_dirs,
        }
    }
}
