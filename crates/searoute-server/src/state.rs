//! Shared, read-only application state.

use searoute_core::{PortDirectory, RouteEngine, RouteError, SynthesisConfig};

use crate::config::Config;

/// Everything handlers need. Nothing here is mutated after startup, so the
/// state is shared as a plain `Arc<AppState>` without locks.
pub struct AppState {
    directory: PortDirectory,
    synthesis: SynthesisConfig,
    config: Config,
}

impl AppState {
    /// Build state over the built-in catalog, validating the synthesis config.
    pub fn new(config: Config) -> Result<Self, RouteError> {
        Self::with_directory(PortDirectory::builtin(), config)
    }

    pub fn with_directory(directory: PortDirectory, config: Config) -> Result<Self, RouteError> {
        let synthesis = config.synthesis_config();
        synthesis.validate()?;
        Ok(Self {
            directory,
            synthesis,
            config,
        })
    }

    pub fn directory(&self) -> &PortDirectory {
        &self.directory
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> Result<RouteEngine<'_>, RouteError> {
        RouteEngine::with_config(&self.directory, self.synthesis.clone())
    }
}
