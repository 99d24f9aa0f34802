//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Presentation pacing for the interview ("Architect is typing...").
///
/// The delays are cosmetic only — correctness never depends on them.
#[derive(Debug, Clone, Copy)]
pub struct PacingConfig {
    /// Delay before an assistant prompt is emitted.
    pub typing_delay: Duration,
    /// Delay before a validation re-prompt.
    pub reply_delay: Duration,
    /// Delay before the completion event.
    pub completion_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(1200),
            reply_delay: Duration::from_millis(500),
            completion_delay: Duration::from_millis(2000),
        }
    }
}

impl PacingConfig {
    /// Zero-delay pacing for tests and headless drivers.
    pub fn instant() -> Self {
        Self {
            typing_delay: Duration::ZERO,
            reply_delay: Duration::ZERO,
            completion_delay: Duration::ZERO,
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Directory holding the static landing page assets.
    pub static_dir: PathBuf,
    /// Directory where discovery dossiers are written.
    pub dossier_dir: PathBuf,
    /// Interview pacing delays.
    pub pacing: PacingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            static_dir: PathBuf::from("site"),
            dossier_dir: PathBuf::from("data/dossiers"),
            pacing: PacingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// Recognized: `PORT`, `ALPHAREACH_STATIC_DIR`, `ALPHAREACH_DOSSIER_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("not a valid port number: {port}"),
            })?;
        }
        if let Ok(dir) = std::env::var("ALPHAREACH_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("ALPHAREACH_DOSSIER_DIR") {
            config.dossier_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
