/// Player configuration
use crate::error::{PlayerError, Result};
use memora_library::local::{DEFAULT_ARTIST, DEFAULT_ARTWORK_URL, DEFAULT_EXCLUDED_EXTENSIONS};
use memora_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "memora.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySettings {
    #[serde(default = "default_artist")]
    pub default_artist: String,

    #[serde(default = "default_artwork")]
    pub default_artwork: Option<String>,

    #[serde(default = "default_exclude_extensions")]
    pub exclude_extensions: Vec<String>,

    #[serde(default)]
    pub follow_links: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// Used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl PlayerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `memora.toml` is read if
    /// present. `MEMORA_`-prefixed variables override both, with `__`
    /// between sections (`MEMORA_PLAYBACK__EVENT_BUFFER=64`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("MEMORA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| PlayerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| PlayerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.library.default_artist.trim().is_empty() {
            return Err(PlayerError::Config(
                "library.default_artist must not be empty".to_string(),
            ));
        }

        if self.playback.event_buffer == 0 {
            return Err(PlayerError::Config(
                "playback.event_buffer must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            default_artist: default_artist(),
            default_artwork: default_artwork(),
            exclude_extensions: default_exclude_extensions(),
            follow_links: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

// Default values
fn default_artist() -> String {
    DEFAULT_ARTIST.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_artwork() -> Option<String> {
    Some(DEFAULT_ARTWORK_URL.to_string())
}

fn default_exclude_extensions() -> Vec<String> {
    DEFAULT_EXCLUDED_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_filter() -> String {
    "memora_player=info,memora_playback=info".to_string()
}
