//! Run configuration.
//!
//! Layers, lowest first: built-in defaults, a TOML file, `REELNAME__*`
//! environment variables (`__` separates sections, e.g.
//! `REELNAME__MATCHING__TITLE_THRESHOLD=85`), and finally `TMDB_API_KEY` for
//! the catalog credential.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::renamer::{
    DEFAULT_STOPWORDS, DEFAULT_VIDEO_EXTENSIONS, EPISODE_THRESHOLD, KeywordNormalizer,
    MatchSettings, RenamerError, Result, Scanner, TITLE_THRESHOLD,
};

/// Environment variable holding the TMDB API key
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

const CONFIG_FILE_NAME: &str = "reelname.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub matching: MatchingConfig,
    pub scan: ScanConfig,
    pub logs: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: Option<String>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.themoviedb.org/3".to_string(),
            language: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum score (0-100) for show and movie titles
    pub title_threshold: f64,
    /// Minimum score (0-100) for episode titles
    pub episode_threshold: f64,
    pub stopwords: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            title_threshold: TITLE_THRESHOLD,
            episode_threshold: EPISODE_THRESHOLD,
            stopwords: DEFAULT_STOPWORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub video_extensions: Vec<String>,
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory holding both record files
    pub directory: PathBuf,
    pub rename_log: String,
    pub error_log: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            rename_log: "rename_log.txt".to_string(),
            error_log: "error_log.txt".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from `reelname.toml` in the user
    /// config directory when no path is given and that file exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(dir) = dirs::config_dir() {
                    let default_path = dir.join("reelname").join(CONFIG_FILE_NAME);
                    builder = builder.add_source(
                        File::from(default_path)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        let mut config: Self = builder
            .add_source(
                Environment::with_prefix("REELNAME")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("matching.stopwords")
                    .with_list_parse_key("scan.video_extensions")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| RenamerError::Config(e.to_string()))?;

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.tmdb.api_key = Some(key);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("matching.title_threshold", self.matching.title_threshold),
            ("matching.episode_threshold", self.matching.episode_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(RenamerError::Config(format!(
                    "{name} must be between 0 and 100, got {value}"
                )));
            }
        }

        if self.scan.video_extensions.is_empty() {
            return Err(RenamerError::Config(
                "scan.video_extensions must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The catalog credential, if one is set and not blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.tmdb
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    #[must_use]
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            normalizer: KeywordNormalizer::new(&self.matching.stopwords),
            title_threshold: self.matching.title_threshold,
            episode_threshold: self.matching.episode_threshold,
        }
    }

    #[must_use]
    pub fn scanner(&self) -> Scanner {
        Scanner::new(&self.scan.video_extensions).follow_links(self.scan.follow_links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.matching.title_threshold, 80.0);
        assert_eq!(config.matching.episode_threshold, 70.0);
        assert!(config.matching.stopwords.iter().any(|w| w == "the"));
        assert_eq!(config.scan.video_extensions.len(), 5);
        assert_eq!(config.logs.rename_log, "rename_log.txt");
        assert_eq!(config.logs.error_log, "error_log.txt");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[matching]\ntitle_threshold = 90\n\n[scan]\nvideo_extensions = [\"mkv\", \"m4v\"]"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.matching.title_threshold, 90.0);
        assert_eq!(config.matching.episode_threshold, 70.0);
        assert_eq!(config.scan.video_extensions, vec!["mkv", "m4v"]);
        assert!(config.scanner().is_video_file(Path::new("a.M4V")));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut config = AppConfig::default();
        config.matching.episode_threshold = 140.0;
        assert!(matches!(config.validate(), Err(RenamerError::Config(_))));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let mut config = AppConfig::default();
        config.tmdb.api_key = Some("   ".to_string());
        assert!(config.api_key().is_none());
        config.tmdb.api_key = Some(" abc ".to_string());
        assert_eq!(config.api_key(), Some("abc"));
    }
}
