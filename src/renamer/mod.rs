mod keywords;
mod matcher;
mod organizer;
mod parser;
mod provider;
mod resolver;
mod scanner;
mod types;


pub use keywords::{DEFAULT_STOPWORDS, KeywordNormalizer};
pub use matcher::{EPISODE_THRESHOLD, FuzzyMatcher, ScoredCandidate, TITLE_THRESHOLD};
pub use organizer::{BatchRenameResult, FileOutcome, Organizer, OrganizerConfig, RenameMode};
pub use parser::{EpisodeHint, Parser, TitleHint};
pub use provider::{CatalogClient, HttpClient, TmdbCatalog};
pub use resolver::{MatchResolver, MatchSettings, MovieResolver, SeasonFetch, TvResolver};
pub use scanner::{DEFAULT_VIDEO_EXTENSIONS, Scanner};
pub use types::{
    Episode, MediaFile, MovieSummary, RenamePlan, SeasonSummary, ShowDetails, ShowSummary,
};

use std::path::PathBuf;

/// Renamer result type
pub type Result<T> = std::result::Result<T, RenamerError>;

/// Renamer error types
#[derive(Debug, thiserror::Error)]
pub enum RenamerError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{entry} record has none of the fields: {field}")]
    MissingField {
        entry: &'static str,
        field: &'static str,
    },

    #[error("show not found")]
    ShowNotFound,

    #[error("episode not found")]
    EpisodeNotFound,

    #[error("movie not found")]
    MovieNotFound,

    #[error("Target already exists: {0:?}")]
    TargetExists(PathBuf),

    #[error("Invalid media path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RenamerError {
    /// Whether this failure means the catalog had nothing matching the file
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ShowNotFound | Self::EpisodeNotFound | Self::MovieNotFound
        )
    }
}
