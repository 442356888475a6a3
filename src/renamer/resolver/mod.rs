mod movie;
mod tv;

pub use movie::MovieResolver;
pub use tv::{SeasonFetch, TvResolver};

use crate::renamer::{
    KeywordNormalizer, Result,
    matcher::{EPISODE_THRESHOLD, TITLE_THRESHOLD},
    types::{MediaFile, RenamePlan},
};
use async_trait::async_trait;

/// Inputs shared by every resolver
#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Turns title hints into catalog queries
    pub normalizer: KeywordNormalizer,
    /// Minimum fuzzy score for show and movie titles
    pub title_threshold: f64,
    /// Minimum fuzzy score for episode titles
    pub episode_threshold: f64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            normalizer: KeywordNormalizer::default(),
            title_threshold: TITLE_THRESHOLD,
            episode_threshold: EPISODE_THRESHOLD,
        }
    }
}

/// Turns one media file into the rename that gives it a canonical name.
///
/// A file the catalog cannot place fails with one of the not-found errors;
/// any other error means the lookup itself broke.
#[async_trait]
pub trait MatchResolver: Send + Sync {
    /// Short label for logs ("tv", "movie")
    fn kind(&self) -> &'static str;

    /// Identifier of the catalog consulted
    fn catalog_id(&self) -> &'static str;

    async fn plan(&self, file: &MediaFile) -> Result<RenamePlan>;
}

fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
