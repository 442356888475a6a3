use crate::renamer::{
    Result,
    types::{Episode, MovieSummary, ShowDetails, ShowSummary},
};
use async_trait::async_trait;

/// Read-only view of a remote metadata catalog.
///
/// Every call may fail (network, auth, rate limit); failures are returned to
/// the caller rather than defaulted to empty results.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Catalog identifier (e.g., "tmdb")
    fn id(&self) -> &'static str;

    /// Search TV shows by free text
    async fn search_shows(&self, query: &str) -> Result<Vec<ShowSummary>>;

    /// Full show record including its season list
    async fn show_details(&self, show_id: i64) -> Result<ShowDetails>;

    /// Episodes of one season
    async fn season_episodes(&self, show_id: i64, season: u32) -> Result<Vec<Episode>>;

    /// Search movies by free text
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>>;
}
