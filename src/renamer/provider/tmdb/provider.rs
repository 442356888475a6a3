use super::api_types::{SearchResponse, SeasonDetails};
use crate::renamer::{
    Result,
    provider::{CatalogClient, HttpClient},
    types::{Episode, MovieSummary, ShowDetails, ShowSummary},
};
use async_trait::async_trait;
use tracing::debug;

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// The Movie Database catalog
pub struct TmdbCatalog {
    client: HttpClient,
    api_key: String,
    language: Option<String>,
}

impl TmdbCatalog {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, TMDB_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(base_url)?,
            api_key: api_key.into(),
            language: None,
        })
    }

    /// Preferred language for titles (e.g., "en-US")
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<T> {
        let mut params: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        if let Some(ref language) = self.language {
            params.push(("language", language.as_str()));
        }
        params.extend_from_slice(extra_params);

        self.client.get_with_params(endpoint, &params).await
    }
}

#[async_trait]
impl CatalogClient for TmdbCatalog {
    fn id(&self) -> &'static str {
        "tmdb"
    }

    async fn search_shows(&self, query: &str) -> Result<Vec<ShowSummary>> {
        let response: SearchResponse<ShowSummary> =
            self.request("/search/tv", &[("query", query)]).await?;
        debug!(
            "TMDB tv search '{}': {} of {} results",
            query,
            response.results.len(),
            response.total_results
        );
        Ok(response.results)
    }

    async fn show_details(&self, show_id: i64) -> Result<ShowDetails> {
        let endpoint = format!("/tv/{show_id}");
        self.request(&endpoint, &[]).await
    }

    async fn season_episodes(&self, show_id: i64, season: u32) -> Result<Vec<Episode>> {
        let endpoint = format!("/tv/{show_id}/season/{season}");
        let details: SeasonDetails = self.request(&endpoint, &[]).await?;
        debug!(
            "TMDB show {} season {:?}: {} episodes",
            show_id,
            details.season_number,
            details.episodes.len()
        );
        Ok(details.episodes)
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let response: SearchResponse<MovieSummary> =
            self.request("/search/movie", &[("query", query)]).await?;
        debug!(
            "TMDB movie search '{}': {} of {} results",
            query,
            response.results.len(),
            response.total_results
        );
        Ok(response.results)
    }
}
