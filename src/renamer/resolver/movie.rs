use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{MatchResolver, MatchSettings, same_title};
use crate::renamer::{
    FuzzyMatcher, RenamerError, Result,
    parser::Parser,
    provider::CatalogClient,
    types::{MediaFile, MovieSummary, RenamePlan},
};

/// Resolves movie files against a catalog
pub struct MovieResolver {
    catalog: Arc<dyn CatalogClient>,
    settings: MatchSettings,
}

impl MovieResolver {
    pub fn new(catalog: Arc<dyn CatalogClient>, settings: MatchSettings) -> Self {
        Self { catalog, settings }
    }

    /// Pick one movie from search results.
    ///
    /// A title equal to the raw base name (ignoring case) wins outright;
    /// otherwise the keywords of the movie title hint are fuzzy-matched.
    #[must_use]
    pub fn resolve_movie<'a>(&self, base: &str, movies: &'a [MovieSummary]) -> Option<&'a MovieSummary> {
        if let Some(exact) = movies
            .iter()
            .find(|m| m.title().is_ok_and(|t| same_title(t, base)))
        {
            return Some(exact);
        }

        let query = self
            .settings
            .normalizer
            .query(Parser::movie_title_hint(base).as_str());
        let (entries, titles): (Vec<&MovieSummary>, Vec<&str>) = movies
            .iter()
            .filter_map(|m| m.title().ok().map(|t| (m, t)))
            .unzip();

        FuzzyMatcher::best_match(&query, &titles, self.settings.title_threshold).map(|best| {
            debug!("Fuzzy movie match '{}' ({:.1})", titles[best.index], best.score);
            entries[best.index]
        })
    }
}

#[async_trait]
impl MatchResolver for MovieResolver {
    fn kind(&self) -> &'static str {
        "movie"
    }

    fn catalog_id(&self) -> &'static str {
        self.catalog.id()
    }

    async fn plan(&self, file: &MediaFile) -> Result<RenamePlan> {
        let movies = self.catalog.search_movies(&file.base).await?;

        let movie = self
            .resolve_movie(&file.base, &movies)
            .ok_or(RenamerError::MovieNotFound)?;
        let title = movie.title()?;
        info!("Matched movie '{}' (id {}) for {}", title, movie.id, file.file_name());

        let new_base = format!("{} ({})", title, movie.year());
        Ok(file.plan_rename(&new_base))
    }
}
