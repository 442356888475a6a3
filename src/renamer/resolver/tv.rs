use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{MatchResolver, MatchSettings, same_title};
use crate::renamer::{
    FuzzyMatcher, RenamerError, Result,
    parser::{EpisodeHint, Parser},
    provider::CatalogClient,
    types::{Episode, MediaFile, RenamePlan, ShowDetails, ShowSummary},
};

/// Outcome of fetching one season's episode list
#[derive(Debug)]
pub enum SeasonFetch {
    /// Episodes, each tagged with the season they were listed under
    Fetched { season: u32, episodes: Vec<Episode> },
    /// The season contributes nothing to the episode pool
    Skipped { season: Option<u32>, reason: String },
}

/// Resolves TV episode files against a catalog
pub struct TvResolver {
    catalog: Arc<dyn CatalogClient>,
    settings: MatchSettings,
}

impl TvResolver {
    pub fn new(catalog: Arc<dyn CatalogClient>, settings: MatchSettings) -> Self {
        Self { catalog, settings }
    }

    /// Pick one show from search results.
    ///
    /// A case-insensitive title equal to the raw title hint wins outright;
    /// otherwise the normalized query is fuzzy-matched against the titles.
    #[must_use]
    pub fn resolve_show<'a>(
        &self,
        title_hint: &str,
        query: &str,
        shows: &'a [ShowSummary],
    ) -> Option<&'a ShowSummary> {
        if let Some(exact) = shows
            .iter()
            .find(|s| s.title().is_ok_and(|t| same_title(t, title_hint)))
        {
            return Some(exact);
        }

        let (entries, titles): (Vec<&ShowSummary>, Vec<&str>) = shows
            .iter()
            .filter_map(|s| s.title().ok().map(|t| (s, t)))
            .unzip();

        FuzzyMatcher::best_match(query, &titles, self.settings.title_threshold).map(|best| {
            debug!("Fuzzy show match '{}' ({:.1})", titles[best.index], best.score);
            entries[best.index]
        })
    }

    /// Fetch every season listed in `details`, one at a time
    pub async fn fetch_seasons(&self, details: &ShowDetails) -> Vec<SeasonFetch> {
        let mut fetches = Vec::with_capacity(details.seasons.len());

        for summary in &details.seasons {
            let Some(season) = summary.season_number else {
                fetches.push(SeasonFetch::Skipped {
                    season: None,
                    reason: "season has no number".to_string(),
                });
                continue;
            };

            let fetch = match self.catalog.season_episodes(details.id, season).await {
                Ok(episodes) => SeasonFetch::Fetched {
                    season,
                    episodes: episodes.into_iter().map(|e| e.in_season(season)).collect(),
                },
                Err(e) => SeasonFetch::Skipped {
                    season: Some(season),
                    reason: e.to_string(),
                },
            };
            fetches.push(fetch);
        }

        fetches
    }

    /// Pool the episodes of all fetched seasons, dropping skipped ones
    #[must_use]
    pub fn episode_pool(show_id: i64, fetches: Vec<SeasonFetch>) -> Vec<Episode> {
        let mut pool = Vec::new();

        for fetch in fetches {
            match fetch {
                SeasonFetch::Fetched { episodes, .. } => pool.extend(episodes),
                SeasonFetch::Skipped { season, reason } => {
                    warn!("Skipping season {:?} of show {}: {}", season, show_id, reason);
                }
            }
        }

        pool
    }

    /// Pick one episode from the pool.
    ///
    /// An exact (season, episode) match on numbers parsed from the filename
    /// wins; only when that fails are episode titles fuzzy-matched.
    #[must_use]
    pub fn resolve_episode<'a>(&self, hint: &EpisodeHint, pool: &'a [Episode]) -> Option<&'a Episode> {
        if let (Some(season), Some(number)) = (hint.season, hint.episode)
            && let Some(exact) = pool.iter().find(|ep| {
                ep.season().is_ok_and(|s| s == season) && ep.number().is_ok_and(|n| n == number)
            })
        {
            return Some(exact);
        }

        let query = self.settings.normalizer.query(&hint.text);
        let (entries, titles): (Vec<&Episode>, Vec<&str>) = pool
            .iter()
            .filter_map(|ep| ep.title().ok().map(|t| (ep, t)))
            .unzip();

        FuzzyMatcher::best_match(&query, &titles, self.settings.episode_threshold).map(|best| {
            debug!("Fuzzy episode match '{}' ({:.1})", titles[best.index], best.score);
            entries[best.index]
        })
    }
}

#[async_trait]
impl MatchResolver for TvResolver {
    fn kind(&self) -> &'static str {
        "tv"
    }

    fn catalog_id(&self) -> &'static str {
        self.catalog.id()
    }

    async fn plan(&self, file: &MediaFile) -> Result<RenamePlan> {
        let title_hint = Parser::title_hint(&file.base);
        let query = self.settings.normalizer.query(title_hint.as_str());
        debug!("Show hint '{}' -> query '{}'", title_hint, query);

        let shows = self.catalog.search_shows(&query).await?;
        if shows.is_empty() {
            return Err(RenamerError::ShowNotFound);
        }

        let show = self
            .resolve_show(title_hint.as_str(), &query, &shows)
            .ok_or(RenamerError::ShowNotFound)?;
        let show_title = show.display_title()?;
        info!("Matched show '{}' (id {}) for {}", show_title, show.id, file.file_name());

        let details = self.catalog.show_details(show.id).await?;
        let fetches = self.fetch_seasons(&details).await;
        let pool = Self::episode_pool(details.id, fetches);

        let hint = Parser::episode_hint(&file.base);
        let episode = self
            .resolve_episode(&hint, &pool)
            .ok_or(RenamerError::EpisodeNotFound)?;

        let new_base = format!(
            "{} - S{:02}E{:02} - {}",
            show_title,
            episode.season()?,
            episode.number()?,
            episode.title()?
        );

        Ok(file.plan_rename(&new_base))
    }
}
