//! Catalog records as the metadata service returns them.
//!
//! Depending on the endpoint a concept may live under one of two keys (a show
//! is `name` in one place and `title` in another, an episode number may be
//! `episode_number` or `number`). Every such field is optional here and the
//! accessors try the keys in a fixed order, failing with
//! [`RenamerError::MissingField`] when none is present.

use serde::{Deserialize, Serialize};

use crate::renamer::{RenamerError, Result};

fn first_of<'a>(
    fields: [Option<&'a String>; 2],
    entry: &'static str,
    field: &'static str,
) -> Result<&'a str> {
    fields
        .into_iter()
        .flatten()
        .map(String::as_str)
        .next()
        .ok_or(RenamerError::MissingField { entry, field })
}

/// Show as returned by a TV search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
}

impl ShowSummary {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Title used for matching: `name`, then `title`
    pub fn title(&self) -> Result<&str> {
        first_of([self.name.as_ref(), self.title.as_ref()], "show", "name, title")
    }

    /// Title used in the new filename: `name`, then `original_name`
    pub fn display_title(&self) -> Result<&str> {
        first_of(
            [self.name.as_ref(), self.original_name.as_ref()],
            "show",
            "name, original_name",
        )
    }
}

/// Season reference inside show details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    #[serde(default)]
    pub season_number: Option<u32>,
}

impl SeasonSummary {
    #[must_use]
    pub fn numbered(season_number: u32) -> Self {
        Self {
            season_number: Some(season_number),
        }
    }
}

/// Full show record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowDetails {
    pub id: i64,
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
}

/// Episode record from a season listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub season: Option<u32>,
}

impl Episode {
    pub fn new(season: u32, episode: u32, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            episode_number: Some(episode),
            season_number: Some(season),
            ..Default::default()
        }
    }

    /// Tag the episode with the season whose listing it came from
    #[must_use]
    pub fn in_season(mut self, season: u32) -> Self {
        self.season_number = Some(season);
        self
    }

    /// `name`, then `title`
    pub fn title(&self) -> Result<&str> {
        first_of([self.name.as_ref(), self.title.as_ref()], "episode", "name, title")
    }

    /// `episode_number`, then `number`
    pub fn number(&self) -> Result<u32> {
        self.episode_number
            .or(self.number)
            .ok_or(RenamerError::MissingField {
                entry: "episode",
                field: "episode_number, number",
            })
    }

    /// `season_number`, then `season`
    pub fn season(&self) -> Result<u32> {
        self.season_number
            .or(self.season)
            .ok_or(RenamerError::MissingField {
                entry: "episode",
                field: "season_number, season",
            })
    }
}

/// Movie as returned by a movie search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl MovieSummary {
    pub fn new(id: i64, title: impl Into<String>, release_date: Option<&str>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            release_date: release_date.map(str::to_string),
            ..Default::default()
        }
    }

    /// `title`, then `name`
    pub fn title(&self) -> Result<&str> {
        first_of([self.title.as_ref(), self.name.as_ref()], "movie", "title, name")
    }

    /// First four characters of the release date, empty when unknown
    #[must_use]
    pub fn year(&self) -> String {
        self.release_date
            .as_deref()
            .map(|d| d.chars().take(4).collect())
            .unwrap_or_default()
    }
}
