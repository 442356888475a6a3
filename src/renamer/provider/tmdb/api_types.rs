use serde::Deserialize;

use crate::renamer::types::Episode;

// Search responses
#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_results: i32,
}

// Season listing
#[derive(Debug, Deserialize)]
pub struct SeasonDetails {
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}
