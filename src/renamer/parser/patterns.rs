use regex::Regex;
use std::sync::LazyLock;

/// Pre-compiled regex patterns for filename parsing
pub struct Patterns {
    // Segmenter cut points
    pub episode_marker: Regex, // .S03E12, .3x12, .E07
    pub quality_tag: Regex,    // .1080p, .WEB-DL, .HDTV, .DD5.1, .BluRay
    pub release_year: Regex,   // .2010 (movies only)

    // Season/episode patterns (ordered by specificity), ASCII digits only
    pub season_episode: Regex,   // S03E12
    pub season_x_episode: Regex, // 3x12
    pub episode_only: Regex,     // E07
    pub three_digit: Regex,      // 312

    // Keyword separators
    pub non_word: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            episode_marker: Regex::new(r"[._\s](?:[sS]?[0-9]{1,2}[xXeE][0-9]{1,2}|[eE][0-9]{1,2})")
                .expect("Invalid episode_marker regex"),
            quality_tag: Regex::new(r"(?i)[._\s](?:[0-9]{3,4}p|WEB[-_.]DL|HDTV|DD[0-9]\.[0-9]|BluRay)")
                .expect("Invalid quality_tag regex"),
            release_year: Regex::new(r"[._\s](?:19|20)[0-9]{2}(?:[._\s]|$)")
                .expect("Invalid release_year regex"),

            season_episode: Regex::new(r"[sS]([0-9]{1,2})[eE]([0-9]{1,2})")
                .expect("Invalid season_episode regex"),
            season_x_episode: Regex::new(r"([0-9]{1,2})[xX]([0-9]{1,2})")
                .expect("Invalid season_x_episode regex"),
            episode_only: Regex::new(r"[eE]([0-9]{1,2})").expect("Invalid episode_only regex"),
            three_digit: Regex::new(r"\b([0-9]{3})\b").expect("Invalid three_digit regex"),

            non_word: Regex::new(r"[\W_]+").expect("Invalid non_word regex"),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Global singleton for patterns
pub static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);
