use super::patterns::{PATTERNS, Patterns};
use regex::Captures;

/// Portion of a filename taken to be the show or movie title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleHint(String);

impl TitleHint {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TitleHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The full base filename together with whatever season/episode it names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeHint {
    /// Base filename, used verbatim for episode title comparison
    pub text: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

pub struct Parser;

impl Parser {
    /// Title portion of a TV filename base.
    ///
    /// Cuts before the first season/episode marker; failing that, before the
    /// first release-quality tag; failing that, keeps the whole base. Markers
    /// are checked first so digits that look like quality tags never truncate
    /// a title that also carries an episode marker.
    #[must_use]
    pub fn title_hint(base: &str) -> TitleHint {
        let patterns = &*PATTERNS;

        if let Some(m) = patterns.episode_marker.find(base) {
            return TitleHint(base[..m.start()].to_string());
        }

        if let Some(m) = patterns.quality_tag.find(base) {
            return TitleHint(base[..m.start()].to_string());
        }

        TitleHint(base.to_string())
    }

    /// Title portion of a movie filename base: the TV title hint, further cut
    /// before a release year that follows the title.
    #[must_use]
    pub fn movie_title_hint(base: &str) -> TitleHint {
        let hint = Self::title_hint(base);
        match PATTERNS.release_year.find(hint.as_str()) {
            Some(m) if m.start() > 0 => TitleHint(hint.as_str()[..m.start()].to_string()),
            _ => hint,
        }
    }

    /// Episode hint for a base filename
    #[must_use]
    pub fn episode_hint(base: &str) -> EpisodeHint {
        let (season, episode) = Self::extract_season_episode(base);
        EpisodeHint {
            text: base.to_string(),
            season,
            episode,
        }
    }

    /// Season and episode numbers named in `hint`.
    ///
    /// Patterns are tried from most to least specific and the first hit wins,
    /// so `S03E12` is never read as the bare triple `312`.
    #[must_use]
    pub fn extract_season_episode(hint: &str) -> (Option<u32>, Option<u32>) {
        let patterns: &Patterns = &PATTERNS;

        if let Some(caps) = patterns.season_episode.captures(hint) {
            return (number(&caps, 1), number(&caps, 2));
        }

        if let Some(caps) = patterns.season_x_episode.captures(hint) {
            return (number(&caps, 1), number(&caps, 2));
        }

        if let Some(caps) = patterns.episode_only.captures(hint) {
            return (None, number(&caps, 1));
        }

        if let Some(caps) = patterns.three_digit.captures(hint)
            && let Some(digits) = caps.get(1).map(|m| m.as_str())
        {
            // first digit is the season, the other two the episode
            let (season, episode) = digits.split_at(1);
            return (season.parse().ok(), episode.parse().ok());
        }

        (None, None)
    }
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_hint_cuts_at_season_marker() {
        let hint = Parser::title_hint("Dexters.Laboratory.S03E12.Jeepers.Creepers");
        assert_eq!(hint.as_str(), "Dexters.Laboratory");
    }

    #[test]
    fn test_title_hint_cuts_at_x_marker() {
        let hint = Parser::title_hint("Friends 1x01 The One Where Monica Gets a Roommate");
        assert_eq!(hint.as_str(), "Friends");
    }

    #[test]
    fn test_title_hint_cuts_at_lone_episode_marker() {
        let hint = Parser::title_hint("Planet_Earth_E07_Grasslands");
        assert_eq!(hint.as_str(), "Planet_Earth");
    }

    #[test]
    fn test_title_hint_cuts_at_quality_tag() {
        assert_eq!(Parser::title_hint("Some.Show.1080p.WEB-DL").as_str(), "Some.Show");
        assert_eq!(Parser::title_hint("Other Show HDTV x264").as_str(), "Other Show");
        assert_eq!(Parser::title_hint("Movie.Name.bluray").as_str(), "Movie.Name");
    }

    #[test]
    fn test_marker_takes_priority_over_quality_tag() {
        let hint = Parser::title_hint("Show.720p.Edition.S01E02.1080p");
        assert_eq!(hint.as_str(), "Show.720p.Edition");
    }

    #[test]
    fn test_title_hint_without_markers_is_whole_base() {
        assert_eq!(Parser::title_hint("Just A Title").as_str(), "Just A Title");
    }

    #[test]
    fn test_movie_title_hint_cuts_year() {
        assert_eq!(Parser::movie_title_hint("Inception.2010.1080p").as_str(), "Inception");
        assert_eq!(
            Parser::movie_title_hint("The.Matrix.1999.Remastered").as_str(),
            "The.Matrix"
        );
    }

    #[test]
    fn test_movie_title_hint_keeps_leading_year() {
        assert_eq!(Parser::movie_title_hint("2012.2009.BluRay").as_str(), "2012");
        assert_eq!(Parser::movie_title_hint("1917").as_str(), "1917");
    }

    #[test]
    fn test_extract_season_episode_forms() {
        assert_eq!(Parser::extract_season_episode("S03E12"), (Some(3), Some(12)));
        assert_eq!(Parser::extract_season_episode("3x12"), (Some(3), Some(12)));
        assert_eq!(Parser::extract_season_episode("E07"), (None, Some(7)));
        assert_eq!(Parser::extract_season_episode("312"), (Some(3), Some(12)));
        assert_eq!(Parser::extract_season_episode("no numbers here"), (None, None));
    }

    #[test]
    fn test_extract_prefers_specific_pattern() {
        assert_eq!(
            Parser::extract_season_episode("Show.S03E12.Title.101"),
            (Some(3), Some(12))
        );
        assert_eq!(
            Parser::extract_season_episode("show.s1e5.mkv"),
            (Some(1), Some(5))
        );
    }

    #[test]
    fn test_bare_triple_needs_word_boundary() {
        assert_eq!(Parser::extract_season_episode("Show 1024 Title"), (None, None));
        assert_eq!(Parser::extract_season_episode("Show - 205 - Title"), (Some(2), Some(5)));
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        assert_eq!(
            Parser::extract_season_episode("Show \u{0663}\u{0661}\u{0662} Title"),
            (None, None)
        );
        assert_eq!(
            Parser::extract_season_episode("Show \u{FF13}\u{FF11}\u{FF12} Title"),
            (None, None)
        );
        assert_eq!(
            Parser::title_hint("Show.S\u{0663}E\u{0661}\u{0662}.Title").as_str(),
            "Show.S\u{0663}E\u{0661}\u{0662}.Title"
        );
    }

    #[test]
    fn test_episode_hint_keeps_full_base() {
        let hint = Parser::episode_hint("Dexters.Laboratory.S03E12.Jeepers.Creepers");
        assert_eq!(hint.text, "Dexters.Laboratory.S03E12.Jeepers.Creepers");
        assert_eq!(hint.season, Some(3));
        assert_eq!(hint.episode, Some(12));
    }
}
