mod filename;
mod patterns;

pub use filename::{EpisodeHint, Parser, TitleHint};
pub(crate) use patterns::PATTERNS;
