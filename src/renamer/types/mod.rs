mod catalog;
mod media;

pub use catalog::{Episode, MovieSummary, SeasonSummary, ShowDetails, ShowSummary};
pub use media::{MediaFile, RenamePlan};
