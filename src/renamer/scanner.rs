use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Video extensions handled unless configured otherwise
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi", "mov", "wmv"];

/// Scanner for finding video files
#[derive(Debug, Clone)]
pub struct Scanner {
    extensions: HashSet<String>,
    follow_links: bool,
}

impl Scanner {
    /// Scanner accepting the given extensions (with or without leading dot,
    /// any case)
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
            follow_links: false,
        }
    }

    #[must_use]
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Whether `path` has one of the accepted extensions
    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e.to_lowercase()))
    }

    /// Recursively collect video files under `root`, in path order
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file() && self.is_video_file(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();

        files.sort();
        files
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_EXTENSIONS)
    }
}
