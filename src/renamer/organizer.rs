//! Rename driver - walk a directory and give each video file its canonical name

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{MatchResolver, MediaFile, RenamePlan, RenamerError, Result, Scanner};
use crate::logging::RunLogs;

/// Which resolver a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameMode {
    #[default]
    Tv,
    Movie,
}

impl std::fmt::Display for RenameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tv => write!(f, "tv"),
            Self::Movie => write!(f, "movie"),
        }
    }
}

impl std::str::FromStr for RenameMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tv" | "show" | "shows" => Ok(Self::Tv),
            "movie" | "movies" | "film" => Ok(Self::Movie),
            _ => Err(format!("Unknown type: {s} (expected tv or movie)")),
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Default)]
pub struct OrganizerConfig {
    /// Directory to walk
    pub root: PathBuf,
    /// Compute and log renames without touching the filesystem
    pub dry_run: bool,
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// File was renamed
    Renamed(RenamePlan),
    /// Rename was computed and logged only
    Simulated(RenamePlan),
    /// File already has its canonical name
    Unchanged(PathBuf),
}

/// Batch rename result
#[derive(Debug, Default)]
pub struct BatchRenameResult {
    /// Renamed (or, in a dry run, would-be renamed) files
    pub renamed: Vec<RenamePlan>,
    /// Files already correctly named
    pub unchanged: Vec<PathBuf>,
    /// Files that could not be renamed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchRenameResult {
    pub fn total(&self) -> usize {
        self.renamed.len() + self.unchanged.len() + self.failed.len()
    }

    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// Walks a directory and renames every video file the resolver can place
pub struct Organizer {
    config: OrganizerConfig,
    scanner: Scanner,
    resolver: Box<dyn MatchResolver>,
    logs: RunLogs,
}

impl Organizer {
    pub fn new(
        config: OrganizerConfig,
        scanner: Scanner,
        resolver: Box<dyn MatchResolver>,
        logs: RunLogs,
    ) -> Self {
        Self {
            config,
            scanner,
            resolver,
            logs,
        }
    }

    /// Process every video file under the root, one at a time.
    ///
    /// A failure on one file is recorded and never stops the run; only an
    /// unusable root directory is an error.
    pub async fn organize_all(&self) -> Result<BatchRenameResult> {
        let root = &self.config.root;
        if !root.is_dir() {
            return Err(RenamerError::Config(format!("{root:?} is not a directory")));
        }

        let files = self.scanner.scan(root);
        info!(
            "Found {} video files in {:?} ({} mode via {}{})",
            files.len(),
            root,
            self.resolver.kind(),
            self.resolver.catalog_id(),
            if self.config.dry_run { ", dry run" } else { "" }
        );

        let mut result = BatchRenameResult::default();

        for path in files {
            match self.organize_file(&path).await {
                Ok(FileOutcome::Renamed(plan) | FileOutcome::Simulated(plan)) => {
                    result.renamed.push(plan);
                }
                Ok(FileOutcome::Unchanged(path)) => result.unchanged.push(path),
                Err(e) => {
                    self.report_failure(&path, &e);
                    result.failed.push((path, e.to_string()));
                }
            }
        }

        info!(
            "Rename complete: {} renamed, {} unchanged, {} failed",
            result.renamed_count(),
            result.unchanged.len(),
            result.failed_count()
        );

        Ok(result)
    }

    /// Resolve and rename a single file
    pub async fn organize_file(&self, path: &Path) -> Result<FileOutcome> {
        let file = MediaFile::from_path(path)?;
        let plan = self.resolver.plan(&file).await?;

        if plan.is_noop() {
            debug!("Already named correctly: {:?}", plan.old);
            return Ok(FileOutcome::Unchanged(plan.old));
        }

        if plan.new.exists() && !is_same_file(&plan.old, &plan.new) {
            return Err(RenamerError::TargetExists(plan.new));
        }

        if self.config.dry_run {
            info!("[DRY RUN] Would rename {}", plan);
            self.logs.renames.record(&plan.to_string());
            return Ok(FileOutcome::Simulated(plan));
        }

        fs::rename(&plan.old, &plan.new)?;
        info!("Renamed {}", plan);
        self.logs.renames.record(&plan.to_string());

        Ok(FileOutcome::Renamed(plan))
    }

    fn report_failure(&self, path: &Path, error: &RenamerError) {
        let line = if error.is_not_found() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{error}: {name}")
        } else {
            format!("error processing {}: {}", path.display(), error)
        };

        warn!("{}", line);
        self.logs.errors.record(&line);
    }
}

/// Whether two paths name the same file (e.g. a case-only rename on a
/// case-insensitive filesystem)
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_mode_parse() {
        assert_eq!("tv".parse::<RenameMode>().unwrap(), RenameMode::Tv);
        assert_eq!("MOVIE".parse::<RenameMode>().unwrap(), RenameMode::Movie);
        assert!("music".parse::<RenameMode>().is_err());
    }

    #[test]
    fn test_rename_mode_display() {
        assert_eq!(RenameMode::Tv.to_string(), "tv");
        assert_eq!(RenameMode::Movie.to_string(), "movie");
    }

    #[test]
    fn test_batch_counts() {
        let result = BatchRenameResult {
            renamed: vec![RenamePlan {
                old: "a.mkv".into(),
                new: "b.mkv".into(),
            }],
            unchanged: vec!["c.mkv".into()],
            failed: vec![("d.mkv".into(), "show not found".to_string())],
        };
        assert_eq!(result.total(), 3);
        assert_eq!(result.renamed_count(), 1);
        assert_eq!(result.failed_count(), 1);
    }
}
