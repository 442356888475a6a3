use std::path::{Path, PathBuf};

use crate::renamer::{RenamerError, Result};

/// A video file found during the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Full path
    pub path: PathBuf,
    /// Directory containing the file
    pub directory: PathBuf,
    /// File name without extension
    pub base: String,
    /// Extension including the leading dot, exactly as on disk
    pub extension: String,
}

impl MediaFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let base = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| RenamerError::InvalidPath(path.clone()))?
            .to_string();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self {
            path,
            directory,
            base,
            extension,
        })
    }

    /// File name including extension
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base, self.extension)
    }

    /// Plan a rename to `new_base` within the same directory, keeping the
    /// original extension
    #[must_use]
    pub fn plan_rename(&self, new_base: &str) -> RenamePlan {
        let name = format!("{}{}", sanitize_filename(new_base), self.extension);
        RenamePlan {
            old: self.path.clone(),
            new: self.directory.join(name),
        }
    }
}

/// Old and new path of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub old: PathBuf,
    pub new: PathBuf,
}

impl RenamePlan {
    /// Nothing to do when the name is already canonical
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }
}

impl std::fmt::Display for RenamePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.old.display(), self.new.display())
    }
}

/// Replace characters that are not allowed in filenames
fn sanitize_filename(name: &str) -> String {
    const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

    name.chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_splits_name() {
        let file = MediaFile::from_path("/media/tv/Dexters.Laboratory.S03E12.Jeepers.Creepers.mkv")
            .unwrap();
        assert_eq!(file.base, "Dexters.Laboratory.S03E12.Jeepers.Creepers");
        assert_eq!(file.extension, ".mkv");
        assert_eq!(file.directory, PathBuf::from("/media/tv"));
    }

    #[test]
    fn test_extension_kept_verbatim() {
        let file = MediaFile::from_path("/media/Movie.MKV").unwrap();
        let plan = file.plan_rename("Movie (1999)");
        assert_eq!(plan.new, PathBuf::from("/media/Movie (1999).MKV"));
    }

    #[test]
    fn test_plan_stays_in_directory() {
        let file = MediaFile::from_path("/media/a.mkv").unwrap();
        let plan = file.plan_rename("AC/DC: Live?");
        assert_eq!(plan.new, PathBuf::from("/media/AC_DC_ Live_.mkv"));
        assert_eq!(plan.new.parent(), Some(Path::new("/media")));
    }

    #[test]
    fn test_noop_plan() {
        let file = MediaFile::from_path("/media/Inception (2010).mkv").unwrap();
        assert!(file.plan_rename("Inception (2010)").is_noop());
        assert!(!file.plan_rename("Inception (2011)").is_noop());
    }

    #[test]
    fn test_plan_display() {
        let file = MediaFile::from_path("/m/a.mkv").unwrap();
        assert_eq!(file.plan_rename("b").to_string(), "/m/a.mkv -> /m/b.mkv");
    }
}
