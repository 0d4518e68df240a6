//! Week directory scaffold and idempotent directory materialization.
//!
//! Every week directory carries the same fixed sub-layout. Centralizing
//! the subdirectory constants here keeps the pipeline and the leaf-path
//! composition from duplicating string literals.

use std::fs;
use std::path::{Path, PathBuf};

use super::NavError;

/// Name of the classwork subdirectory inside a week directory.
pub const CLASSWORK_SUBDIR: &str = "classwork";
/// Name of the homework subdirectory inside a week directory.
pub const HOMEWORK_SUBDIR: &str = "homework";
/// Name of the homework source subdirectory (nested under homework).
pub const HOMEWORK_SRC_SUBDIR: &str = "src";
/// Name of the homework answers subdirectory (nested under homework).
pub const HOMEWORK_ANSWERS_SUBDIR: &str = "answ";

/// Creates `path` and all missing ancestors. Succeeds silently when the
/// directory already exists and never touches existing files inside it.
pub fn ensure_dir(path: &Path) -> Result<(), NavError> {
    fs::create_dir_all(path).map_err(|source| NavError::io(path, source))
}

/// Convenience wrapper locating the fixed sub-layout of one week directory.
#[derive(Debug, Clone)]
pub struct WeekLayout {
    pub classwork_dir: PathBuf,
    pub homework_src_dir: PathBuf,
    pub homework_answers_dir: PathBuf,
}

impl WeekLayout {
    /// Constructs the layout reference for the given week directory.
    pub fn new(week_dir: &Path) -> Self {
        let homework_dir = week_dir.join(HOMEWORK_SUBDIR);
        Self {
            classwork_dir: week_dir.join(CLASSWORK_SUBDIR),
            homework_src_dir: homework_dir.join(HOMEWORK_SRC_SUBDIR),
            homework_answers_dir: homework_dir.join(HOMEWORK_ANSWERS_SUBDIR),
        }
    }

    /// Materializes the full scaffold. The week directory may already
    /// exist with files in it; those are left untouched.
    pub fn scaffold(&self) -> Result<(), NavError> {
        for dir in [
            &self.classwork_dir,
            &self.homework_src_dir,
            &self.homework_answers_dir,
        ] {
            ensure_dir(dir)?;
        }
        Ok(())
    }
}
