//! Latest-entry resolution and the course/week path resolution pipeline.
//!
//! Resolution runs in four sequential steps (root, category, course,
//! week) followed by a pure leaf-path composition. Each of the course and
//! week steps is either "constructed" (an explicit identifier was given,
//! so the directory is created if missing) or "looked up" (no identifier,
//! so the latest existing directory is selected and nothing is created).

use std::fs;
use std::path::{Path, PathBuf};

use super::layout::{ensure_dir, WeekLayout, CLASSWORK_SUBDIR, HOMEWORK_ANSWERS_SUBDIR, HOMEWORK_SUBDIR};
use super::{NavConfig, NavError};

/// Which leaf of the week directory the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeafMode {
    Classwork,
    #[default]
    Homework,
    /// The week directory itself, unmodified.
    Bare,
}

/// One resolution request, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct NavRequest {
    pub category: String,
    pub mode: LeafMode,
    pub course: Option<String>,
    pub week: Option<String>,
}

/// Lists the names of all entries in `dir`. Entries are classified later
/// purely by name prefix; contents are never inspected.
pub fn list_entry_names(dir: &Path) -> Result<Vec<String>, NavError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| NavError::io(dir, source))? {
        let entry = entry.map_err(|source| NavError::io(dir, source))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Returns the prefix-matching name with the greatest integer suffix, or
/// `None` when no name matches the prefix.
///
/// A matching name whose suffix does not parse as a base-10 integer fails
/// the whole lookup. When two names parse to the same integer (leading
/// zeros), the lexicographically smallest name wins.
pub fn find_latest(names: &[String], prefix: &str) -> Result<Option<String>, NavError> {
    let mut best: Option<(i64, &str)> = None;
    for name in names {
        let Some(suffix) = name.strip_prefix(prefix) else {
            continue;
        };
        let value: i64 = suffix
            .parse()
            .map_err(|_| NavError::MalformedDirectoryName {
                name: name.clone(),
                prefix: prefix.to_string(),
            })?;
        let better = match best {
            None => true,
            Some((best_value, best_name)) => {
                value > best_value || (value == best_value && name.as_str() < best_name)
            }
        };
        if better {
            best = Some((value, name));
        }
    }
    Ok(best.map(|(_, name)| name.to_string()))
}

/// Resolves requests against one root directory with one configuration.
pub struct Navigator<'a> {
    config: &'a NavConfig,
    root: PathBuf,
}

impl<'a> Navigator<'a> {
    pub fn new(config: &'a NavConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Runs the full pipeline and returns the composed leaf path.
    pub fn resolve(&self, request: &NavRequest) -> Result<PathBuf, NavError> {
        let category_dir = self.category_dir(&request.category)?;
        ensure_dir(&category_dir)?;

        let course_dir = category_dir.join(self.select_course(&category_dir, request)?);
        let week_dir = course_dir.join(self.select_week(&course_dir, request)?);

        Ok(match request.mode {
            LeafMode::Classwork => week_dir.join(CLASSWORK_SUBDIR),
            LeafMode::Homework => week_dir.join(HOMEWORK_SUBDIR).join(HOMEWORK_ANSWERS_SUBDIR),
            LeafMode::Bare => week_dir,
        })
    }

    /// Validates the category alias and returns its directory path. Runs
    /// before any filesystem access.
    fn category_dir(&self, alias: &str) -> Result<PathBuf, NavError> {
        let dirname =
            self.config
                .category_dirname(alias)
                .ok_or_else(|| NavError::UnknownCategory {
                    alias: alias.to_string(),
                    known: self.config.alias_summary(),
                })?;
        Ok(self.root.join(dirname))
    }

    /// Step 3: explicit identifier creates the course directory; no
    /// identifier selects the latest existing one.
    fn select_course(&self, category_dir: &Path, request: &NavRequest) -> Result<String, NavError> {
        match &request.course {
            Some(course_id) => {
                let name = self.config.course_dir_name(course_id);
                ensure_dir(&category_dir.join(&name))?;
                Ok(name)
            }
            None => {
                let names = list_entry_names(category_dir)?;
                find_latest(&names, &self.config.course_prefix)?.ok_or_else(|| {
                    NavError::NoCourseSelected {
                        dir: category_dir.to_path_buf(),
                    }
                })
            }
        }
    }

    /// Step 4: symmetric to the course step, one level deeper. An explicit
    /// identifier additionally materializes the week scaffold; the lookup
    /// path creates nothing.
    fn select_week(&self, course_dir: &Path, request: &NavRequest) -> Result<String, NavError> {
        match &request.week {
            Some(week_id) => {
                let name = self.config.week_dir_name(week_id);
                WeekLayout::new(&course_dir.join(&name)).scaffold()?;
                Ok(name)
            }
            None => {
                let names = list_entry_names(course_dir)?;
                find_latest(&names, &self.config.week_prefix)?.ok_or_else(|| {
                    NavError::NoWeekSelected {
                        dir: course_dir.to_path_buf(),
                    }
                })
            }
        }
    }
}
