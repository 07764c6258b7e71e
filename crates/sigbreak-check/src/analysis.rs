//! A break-detection run between two refs of one working tree

use crate::error::{CheckError, CheckResult};
use crate::filter::exclude;
use crate::git::Repository;
use crate::types::{File, FileStatus, Method};
use serde::Serialize;
use sigbreak_core::{load_configuration, Config};
use std::path::{Path, PathBuf};

/// Breaks found in one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub name: String,
    pub status: FileStatus,
    pub methods: Vec<Method>,
}

/// Outcome of a run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub start: String,
    pub end: String,
    /// Supported files with at least one break
    pub breaks: Vec<FileReport>,
    /// Files whose language is not recognised
    pub ignored: Vec<String>,
}

impl Report {
    pub fn has_breaks(&self) -> bool {
        !self.breaks.is_empty()
    }

    pub fn break_count(&self) -> usize {
        self.breaks.iter().map(|f| f.methods.len()).sum()
    }
}

pub struct Analysis<R: Repository> {
    repo: R,
    start: String,
    end: String,
    config: Option<Config>,
}

impl<R: Repository> Analysis<R> {
    /// Validate the working tree and both refs, then load the configuration.
    ///
    /// `global_config` is only read when given; the repo file overrides it.
    pub fn init(
        repo: R,
        working_path: impl Into<PathBuf>,
        start: &str,
        end: &str,
        config_filename: &str,
        global_config: Option<&Path>,
    ) -> CheckResult<Self> {
        let working_path = working_path.into();
        if !working_path.is_dir() {
            return Err(CheckError::WorkingPath(working_path.display().to_string()));
        }

        for reference in [start, end] {
            if !repo.ref_exists(reference) {
                return Err(CheckError::UnknownRef(reference.to_string()));
            }
        }

        let config = load_configuration(&working_path, config_filename, global_config)?;

        Ok(Self {
            repo,
            start: start.to_string(),
            end: end.to_string(),
            config,
        })
    }

    pub fn has_configuration(&self) -> bool {
        self.config.is_some()
    }

    /// Excluded path prefixes from the configuration, if any
    pub fn exclusions(&self) -> Vec<String> {
        self.config
            .as_ref()
            .map(Config::exclusions)
            .unwrap_or_default()
    }

    /// Build file records and split them into (supported, ignored).
    /// Added files are dropped entirely.
    pub fn files(&self, changed: &[String]) -> (Vec<File>, Vec<File>) {
        let mut supported = Vec::new();
        let mut ignored = Vec::new();

        for line in changed {
            let Some(file) = File::from_descriptor(&self.repo, line, &self.start, &self.end)
            else {
                continue;
            };

            if !file.can_have_break() {
                continue;
            }
            if file.is_type_supported() {
                supported.push(file);
            } else {
                ignored.push(file);
            }
        }

        (supported, ignored)
    }

    pub fn filter(&self, files: Vec<File>) -> Vec<File> {
        exclude(files, &self.exclusions())
    }

    pub fn run(&self) -> CheckResult<Report> {
        let changed = self.repo.changed_files(&self.start, &self.end)?;
        tracing::info!(
            start = %self.start,
            end = %self.end,
            files = changed.len(),
            "analysing changed files"
        );

        let (supported, ignored) = self.files(&changed);
        let supported = self.filter(supported);
        let ignored = self.filter(ignored);

        let mut breaks = Vec::new();
        for file in supported {
            let methods = file.breaks()?;
            if methods.is_empty() {
                continue;
            }
            tracing::debug!(file = %file.name, count = methods.len(), "breaks found");
            breaks.push(FileReport {
                name: file.name,
                status: file.status,
                methods,
            });
        }

        let report = Report {
            start: self.start.clone(),
            end: self.end.clone(),
            breaks,
            ignored: ignored.into_iter().map(|f| f.name).collect(),
        };
        tracing::info!(
            breaks = report.break_count(),
            ignored = report.ignored.len(),
            "analysis finished"
        );

        Ok(report)
    }
}
