//! Type definitions for break detection

use serde::Serialize;

/// Status of a changed file between the two refs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
}

impl FileStatus {
    /// Map a `git diff --name-status` code. Renames count as deletions of
    /// the old path; copies and type changes behave like modifications.
    pub fn from_code(code: &str) -> Self {
        match code {
            "A" => FileStatus::Added,
            "D" => FileStatus::Deleted,
            c if c.starts_with('R') => FileStatus::Deleted,
            _ => FileStatus::Modified,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileStatus::Added => "A",
            FileStatus::Modified => "M",
            FileStatus::Deleted => "D",
        }
    }
}

/// Declaration lines of a file, split by side of the diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub removed: Vec<String>,
    pub added: Vec<String>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// A changed file of the analysed range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    pub name: String,
    pub status: FileStatus,
    /// Lowercase extension, empty when the file has none
    pub type_tag: String,
    pub diff: Diff,
}

impl File {
    /// Newly created files cannot regress compatibility
    pub fn can_have_break(&self) -> bool {
        self.status != FileStatus::Added
    }
}

/// A probable compatibility break on a public method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub before: String,
    pub after: String,
    pub common_factor: String,
    pub explanation: String,
}
