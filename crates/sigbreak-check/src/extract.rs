//! Turns changed-file descriptors into `File` records with their
//! declaration-level diff

use crate::error::{CheckError, CheckResult};
use crate::git::Repository;
use crate::patterns::{filter_by_pattern, pattern_for};
use crate::types::{Diff, File, FileStatus};

/// Split a `<status> <path>` descriptor. Returns `None` for blank or
/// malformed lines.
pub fn parse_descriptor(line: &str) -> Option<(FileStatus, String)> {
    let mut fields = line.split_whitespace();
    let status = fields.next()?;
    let name = fields.next()?;
    Some((FileStatus::from_code(status), name.to_string()))
}

/// Lowercase extension of the last path segment. Dotfiles and names
/// without a dot have no type.
pub fn type_tag(path: &str) -> String {
    let filename = path.rsplit('/').next().unwrap_or(path);
    if filename.starts_with('.') {
        return String::new();
    }
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext.trim().to_lowercase(),
        None => String::new(),
    }
}

/// Separate unified diff lines into removed and added content, markers
/// stripped and whitespace trimmed
pub fn split_diff_lines(lines: &[String]) -> (Vec<String>, Vec<String>) {
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for line in lines {
        if let Some(rest) = line.strip_prefix('-') {
            removed.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix('+') {
            added.push(rest.trim().to_string());
        }
    }

    (removed, added)
}

/// Fetch the changes of one file and keep only declaration lines.
///
/// A deleted file contributes every line of its content at `start` as a
/// removal. Fails with `UnsupportedType` when the type has no pattern.
pub fn fetch_diff<R: Repository + ?Sized>(
    repo: &R,
    name: &str,
    status: FileStatus,
    type_tag: &str,
    start: &str,
    end: &str,
) -> CheckResult<Diff> {
    let (removed, added) = if status == FileStatus::Deleted {
        let content = repo.show_file(start, name)?;
        let removed = content.iter().map(|l| l.trim().to_string()).collect();
        (removed, Vec::new())
    } else {
        let lines = repo.diff_file(start, end, name)?;
        split_diff_lines(&lines)
    };

    let pattern =
        pattern_for(type_tag).ok_or_else(|| CheckError::UnsupportedType(type_tag.to_string()))?;

    Ok(Diff {
        removed: filter_by_pattern(pattern, removed),
        added: filter_by_pattern(pattern, added),
    })
}

impl File {
    /// Build a file record from a descriptor line.
    ///
    /// Retrieval failures are not fatal: the file keeps an empty diff.
    pub fn from_descriptor<R: Repository + ?Sized>(
        repo: &R,
        line: &str,
        start: &str,
        end: &str,
    ) -> Option<File> {
        let Some((status, name)) = parse_descriptor(line) else {
            tracing::warn!(line, "skipping malformed changed-file line");
            return None;
        };
        let type_tag = type_tag(&name);

        let diff = if status == FileStatus::Added {
            Diff::default()
        } else {
            match fetch_diff(repo, &name, status, &type_tag, start, end) {
                Ok(diff) => diff,
                Err(CheckError::UnsupportedType(_)) => Diff::default(),
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "could not retrieve changes");
                    Diff::default()
                }
            }
        };

        tracing::debug!(
            file = %name,
            status = status.as_str(),
            removed = diff.removed.len(),
            added = diff.added.len(),
            "extracted declarations"
        );

        Some(File {
            name,
            status,
            type_tag,
            diff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        assert_eq!(
            parse_descriptor("M\tsrc/main.go"),
            Some((FileStatus::Modified, "src/main.go".to_string()))
        );
        assert_eq!(
            parse_descriptor("R100\told.go\tnew.go"),
            Some((FileStatus::Deleted, "old.go".to_string()))
        );
        assert_eq!(
            parse_descriptor("A new.go"),
            Some((FileStatus::Added, "new.go".to_string()))
        );
        assert_eq!(parse_descriptor(""), None);
        assert_eq!(parse_descriptor("M"), None);
    }

    #[test]
    fn test_type_tag() {
        assert_eq!(type_tag("src/server.go"), "go");
        assert_eq!(type_tag("lib/Main.JAVA"), "java");
        assert_eq!(type_tag("archive.tar.gz"), "gz");
        assert_eq!(type_tag("Makefile"), "");
        assert_eq!(type_tag("conf/.bashrc"), "");
        assert_eq!(type_tag("some.dir/README"), "");
        assert_eq!(type_tag("file."), "");
    }

    #[test]
    fn test_split_diff_lines() {
        let lines: Vec<String> = [
            "@@ -1,3 +1,3 @@",
            " context",
            "-\tfunc Old(a int) {",
            "+  func New(a int) {",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let (removed, added) = split_diff_lines(&lines);
        assert_eq!(removed, vec!["func Old(a int) {"]);
        assert_eq!(added, vec!["func New(a int) {"]);
    }
}
