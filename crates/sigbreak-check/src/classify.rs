//! Pairing of removed declarations with their added counterparts

use crate::error::{CheckError, CheckResult};
use crate::params::explain;
use crate::patterns::pattern_for;
use crate::types::{Diff, File, Method};
use regex::Regex;

/// Same token count and same length: the declaration only moved
fn is_relocation(removed: &str, added: &str) -> bool {
    removed.split(' ').count() == added.split(' ').count() && removed.len() == added.len()
}

/// Break candidates of a diff, in the order of `diff.removed`.
///
/// Each removed declaration is paired with the last added line starting
/// with the same header; an exact-shape match anywhere cancels it.
pub fn find_breaks(pattern: &Regex, diff: &Diff) -> Vec<Method> {
    let mut methods = Vec::new();

    'removed: for removed in &diff.removed {
        let Some(header) = pattern.find(removed) else {
            continue;
        };
        let common_factor = header.as_str();

        let mut closest_adding = "";
        for added in &diff.added {
            if !added.starts_with(common_factor) {
                continue;
            }
            if is_relocation(removed, added) {
                continue 'removed;
            }
            closest_adding = added.as_str();
        }

        if let Some(kind) = explain(removed, closest_adding) {
            methods.push(Method {
                before: removed.clone(),
                after: closest_adding.to_string(),
                common_factor: common_factor.to_string(),
                explanation: kind.to_string(),
            });
        }
    }

    methods
}

impl File {
    pub fn is_type_supported(&self) -> bool {
        pattern_for(&self.type_tag).is_some()
    }

    /// Probable compatibility breaks of this file
    pub fn breaks(&self) -> CheckResult<Vec<Method>> {
        let pattern = pattern_for(&self.type_tag)
            .ok_or_else(|| CheckError::UnsupportedType(self.type_tag.clone()))?;
        Ok(find_breaks(pattern, &self.diff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileStatus;

    fn go_file(removed: &[&str], added: &[&str]) -> File {
        File {
            name: "pkg/api.go".to_string(),
            status: FileStatus::Modified,
            type_tag: "go".to_string(),
            diff: Diff {
                removed: removed.iter().map(|s| s.to_string()).collect(),
                added: added.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn test_relocation_is_not_a_break() {
        let file = go_file(&["func Serve(a int, b int) {"], &["func Serve(a int, c int) {"]);
        assert!(file.breaks().unwrap().is_empty());
    }

    #[test]
    fn test_relocation_wins_over_earlier_candidate() {
        let file = go_file(
            &["func Serve(a int) {"],
            &["func Serve(a int, b int) {", "func Serve(a int) {"],
        );
        assert!(file.breaks().unwrap().is_empty());
    }

    #[test]
    fn test_deleted_method() {
        let file = go_file(&["func Old(a int) {"], &["func New(a int) {"]);
        let methods = file.breaks().unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].explanation, "Deletion of method");
        assert_eq!(methods[0].after, "");
        assert_eq!(methods[0].common_factor, "func Old(");
    }

    #[test]
    fn test_last_matching_addition_wins() {
        let file = go_file(
            &["func F(a int, b int) {"],
            &["func F(a int, b int, c int) {", "func F(a int) {"],
        );
        let methods = file.breaks().unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].after, "func F(a int) {");
        assert_eq!(methods[0].explanation, "Deletion of parameter");
    }

    #[test]
    fn test_safe_addition_dropped() {
        let file = go_file(&["func F(a int) {"], &["func F(a int, b=0) {"]);
        assert!(file.breaks().unwrap().is_empty());
    }

    #[test]
    fn test_methods_keep_removed_order() {
        let file = go_file(
            &["func B(x int) {", "func A(y int) {"],
            &["func A(y int, z int) {"],
        );
        let methods = file.breaks().unwrap();
        let befores: Vec<&str> = methods.iter().map(|m| m.before.as_str()).collect();
        assert_eq!(befores, vec!["func B(x int) {", "func A(y int) {"]);
        assert_eq!(methods[1].explanation, "Adding a parameter without default value");
    }

    #[test]
    fn test_unsupported_type() {
        let mut file = go_file(&[], &[]);
        file.type_tag = "rb".to_string();
        assert!(!file.is_type_supported());
        assert!(matches!(file.breaks(), Err(CheckError::UnsupportedType(_))));
    }
}
