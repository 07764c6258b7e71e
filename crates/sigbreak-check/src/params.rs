//! Positional comparison of parameter lists and the resulting break reason

use std::fmt;

/// Reason a signature change breaks callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    DeletedMethod,
    DeletedParameter,
    DeletedDefaultParameter,
    AddedParameterWithoutDefault,
    Unknown,
}

impl BreakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::DeletedMethod => "Deletion of method",
            BreakKind::DeletedParameter => "Deletion of parameter",
            BreakKind::DeletedDefaultParameter => "Deletion of default parameter",
            BreakKind::AddedParameterWithoutDefault => "Adding a parameter without default value",
            BreakKind::Unknown => "Unknown signature change",
        }
    }
}

impl fmt::Display for BreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens that differ position by position, as `(removed, added)`.
///
/// The shorter list is padded with empty tokens; parameters are never
/// matched by name.
pub fn differences<'a>(before: &[&'a str], after: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    let length = before.len().max(after.len());
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for i in 0..length {
        let b = before.get(i).copied().unwrap_or("");
        let a = after.get(i).copied().unwrap_or("");
        if b == a {
            continue;
        }
        if b.is_empty() {
            added.push(a);
        } else if a.is_empty() {
            removed.push(b);
        } else {
            removed.push(b);
            added.push(a);
        }
    }

    (removed, added)
}

pub fn has_default_parameter(tokens: &[&str]) -> bool {
    tokens.iter().any(|t| t.contains('='))
}

/// Classify the change from `before` to `after`. An empty `after` means
/// the declaration vanished. `None` means the change keeps callers working.
pub fn explain(before: &str, after: &str) -> Option<BreakKind> {
    if after.is_empty() {
        return Some(BreakKind::DeletedMethod);
    }

    let before_tokens: Vec<&str> = before.split(',').collect();
    let after_tokens: Vec<&str> = after.split(',').collect();
    let (removed, added) = differences(&before_tokens, &after_tokens);

    if removed.len() > added.len() {
        if has_default_parameter(&removed) && !has_default_parameter(&added) {
            Some(BreakKind::DeletedDefaultParameter)
        } else {
            Some(BreakKind::DeletedParameter)
        }
    } else if removed.len() < added.len() {
        if has_default_parameter(&added) {
            None
        } else {
            Some(BreakKind::AddedParameterWithoutDefault)
        }
    } else {
        // Equal arity: only the added side is inspected for defaults.
        if !removed.is_empty() && !has_default_parameter(&added) {
            if has_default_parameter(&removed) {
                return Some(BreakKind::DeletedDefaultParameter);
            }
            return Some(BreakKind::AddedParameterWithoutDefault);
        }
        Some(BreakKind::Unknown)
    }
}

/// Explanation text, empty when the change is not a break
pub fn explained_changes(before: &str, after: &str) -> String {
    explain(before, after)
        .map(|k| k.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_of_method() {
        assert_eq!(
            explained_changes("func OldName(a int)", ""),
            "Deletion of method"
        );
    }

    #[test]
    fn test_deletion_of_parameter() {
        assert_eq!(
            explain("func F(a int, b string)", "func F(a int)"),
            Some(BreakKind::DeletedParameter)
        );
    }

    #[test]
    fn test_deletion_of_default_parameter() {
        assert_eq!(
            explain("function f(a, b=1)", "function f(a)"),
            Some(BreakKind::DeletedDefaultParameter)
        );
    }

    #[test]
    fn test_adding_default_parameter_is_safe() {
        assert_eq!(explain("func F(a int)", "func F(a int, b=0)"), None);
        assert_eq!(explained_changes("func F(a int)", "func F(a int, b=0)"), "");
    }

    #[test]
    fn test_adding_parameter_without_default() {
        assert_eq!(
            explain("func F(a int)", "func F(a int, b int)"),
            Some(BreakKind::AddedParameterWithoutDefault)
        );
    }

    #[test]
    fn test_equal_arity_changes() {
        // default dropped from an existing parameter
        assert_eq!(
            explain("function f(a, b=1)", "function f(a, b)"),
            Some(BreakKind::DeletedDefaultParameter)
        );
        // type changed, nothing defaulted
        assert_eq!(
            explain("func F(a int, b int)", "func F(a int, b string)"),
            Some(BreakKind::AddedParameterWithoutDefault)
        );
        // added side carries a default
        assert_eq!(
            explain("function f(a, b)", "function f(a, b=2)"),
            Some(BreakKind::Unknown)
        );
    }

    #[test]
    fn test_differences_is_positional() {
        let before = ["f(a", " b", " c)"];
        let after = ["f(b", " a)"];
        let (removed, added) = differences(&before, &after);
        assert_eq!(removed, vec!["f(a", " b", " c)"]);
        assert_eq!(added, vec!["f(b", " a)"]);
    }

    #[test]
    fn test_differences_identical() {
        let tokens = ["f(a", " b)"];
        let (removed, added) = differences(&tokens, &tokens);
        assert!(removed.is_empty());
        assert!(added.is_empty());
    }

    #[test]
    fn test_has_default_parameter() {
        assert!(has_default_parameter(&["a", " b = 1)"]));
        assert!(!has_default_parameter(&["a", " b)"]));
        assert!(!has_default_parameter(&[]));
    }
}
