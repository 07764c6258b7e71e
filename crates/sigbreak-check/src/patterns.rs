//! Per-language recognition of public declaration headers.
//!
//! Adding a language means adding a row to `PATTERN_TABLE`.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

const PATTERN_TABLE: &[(&str, &str)] = &[
    ("go", r"^(\s)*func( \(.+\))? [A-Z][A-Za-z]*\("),
    (
        "php",
        r"^(\s)*public( static)? function [_A-Za-z]+\(|^(\s)*function [_A-Za-z]+\(",
    ),
    ("java", r"^(\s)*public( static)?( .+)? [A-Za-z]+\("),
    (
        "js",
        r"^(\s)*function [A-Za-z]+\(|^(\s)*(var )?[A-Za-z._]+(\s)*=(\s)*function \(|(\s)*[A-Za-z._]+(\s)*:(\s)*function \(",
    ),
    ("sh", r"^(\s)*function [A-Za-z_]+\("),
];

static REGISTRY: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    PATTERN_TABLE
        .iter()
        .map(|(tag, pattern)| {
            let regex = Regex::new(pattern).expect("declaration pattern table must compile");
            (*tag, regex)
        })
        .collect()
});

/// Pattern recognising a public declaration header for `type_tag`
pub fn pattern_for(type_tag: &str) -> Option<&'static Regex> {
    REGISTRY.get(type_tag)
}

pub fn is_supported(type_tag: &str) -> bool {
    pattern_for(type_tag).is_some()
}

/// Type tags with a registered pattern, sorted
pub fn supported_types() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = PATTERN_TABLE.iter().map(|(tag, _)| *tag).collect();
    tags.sort_unstable();
    tags
}

/// Keep only the lines matching `pattern`, preserving order
pub fn filter_by_pattern(pattern: &Regex, lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| pattern.is_match(line))
        .collect()
}
