use crate::types::File;

/// Drop files whose name starts with any of `prefixes`.
///
/// This is a plain string-prefix test, not a path-segment one: `vendor`
/// excludes `vendorish/lib.go` as well as `vendor/lib.go`.
pub fn exclude(files: Vec<File>, prefixes: &[String]) -> Vec<File> {
    if prefixes.is_empty() {
        return files;
    }

    files
        .into_iter()
        .filter(|f| {
            let excluded = prefixes.iter().any(|p| f.name.starts_with(p.as_str()));
            if excluded {
                tracing::debug!(file = %f.name, "excluded by configuration");
            }
            !excluded
        })
        .collect()
}
