//! Detection of probable backward-compatibility breaks in public
//! function signatures between two git refs.
//!
//! Declaration lines are picked out of each changed file with a
//! per-language pattern, removed declarations are paired with added ones
//! sharing the same header, and each pair is classified by a positional
//! comparison of its parameter list.

mod analysis;
mod classify;
mod error;
mod extract;
mod filter;
mod git;
mod params;
mod patterns;
mod types;

pub use analysis::{Analysis, FileReport, Report};
pub use classify::find_breaks;
pub use error::{CheckError, CheckResult};
pub use extract::{fetch_diff, parse_descriptor, split_diff_lines, type_tag};
pub use filter::exclude;
pub use git::{GitCli, Repository};
pub use params::{differences, explain, explained_changes, has_default_parameter, BreakKind};
pub use patterns::{filter_by_pattern, is_supported, pattern_for, supported_types};
pub use types::{Diff, File, FileStatus, Method};
