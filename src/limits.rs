//! Limits on recursion depth and pattern search effort.

/// Maximum container nesting depth.
///
/// Each nested container is one level of recursion, and markup like a long
/// run of `:` nests once per character. Content at this depth is emitted
/// after filtering, without being split into children.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Backtracking budget for one grammar pattern search.
///
/// Every search runs to completion. A finite budget would turn a long run of
/// plain text into a failed search, and the chunk would swallow the markup
/// after it.
pub const REGEX_BACKTRACK_LIMIT: usize = usize::MAX;
