//! Path parsing utilities for config-tree
//!
//! A path addresses a location inside a nested Document. Segments are
//! separated by `/`; a literal slash inside a segment is escaped as `\/`.
//! The path syntax is part of the public contract: `split_path` and
//! `join_path` are exact inverses for well-formed input.

/// Split a path string into its unescaped segments.
///
/// Scans left to right: an unescaped `/` terminates the current segment,
/// and the two-character sequence `\/` collapses to a single literal `/`
/// inside the segment. A backslash not followed by `/` is kept as a
/// literal backslash. Every string decomposes successfully into at least
/// one segment; there are no error conditions.
///
/// Leading, trailing, or doubled separators produce empty-string segments,
/// which legally address a key equal to the empty string. Callers that
/// consider the empty *path* invalid must reject it before calling; this
/// function maps `""` to a single empty segment.
///
/// # Examples
///
/// ```
/// use config_tree::path::split_path;
///
/// assert_eq!(split_path("a/b/c"), vec!["a", "b", "c"]);
/// assert_eq!(split_path(r"a\/b"), vec!["a/b"]);
/// assert_eq!(split_path("/k"), vec!["", "k"]);
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'/') => {
                chars.next();
                current.push('/');
            }
            '/' => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    segments.push(current);

    segments
}

/// Join segments back into a path string, escaping literal slashes.
///
/// Inverse of [`split_path`]: any `/` inside a segment is written as `\/`
/// so the joined string splits back into the same segments.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| segment.as_ref().replace('/', "\\/"))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_simple() {
        assert_eq!(split_path("a/b/c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_path_single_segment() {
        assert_eq!(split_path("key"), vec!["key"]);
    }

    #[test]
    fn test_split_path_escaped_slash() {
        assert_eq!(split_path(r"a\/b"), vec!["a/b"]);
        assert_eq!(split_path(r"a\/b/c"), vec!["a/b", "c"]);
    }

    #[test]
    fn test_split_path_leading_separator() {
        assert_eq!(split_path("/k"), vec!["", "k"]);
    }

    #[test]
    fn test_split_path_trailing_separator() {
        assert_eq!(split_path("k/"), vec!["k", ""]);
    }

    #[test]
    fn test_split_path_consecutive_separators() {
        assert_eq!(split_path("a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_path_lone_backslash_is_literal() {
        assert_eq!(split_path(r"a\b"), vec![r"a\b"]);
        assert_eq!(split_path("a\\"), vec!["a\\"]);
    }

    #[test]
    fn test_split_path_backslash_then_escaped_slash() {
        // Only the final two characters form the escape sequence.
        assert_eq!(split_path(r"a\\/b"), vec![r"a\/b"]);
    }

    #[test]
    fn test_split_path_empty_string_is_one_empty_segment() {
        assert_eq!(split_path(""), vec![""]);
    }

    #[test]
    fn test_join_path_escapes_literal_slash() {
        assert_eq!(join_path(&["a/b", "c"]), r"a\/b/c");
    }

    #[test]
    fn test_join_path_round_trip() {
        let segments = vec!["outer".to_string(), "in/ner".to_string(), "".to_string()];
        assert_eq!(split_path(&join_path(&segments)), segments);
    }
}
