//! Property-based tests for path parsing functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{join_path, split_path};
    use proptest::prelude::*;

    // ============================================================================
    // split_path property tests
    // ============================================================================

    proptest! {
        /// Property: split_path is total and always yields at least one segment
        #[test]
        fn split_path_yields_at_least_one_segment(input in ".*") {
            let segments = split_path(&input);
            prop_assert!(!segments.is_empty());
        }

        /// Property: split_path is deterministic (same input = same output)
        #[test]
        fn split_path_is_deterministic(input in ".*") {
            let result1 = split_path(&input);
            let result2 = split_path(&input);
            prop_assert_eq!(result1, result2);
        }

        /// Property: input without separators or escapes is one unchanged segment
        #[test]
        fn split_path_passes_plain_strings_through(input in "[^/\\\\]*") {
            let segments = split_path(&input);
            prop_assert_eq!(segments.len(), 1);
            prop_assert_eq!(&segments[0], &input);
        }

        /// Property: slash-free input yields segment count = separator count + 1
        #[test]
        fn split_path_segment_count_matches_separators(parts in prop::collection::vec("[a-z0-9]{0,6}", 1..8)) {
            let path = parts.join("/");
            let segments = split_path(&path);
            prop_assert_eq!(segments.len(), parts.len());
            prop_assert_eq!(segments, parts);
        }
    }

    // ============================================================================
    // join_path / split_path round-trip property tests
    // ============================================================================

    proptest! {
        /// Property: splitting a joined segment list recovers the segments,
        /// including segments containing literal slashes
        #[test]
        fn join_then_split_round_trips(segments in prop::collection::vec("[a-z/]{0,8}", 1..6)) {
            let path = join_path(&segments);
            prop_assert_eq!(split_path(&path), segments);
        }

        /// Property: join_path output never contains an unescaped separator
        /// beyond the segment boundaries
        #[test]
        fn join_path_boundary_count_is_stable(segments in prop::collection::vec("[a-z/]{0,8}", 1..6)) {
            let path = join_path(&segments);
            // Every '/' in the joined path is either a boundary or preceded
            // by the escape character.
            let boundaries = path
                .char_indices()
                .filter(|&(i, ch)| ch == '/' && (i == 0 || path.as_bytes()[i - 1] != b'\\'))
                .count();
            prop_assert_eq!(boundaries, segments.len() - 1);
        }
    }
}
