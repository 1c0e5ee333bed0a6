#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property-based tests for the dump renderers.
//!
//! These verify the shape invariants over generated inputs:
//! element counts, ordering, separator placement, and determinism.
//! They complement `dump_tests.rs`, which pins exact renderings.

use std::collections::{BTreeMap, BTreeSet};

use dump_fmt::{add_line_prefix, bool_str, dump_map, dump_optional, dump_set, dump_slice, Dump};
use proptest::prelude::*;

/// Generate a line of text with no line breaks.
fn line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 ]{1,12}").expect("valid regex")
}

/// Generate a short prefix like the ones used for dump indentation.
fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[>| ]{1,4}").expect("valid regex")
}

proptest! {
    #[test]
    fn bool_dump_is_always_a_word(value in any::<bool>()) {
        let rendered = value.dump();
        prop_assert!(rendered == "true" || rendered == "false");
        prop_assert_eq!(rendered, bool_str(value));
    }

    #[test]
    fn optional_present_matches_inner_conversion(value in any::<u32>()) {
        prop_assert_eq!(dump_optional(&Some(value)), value.to_string());
    }

    #[test]
    fn set_dump_lists_elements_ascending(values in prop::collection::vec(0_u32..10_000, 0..32)) {
        let set: BTreeSet<u32> = values.iter().copied().collect();
        let rendered = dump_set(&set);

        if set.is_empty() {
            prop_assert_eq!(rendered, "{}");
        } else {
            prop_assert!(rendered.starts_with('{'), "rendered should start with an opening brace");
            prop_assert!(rendered.ends_with('}'), "rendered should end with a closing brace");
            let inner = &rendered[1..rendered.len() - 1];
            let parsed: Vec<u32> = inner.split(", ").map(|p| p.parse().unwrap()).collect();
            let expected: Vec<u32> = set.iter().copied().collect();
            prop_assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn map_dump_has_one_line_per_entry(entries in prop::collection::vec((any::<u16>(), any::<u16>()), 0..32)) {
        let map: BTreeMap<u16, u16> = entries.iter().copied().collect();
        let rendered = dump_map(&map);

        if map.is_empty() {
            prop_assert_eq!(rendered, "");
        } else {
            prop_assert_eq!(rendered.lines().count(), map.len());
            prop_assert!(!rendered.ends_with('\n'));

            let mut previous_key: Option<u16> = None;
            for line in rendered.lines() {
                let (key, value) = line.split_once(':').unwrap();
                let key: u16 = key.parse().unwrap();
                let value: u16 = value.parse().unwrap();
                prop_assert_eq!(map.get(&key), Some(&value));
                prop_assert!(previous_key.map_or(true, |prev| prev < key));
                previous_key = Some(key);
            }
        }
    }

    #[test]
    fn slice_dump_preserves_count_and_order(values in prop::collection::vec(any::<i32>(), 1..32)) {
        let rendered = dump_slice(&values).unwrap();
        let parsed: Vec<i32> = rendered.split(", ").map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parsed, values);
    }

    #[test]
    fn line_prefix_applies_to_each_line(
        lines in prop::collection::vec(line_strategy(), 1..8),
        prefix in prefix_strategy(),
    ) {
        let text = lines.join("\n");
        let rendered = add_line_prefix(&text, &prefix);

        prop_assert_eq!(rendered.split('\n').count(), lines.len());
        for (rendered_line, original) in rendered.split('\n').zip(&lines) {
            prop_assert_eq!(rendered_line, format!("{prefix}{original}"));
        }
    }

    #[test]
    fn line_prefix_preserves_trailing_newline(
        lines in prop::collection::vec(line_strategy(), 1..8),
        prefix in prefix_strategy(),
    ) {
        let text = lines.join("\n");
        let with_newline = format!("{text}\n");
        prop_assert_eq!(
            add_line_prefix(&with_newline, &prefix),
            format!("{}\n", add_line_prefix(&text, &prefix))
        );
    }

    #[test]
    fn renderers_are_deterministic(values in prop::collection::vec(any::<u8>(), 0..16)) {
        let set: BTreeSet<u8> = values.iter().copied().collect();
        prop_assert_eq!(dump_set(&set), dump_set(&set));

        let map: BTreeMap<u8, u8> = values.iter().map(|v| (*v, v.wrapping_mul(3))).collect();
        prop_assert_eq!(dump_map(&map), dump_map(&map));
    }
}
