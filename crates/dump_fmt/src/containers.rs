//! Container Dumps
//!
//! Renderers for the container shapes that show up in diagnostic dumps:
//! ordered sets, ordered maps, and slices. Each renderer comes in two
//! flavors: a default one using [`Dump`] for element conversion, and a
//! `_with` variant taking explicit converter closures.
//!
//! Output conventions differ per container and are load-bearing for
//! existing dump consumers:
//!
//! - set: `{a, b, c}`, empty set renders `{}`
//! - map: one `key:value` line per entry, newline-joined, empty map
//!   renders the empty string
//! - slice: `a, b, c` with no delimiters, empty slice is an error
//!
//! The three empty cases are intentionally asymmetric; do not unify them.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::trace;

use crate::convert::Dump;

/// Error produced by the container renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DumpError {
    /// A slice renderer was handed a slice with no elements.
    #[error("cannot dump an empty sequence")]
    EmptySequence,
}

/// Render a set as `{a, b, c}` in ascending element order.
///
/// An empty set renders as `"{}"`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use dump_fmt::dump_set;
///
/// let ids = BTreeSet::from([3, 1, 2]);
/// assert_eq!(dump_set(&ids), "{1, 2, 3}");
/// ```
pub fn dump_set<T: Dump>(set: &BTreeSet<T>) -> String {
    dump_set_with(set, T::dump)
}

/// Render a set with a custom element converter.
pub fn dump_set_with<T, F>(set: &BTreeSet<T>, convert: F) -> String
where
    F: Fn(&T) -> String,
{
    trace!(entries = set.len(), "dump_set");
    let mut out = String::new();
    for entry in set {
        out.push_str(if out.is_empty() { "{" } else { ", " });
        out.push_str(&convert(entry));
    }
    if out.is_empty() {
        "{}".to_string()
    } else {
        out + "}"
    }
}

/// Render a map as one `key:value` line per entry, in ascending key order.
///
/// Lines are joined by a single newline with none before the first or after
/// the last. An empty map renders as the empty string.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use dump_fmt::dump_map;
///
/// let state = BTreeMap::from([(1, "x"), (2, "y")]);
/// assert_eq!(dump_map(&state), "1:x\n2:y");
/// ```
pub fn dump_map<K: Dump, V: Dump>(map: &BTreeMap<K, V>) -> String {
    dump_map_with(map, K::dump, V::dump)
}

/// Render a map with custom key and value converters.
pub fn dump_map_with<K, V, FK, FV>(map: &BTreeMap<K, V>, key: FK, value: FV) -> String
where
    FK: Fn(&K) -> String,
    FV: Fn(&V) -> String,
{
    trace!(entries = map.len(), "dump_map");
    let mut out = String::new();
    for (k, v) in map {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&key(k));
        out.push(':');
        out.push_str(&value(v));
    }
    out
}

/// Render only the keys of a map, in the set notation.
///
/// Useful when a dump needs "which entries exist" without their values.
/// An empty map renders as `"{}"`.
pub fn dump_map_keys<K: Dump, V>(map: &BTreeMap<K, V>) -> String {
    trace!(entries = map.len(), "dump_map_keys");
    let mut out = String::new();
    for k in map.keys() {
        out.push_str(if out.is_empty() { "{" } else { ", " });
        out.push_str(&k.dump());
    }
    if out.is_empty() {
        "{}".to_string()
    } else {
        out + "}"
    }
}

/// Render a slice as its elements joined by `", "`, in original order.
///
/// # Errors
///
/// Returns [`DumpError::EmptySequence`] for an empty slice. There is no
/// sensible placeholder for an empty sequence in the dump notation, so the
/// contract violation is surfaced to the caller instead of rendered.
///
/// # Example
///
/// ```
/// use dump_fmt::dump_slice;
///
/// assert_eq!(dump_slice(&[10, 20, 30]), Ok("10, 20, 30".to_string()));
/// ```
pub fn dump_slice<T: Dump>(values: &[T]) -> Result<String, DumpError> {
    dump_slice_with(values, T::dump)
}

/// Render a slice with a custom element converter.
///
/// # Errors
///
/// Returns [`DumpError::EmptySequence`] for an empty slice.
pub fn dump_slice_with<T, F>(values: &[T], convert: F) -> Result<String, DumpError>
where
    F: Fn(&T) -> String,
{
    trace!(entries = values.len(), "dump_slice");
    let (first, rest) = values.split_first().ok_or(DumpError::EmptySequence)?;
    let mut out = convert(first);
    for value in rest {
        out.push_str(", ");
        out.push_str(&convert(value));
    }
    Ok(out)
}
