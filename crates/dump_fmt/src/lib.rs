//! Dump Formatting
//!
//! Stringification helpers for diagnostic dumps.
//!
//! Subsystems that expose a `dump()` debug surface need to render their
//! state as text: primitive fields, optional fields, id sets, keyed tables.
//! This crate provides those renderings plus the line-prefixing helper used
//! to indent a nested dump under its parent's header.
//!
//! All helpers are pure functions over borrowed input; the returned
//! `String` is the only thing produced.
//!
//! # Modules
//!
//! - [`convert`]: the [`Dump`] trait and default value conversions
//! - [`containers`]: set, map, and slice renderers
//! - [`prefix`]: line prefixing for indentation
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use dump_fmt::{dump_map, dump_optional, indent};
//!
//! let pointers = BTreeMap::from([(0, "ARROW"), (1, "HAND")]);
//! let dump = format!(
//!     "Pointers:\n{}\nViewport: {}",
//!     indent(&dump_map(&pointers)),
//!     dump_optional(&None::<i32>),
//! );
//! assert_eq!(dump, "Pointers:\n  0:ARROW\n  1:HAND\nViewport: <not set>");
//! ```

pub mod containers;
pub mod convert;
pub mod prefix;

pub use containers::{
    dump_map, dump_map_keys, dump_map_with, dump_set, dump_set_with, dump_slice, dump_slice_with,
    DumpError,
};
pub use convert::{bool_str, dump_optional, dump_optional_with, Dump, NOT_SET};
pub use prefix::{add_line_prefix, indent, INDENT};
