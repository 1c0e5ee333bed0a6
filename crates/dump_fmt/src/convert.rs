//! Value Conversion
//!
//! The [`Dump`] trait is the default value-to-string conversion used by the
//! container helpers in [`crate::containers`]. It renders values the way a
//! human reading a diagnostic dump expects: booleans as `true`/`false`,
//! numbers in plain base-10 with no padding, strings verbatim.
//!
//! Callers needing a different rendering pass a closure to the `_with`
//! variants of the container helpers instead of implementing `Dump`.

/// Sentinel rendered for an absent optional value.
pub const NOT_SET: &str = "<not set>";

/// Default conversion of a value to its dump representation.
///
/// Implementations must be pure: same input, same output, no side effects.
///
/// # Example
///
/// ```
/// use dump_fmt::Dump;
///
/// assert_eq!(true.dump(), "true");
/// assert_eq!(42_u32.dump(), "42");
/// assert_eq!("ready".dump(), "ready");
/// ```
pub trait Dump {
    /// Render the value as a human-readable string.
    fn dump(&self) -> String;
}

impl Dump for bool {
    fn dump(&self) -> String {
        bool_str(*self).to_string()
    }
}

macro_rules! impl_dump_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dump for $ty {
                fn dump(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_dump_via_display!(i8, i16, i32, i64, i128, isize);
impl_dump_via_display!(u8, u16, u32, u64, u128, usize);
impl_dump_via_display!(f32, f64);

impl Dump for String {
    fn dump(&self) -> String {
        self.clone()
    }
}

impl Dump for &str {
    fn dump(&self) -> String {
        (*self).to_string()
    }
}

/// Render a boolean as `"true"` or `"false"`.
///
/// Non-generic counterpart of `bool::dump` for call sites that need a plain
/// `fn(bool) -> &'static str`, e.g. when stored behind a function pointer.
#[inline]
pub fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render an optional value, or [`NOT_SET`] if absent.
///
/// # Example
///
/// ```
/// use dump_fmt::dump_optional;
///
/// assert_eq!(dump_optional(&Some(7)), "7");
/// assert_eq!(dump_optional(&None::<i32>), "<not set>");
/// ```
pub fn dump_optional<T: Dump>(value: &Option<T>) -> String {
    dump_optional_with(value, T::dump)
}

/// Render an optional value with a custom converter, or [`NOT_SET`] if absent.
///
/// The converter may be any closure, including a capturing one.
pub fn dump_optional_with<T, F>(value: &Option<T>, convert: F) -> String
where
    F: Fn(&T) -> String,
{
    match value {
        Some(inner) => convert(inner),
        None => NOT_SET.to_string(),
    }
}
