//! Line Prefixing
//!
//! Prepends a fixed string to every line of a text block. The common use is
//! indenting a nested multi-line dump under its parent's header so the
//! output reads as a tree.

/// Indentation used for one nesting level of a dump.
pub const INDENT: &str = "  ";

/// Prefix every line of `text` with `prefix`, including the first.
///
/// Line boundaries and any trailing newline are preserved. The prefix is
/// only emitted for lines that have content after them, so a trailing
/// newline does not grow a dangling prefix and empty input stays empty.
///
/// # Example
///
/// ```
/// use dump_fmt::add_line_prefix;
///
/// assert_eq!(add_line_prefix("a\nb", ">> "), ">> a\n>> b");
/// assert_eq!(add_line_prefix("a\nb\n", ">> "), ">> a\n>> b\n");
/// ```
pub fn add_line_prefix(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len());
    let mut at_line_start = true;
    for ch in text.chars() {
        if at_line_start {
            out.push_str(prefix);
            at_line_start = false;
        }
        if ch == '\n' {
            at_line_start = true;
        }
        out.push(ch);
    }
    out
}

/// Indent every line of `text` by one level ([`INDENT`]).
pub fn indent(text: &str) -> String {
    add_line_prefix(text, INDENT)
}
