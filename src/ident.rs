//! Field-identifier formatting: arbitrary JSON keys → conventional camelCase.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

/// Trailing name segments that convention renders fully upper-case.
static UPPERCASE_FIXUPS: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| BTreeSet::from(["id", "url"]));

/// Format a raw JSON key as a field identifier.
///
/// Split on `_`, capitalize the first letter of each part (a trailing
/// `id`/`url` part goes fully upper-case instead), join, mask every rune
/// that cannot appear in an identifier with `_`, then run the soft-camel
/// pass that lowers the leading rune.
///
/// Pure and total; the worst case is a string of underscores.
///
/// Example: `quest_id` → `questID`.
pub fn format_field_name(raw: &str) -> String {
    let mut parts: Vec<String> = raw.split('_').map(title_first_alphabetic).collect();
    if let Some(last) = parts.last_mut() {
        if UPPERCASE_FIXUPS.contains(last.to_lowercase().as_str()) {
            *last = last.to_uppercase();
        }
    }
    let assembled = parts.concat();

    let mut sanitized = String::with_capacity(assembled.len());
    for (i, c) in assembled.chars().enumerate() {
        let ok = if i == 0 { c.is_alphabetic() } else { c.is_alphanumeric() };
        sanitized.push(if ok { c } else { '_' });
    }

    soft_camel(&sanitized)
}

fn title_first_alphabetic(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut upcased = false;
    for c in part.chars() {
        if !upcased && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            upcased = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Lower-case every rune that follows a separator. The start of the string
/// counts as a separator position, so a leading uppercase run loses its
/// first rune's casing.
fn soft_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = ' ';
    for c in s.chars() {
        if is_separator(prev) {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

/// ASCII alphanumerics and `_` are never separators. Outside ASCII, letters
/// and digits are not separators, and only whitespace is.
fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphabetic() || c.is_numeric() {
        return false;
    }
    c.is_whitespace()
}
