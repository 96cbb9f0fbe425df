//! Free-text field sanitizing.
//!
//! Descriptive fields from the three sources disagree on punctuation, spacing
//! and legal-entity decorations. Reducing them to `[a-z0-9_]` tokens makes the
//! company-name comparisons in the linker meaningful.

/// Legal-entity tokens stripped from sanitized company names, in order.
pub const LEGAL_SUFFIXES: [&str; 7] = ["_inc", "_corp", "_llp", "_llc", "_ltd", "_co", "_limited"];

/// Reduces a value to ASCII letters, digits and single underscores.
///
/// Surrounding whitespace is trimmed, each inner whitespace run becomes one
/// `_`, and every other character is replaced by `placeholder`. Runs of `_`
/// produced by any of these steps are collapsed.
///
/// Only ASCII letters and digits are kept: accented and non-Latin letters are
/// replaced like punctuation, so with the default empty placeholder `"zürich"`
/// becomes `"zrich"`.
pub fn sanitize(value: &str, placeholder: &str) -> String {
    let mut raw = String::with_capacity(value.len());
    let mut in_space = false;
    for ch in value.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                raw.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_alphanumeric() || ch == '_' {
            raw.push(ch);
        } else {
            raw.push_str(placeholder);
        }
    }
    collapse_underscores(&raw)
}

fn collapse_underscores(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_underscore = false;
    for ch in value.chars() {
        if ch == '_' {
            if previous_underscore {
                continue;
            }
            previous_underscore = true;
        } else {
            previous_underscore = false;
        }
        out.push(ch);
    }
    out
}

/// Removes every occurrence of each [`LEGAL_SUFFIXES`] token.
///
/// Tokens are removed as plain substrings, so `_co` also eats the start of
/// `_company`.
pub fn strip_legal_suffixes(name: &str) -> String {
    LEGAL_SUFFIXES
        .iter()
        .fold(name.to_string(), |acc, suffix| acc.replace(suffix, ""))
}
