//! Lexical productions of the URN grammar.
//!
//! RFC 8141 gives the URN syntax as:
//!
//! ```text
//! urn:<NID>:<NSS>[?+r-component][?=q-component][#f-component]
//! ```
//!
//! The matchers here are pure character-class checks plus a splitter for
//! the full production. The splitter enforces the fixed component order
//! (r before q before f); markers appearing out of order fail the match.

use crate::constants::{
    F_COMPONENT_MARKER, MAX_NID_LENGTH, MIN_NID_LENGTH, Q_COMPONENT_MARKER, R_COMPONENT_MARKER,
    SCHEME,
};

/// Borrowed captures of the full-URN production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrnParts<'a> {
    pub nid: &'a str,
    pub nss: &'a str,
    pub r_component: Option<&'a str>,
    pub q_component: Option<&'a str>,
    pub f_component: Option<&'a str>,
}

/// Returns true if the character is valid in a NID.
const fn is_nid_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Returns true if the character is valid in an NSS or optional component.
const fn is_nss_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.'
                | '_'
                | '~'
                | '*'
                | '+'
                | '='
                | '%'
                | '$'
                | '&'
                | '@'
                | '\''
                | '('
                | ')'
                | '!'
                | ','
                | ':'
                | ';'
                | '/'
        )
}

/// Returns true if `s` matches the NID production: 2 to 32 characters,
/// alphanumeric plus hyphen, first and last character alphanumeric.
pub(crate) fn is_nid(s: &str) -> bool {
    if !(MIN_NID_LENGTH..=MAX_NID_LENGTH).contains(&s.len()) {
        return false;
    }
    let bytes = s.as_bytes();
    bytes[0].is_ascii_alphanumeric()
        && bytes[s.len() - 1].is_ascii_alphanumeric()
        && s.chars().all(is_nid_char)
}

/// Returns true if `s` matches the NSS production (one or more characters
/// from the extended alphabet).
pub(crate) fn is_nss(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_nss_char)
}

/// Returns true if `s` is a valid r-, q-, or f-component.
///
/// Components share the NSS alphabet but may be empty; an empty component
/// renders the same as an absent one.
///
/// # Examples
///
/// ```
/// use urn_rfc8141::is_component;
///
/// assert!(is_component(""));
/// assert!(is_component("section-3"));
/// assert!(is_component("callback=https://example.com"));
/// assert!(!is_component("no spaces"));
/// ```
#[must_use]
pub fn is_component(s: &str) -> bool {
    s.chars().all(is_nss_char)
}

/// Matches `s` against the full-URN production and splits out the captures.
///
/// Returns `None` when the scheme, NID, NSS, component alphabet, or the
/// r→q→f ordering constraint is violated.
pub(crate) fn split(s: &str) -> Option<UrnParts<'_>> {
    let rest = strip_scheme(s)?;

    // The NSS alphabet includes ':', so the NID ends at the first colon.
    let colon = rest.find(':')?;
    let nid = &rest[..colon];
    if !is_nid(nid) {
        return None;
    }
    let rest = &rest[colon + 1..];

    // The NSS alphabet excludes '?' and '#', so either terminates the NSS.
    let nss_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let nss = &rest[..nss_end];
    if !is_nss(nss) {
        return None;
    }

    let mut tail = &rest[nss_end..];
    let mut r_component = None;
    let mut q_component = None;
    let mut f_component = None;

    if let Some(after) = tail.strip_prefix(R_COMPONENT_MARKER) {
        let end = after.find(['?', '#']).unwrap_or(after.len());
        let value = &after[..end];
        if !is_component(value) {
            return None;
        }
        r_component = Some(value);
        tail = &after[end..];
    }

    if let Some(after) = tail.strip_prefix(Q_COMPONENT_MARKER) {
        let end = after.find(['?', '#']).unwrap_or(after.len());
        let value = &after[..end];
        if !is_component(value) {
            return None;
        }
        q_component = Some(value);
        tail = &after[end..];
    }

    if let Some(after) = tail.strip_prefix(F_COMPONENT_MARKER) {
        if !is_component(after) {
            return None;
        }
        f_component = Some(after);
        tail = "";
    }

    // Anything left over is an out-of-order marker or trailing garbage.
    if !tail.is_empty() {
        return None;
    }

    Some(UrnParts {
        nid,
        nss,
        r_component,
        q_component,
        f_component,
    })
}

/// Strips a case-insensitive `urn:` scheme label.
///
/// Works on bytes so that multi-byte input near the label boundary cannot
/// split a character.
fn strip_scheme(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.len() > SCHEME.len()
        && bytes[..SCHEME.len()].eq_ignore_ascii_case(SCHEME.as_bytes())
        && bytes[SCHEME.len()] == b':'
    {
        Some(&s[SCHEME.len() + 1..])
    } else {
        None
    }
}
