//! Percent-encoding normalization backing URN equivalence.
//!
//! RFC 8141 §3 treats the hex digits of percent-encoded octets as
//! case-insensitive while the rest of the NSS stays case-sensitive.
//! Normalizing both operands before an exact comparison implements that
//! rule without decoding anything.

/// Upper-cases the two hex digits of every `%XX` triplet in `nss`,
/// leaving all other characters untouched.
///
/// A `%` not followed by two hex digits is copied verbatim. The operation
/// is idempotent.
///
/// # Examples
///
/// ```
/// use urn_rfc8141::normalize_percent_case;
///
/// assert_eq!(normalize_percent_case("a123%2cz456"), "a123%2Cz456");
/// assert_eq!(normalize_percent_case("a123,z456"), "a123,z456");
/// ```
#[must_use]
pub fn normalize_percent_case(nss: &str) -> String {
    if !nss.contains('%') {
        return nss.to_owned();
    }

    let chars: Vec<char> = nss.chars().collect();
    let mut out = String::with_capacity(nss.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '%'
            && i + 2 < chars.len()
            && chars[i + 1].is_ascii_hexdigit()
            && chars[i + 2].is_ascii_hexdigit()
        {
            out.push('%');
            out.push(chars[i + 1].to_ascii_uppercase());
            out.push(chars[i + 2].to_ascii_uppercase());
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}
