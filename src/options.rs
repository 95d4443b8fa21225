//! Configuration for URN construction and parsing.

/// Options accepted by [`Urn::new_with`] and [`Urn::parse_with`].
///
/// This record stands in for functional options: each chainable setter
/// fills a named optional field, and the constructor pipeline applies
/// them in r→q→f order.
///
/// # Examples
///
/// ```
/// use urn_rfc8141::{Urn, UrnOptions};
///
/// let urn = Urn::new_with(
///     "isbn",
///     "978-0135800911",
///     UrnOptions::new().fragment("Chapter1"),
/// )
/// .unwrap();
/// assert_eq!(urn.to_string(), "urn:isbn:978-0135800911#Chapter1");
/// ```
///
/// [`Urn::new_with`]: crate::Urn::new_with
/// [`Urn::parse_with`]: crate::Urn::parse_with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrnOptions {
    pub(crate) resolution: Option<String>,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
    pub(crate) preserve_case: bool,
}

impl UrnOptions {
    /// Creates an empty options record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the r-component; the part introduced by `?+`.
    #[must_use]
    pub fn resolution(mut self, value: impl Into<String>) -> Self {
        self.resolution = Some(value.into());
        self
    }

    /// Sets the q-component; the part introduced by `?=` (not `?` alone
    /// as is the case for a URI).
    #[must_use]
    pub fn query(mut self, value: impl Into<String>) -> Self {
        self.query = Some(value.into());
        self
    }

    /// Sets the f-component; the part introduced by the number sign `#`
    /// (same syntax as the URI fragment component).
    #[must_use]
    pub fn fragment(mut self, value: impl Into<String>) -> Self {
        self.fragment = Some(value.into());
        self
    }

    /// Keeps the NID exactly as given instead of lower-casing it.
    ///
    /// Equivalence checks still treat the NID as case-insensitive.
    #[must_use]
    pub fn preserve_case(mut self) -> Self {
        self.preserve_case = true;
        self
    }

    /// True if any optional component was supplied.
    pub(crate) fn has_components(&self) -> bool {
        self.resolution.is_some() || self.query.is_some() || self.fragment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let opts = UrnOptions::new();
        assert!(!opts.has_components());
        assert!(!opts.preserve_case);
    }

    #[test]
    fn setters_fill_fields() {
        let opts = UrnOptions::new()
            .resolution("res")
            .query("q=1")
            .fragment("frag")
            .preserve_case();
        assert_eq!(opts.resolution.as_deref(), Some("res"));
        assert_eq!(opts.query.as_deref(), Some("q=1"));
        assert_eq!(opts.fragment.as_deref(), Some("frag"));
        assert!(opts.preserve_case);
        assert!(opts.has_components());
    }

    #[test]
    fn any_single_component_counts() {
        assert!(UrnOptions::new().resolution("r").has_components());
        assert!(UrnOptions::new().query("q").has_components());
        assert!(UrnOptions::new().fragment("f").has_components());
        assert!(!UrnOptions::new().preserve_case().has_components());
    }
}
