//! Main URN type.

use std::fmt;
use std::str::FromStr;

use crate::constants::{F_COMPONENT_MARKER, Q_COMPONENT_MARKER, R_COMPONENT_MARKER, SCHEME};
use crate::equivalence::normalize_percent_case;
use crate::error::{ComponentKind, UrnError};
use crate::grammar;
use crate::options::UrnOptions;

/// A parsed and validated URN as defined by RFC 8141.
///
/// # Structure
///
/// ```text
/// urn:<NID>:<NSS>[?+r-component][?=q-component][#f-component]
/// ```
///
/// NID stands for Namespace Identifier, NSS for Namespace Specific
/// String. The three trailing components are optional.
///
/// # Examples
///
/// ```
/// use urn_rfc8141::Urn;
///
/// let urn = Urn::parse("urn:ietf:rfc:8141#section-3").unwrap();
/// assert_eq!(urn.nid(), "ietf");
/// assert_eq!(urn.nss(), "rfc:8141");
/// assert_eq!(urn.f_component(), Some("section-3"));
/// assert_eq!(urn.to_string(), "urn:ietf:rfc:8141#section-3");
/// ```
///
/// # Equality
///
/// `==` is structural: it compares the NID, NSS, and components exactly,
/// ignoring the informational [`original`](Urn::original) slot. For the
/// relaxed RFC 8141 notion of "same URN" use [`Urn::equivalent`].
#[derive(Debug, Clone, Default)]
pub struct Urn {
    nid: String,
    nss: String,
    r_component: Option<String>,
    q_component: Option<String>,
    f_component: Option<String>,
    /// Raw input; only set by the parsing constructors.
    original: String,
}

impl Urn {
    /// Creates a URN from a namespace identifier and a namespace specific
    /// string.
    ///
    /// The NID is lower-cased per the RFC; use
    /// [`UrnOptions::preserve_case`] with [`Urn::new_with`] to keep it as
    /// given. The NSS is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidNid`] or [`UrnError::InvalidNss`] when
    /// the respective part fails its grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use urn_rfc8141::Urn;
    ///
    /// let urn = Urn::new("ietf", "rfc:8141").unwrap();
    /// assert_eq!(urn.to_string(), "urn:ietf:rfc:8141");
    /// ```
    pub fn new(nid: &str, nss: &str) -> Result<Self, UrnError> {
        Self::new_with(nid, nss, UrnOptions::new())
    }

    /// Creates a URN from its parts, applying the given options.
    ///
    /// Optional components supplied through `options` are validated in
    /// r→q→f order; the first failure wins, with the NID checked before
    /// the NSS and the NSS before any component.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidNid`], [`UrnError::InvalidNss`], or
    /// [`UrnError::InvalidComponent`] naming the offending component.
    ///
    /// # Examples
    ///
    /// ```
    /// use urn_rfc8141::{Urn, UrnOptions};
    ///
    /// let urn = Urn::new_with(
    ///     "isbn",
    ///     "978-0135800911",
    ///     UrnOptions::new().query("callback=https://example.com"),
    /// )
    /// .unwrap();
    /// assert_eq!(urn.q_component(), Some("callback=https://example.com"));
    /// ```
    pub fn new_with(nid: &str, nss: &str, options: UrnOptions) -> Result<Self, UrnError> {
        if !grammar::is_nid(nid) {
            return Err(UrnError::InvalidNid);
        }
        if !grammar::is_nss(nss) {
            return Err(UrnError::InvalidNss);
        }

        let nid = if options.preserve_case {
            nid.to_owned()
        } else {
            nid.to_ascii_lowercase()
        };

        let mut urn = Self {
            nid,
            nss: nss.to_owned(),
            ..Self::default()
        };

        if let Some(r) = &options.resolution {
            urn.set_r_component(r)?;
        }
        if let Some(q) = &options.query {
            urn.set_q_component(q)?;
        }
        if let Some(f) = &options.fragment {
            urn.set_f_component(f)?;
        }

        Ok(urn)
    }

    /// Parses a URN from a string.
    ///
    /// Whitespace-only input yields the zero value, not an error; this is
    /// the canonical "no URN" for optional fields in larger structures.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidUrn`] when the input does not match the
    /// URN production, or the constructor pipeline's error when the
    /// captured NID or NSS is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use urn_rfc8141::Urn;
    ///
    /// let urn = Urn::parse("UrN:IsBn:978-0135800911").unwrap();
    /// assert_eq!(urn.nid(), "isbn");
    /// assert_eq!(urn.original(), "UrN:IsBn:978-0135800911");
    ///
    /// assert!(Urn::parse("").unwrap().is_zero());
    /// assert!(Urn::parse("urn:ie+tf:rfc:8141").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, UrnError> {
        Self::parse_with(input, UrnOptions::new())
    }

    /// Parses a URN from a string, applying the given options.
    ///
    /// Only [`UrnOptions::preserve_case`] is meaningful here; the
    /// components are taken from the input itself.
    ///
    /// # Panics
    ///
    /// Panics if `options` carries any of the resolution, query, or
    /// fragment components. Supplying them to the parse path is a
    /// programming defect, not an input error.
    ///
    /// # Errors
    ///
    /// Same as [`Urn::parse`].
    pub fn parse_with(input: &str, options: UrnOptions) -> Result<Self, UrnError> {
        assert!(
            !options.has_components(),
            "cannot supply resolution/query/fragment options when parsing"
        );

        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        let parts = grammar::split(input).ok_or(UrnError::InvalidUrn)?;
        let mut urn = Self::new_with(parts.nid, parts.nss, options)?;

        // Captures come from already-matched text; no revalidation needed.
        urn.r_component = parts.r_component.map(str::to_owned);
        urn.q_component = parts.q_component.map(str::to_owned);
        urn.f_component = parts.f_component.map(str::to_owned);
        urn.original = input.to_owned();

        Ok(urn)
    }

    /// Returns the namespace identifier.
    #[must_use]
    pub fn nid(&self) -> &str {
        &self.nid
    }

    /// Returns the namespace specific string.
    #[must_use]
    pub fn nss(&self) -> &str {
        &self.nss
    }

    /// Returns the raw input this URN was parsed from.
    ///
    /// Empty for URNs built from parts. Informational only: excluded from
    /// equality, equivalence, and serialization.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the r-component, if present.
    #[must_use]
    pub fn r_component(&self) -> Option<&str> {
        self.r_component.as_deref()
    }

    /// Sets the r-component, validating it against the component grammar.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidComponent`] when the value is not a
    /// legal component.
    pub fn set_r_component(&mut self, value: &str) -> Result<(), UrnError> {
        if !grammar::is_component(value) {
            return Err(UrnError::InvalidComponent(ComponentKind::Resolution));
        }
        self.r_component = Some(value.to_owned());
        Ok(())
    }

    /// Returns the q-component, if present.
    #[must_use]
    pub fn q_component(&self) -> Option<&str> {
        self.q_component.as_deref()
    }

    /// Sets the q-component, validating it against the component grammar.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidComponent`] when the value is not a
    /// legal component.
    pub fn set_q_component(&mut self, value: &str) -> Result<(), UrnError> {
        if !grammar::is_component(value) {
            return Err(UrnError::InvalidComponent(ComponentKind::Query));
        }
        self.q_component = Some(value.to_owned());
        Ok(())
    }

    /// Returns the f-component, if present.
    #[must_use]
    pub fn f_component(&self) -> Option<&str> {
        self.f_component.as_deref()
    }

    /// Sets the f-component, validating it against the component grammar.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidComponent`] when the value is not a
    /// legal component.
    pub fn set_f_component(&mut self, value: &str) -> Result<(), UrnError> {
        if !grammar::is_component(value) {
            return Err(UrnError::InvalidComponent(ComponentKind::Fragment));
        }
        self.f_component = Some(value.to_owned());
        Ok(())
    }

    /// Returns true if the NID or NSS is empty.
    ///
    /// The zero value is what [`Urn::parse`] returns for empty input and
    /// what [`Display`](fmt::Display) renders as the empty string.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.nid.is_empty() || self.nss.is_empty()
    }

    /// Reports whether `self` and `other` represent the same URN under
    /// RFC 8141 equivalence.
    ///
    /// NIDs are compared case-insensitively. NSS values are compared
    /// exactly after upper-casing the hex digits of every percent-encoded
    /// triplet, so `%2c` matches `%2C` but neither matches a literal `,`.
    /// Optional components are ignored entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use urn_rfc8141::Urn;
    ///
    /// let a = Urn::parse("urn:example:a123%2Cz456").unwrap();
    /// let b = Urn::parse("urn:EXAMPLE:a123%2cz456").unwrap();
    /// let c = Urn::parse("urn:example:a123,z456").unwrap();
    /// assert!(a.equivalent(&b));
    /// assert!(!a.equivalent(&c));
    /// ```
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        self.nid.eq_ignore_ascii_case(&other.nid)
            && normalize_percent_case(&self.nss) == normalize_percent_case(&other.nss)
    }
}

/// Structural equality over NID, NSS, and components; `original` is
/// informational and excluded.
impl PartialEq for Urn {
    fn eq(&self, other: &Self) -> bool {
        self.nid == other.nid
            && self.nss == other.nss
            && self.r_component == other.r_component
            && self.q_component == other.q_component
            && self.f_component == other.f_component
    }
}

impl Eq for Urn {}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return Ok(());
        }

        write!(f, "{SCHEME}:{}:{}", self.nid, self.nss)?;

        if let Some(r) = self.r_component.as_deref().filter(|c| !c.is_empty()) {
            write!(f, "{R_COMPONENT_MARKER}{r}")?;
        }
        if let Some(q) = self.q_component.as_deref().filter(|c| !c.is_empty()) {
            write!(f, "{Q_COMPONENT_MARKER}{q}")?;
        }
        if let Some(frag) = self.f_component.as_deref().filter(|c| !c.is_empty()) {
            write!(f, "{F_COMPONENT_MARKER}{frag}")?;
        }

        Ok(())
    }
}

impl FromStr for Urn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = UrnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Verifies whether `s` can be parsed as a non-zero URN.
///
/// # Examples
///
/// ```
/// use urn_rfc8141::validates;
///
/// assert!(validates("urn:ietf:rfc:8141#section-3"));
/// assert!(!validates("urn:ie+tf:rfc:8141#section-3"));
/// assert!(!validates(""));
/// ```
#[must_use]
pub fn validates(s: &str) -> bool {
    Urn::parse(s).is_ok_and(|u| !u.is_zero())
}
