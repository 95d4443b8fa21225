//! Error types for URN construction and parsing.

use std::fmt;

/// The optional URN component kinds.
///
/// RFC 8141 defines three optional components trailing the NSS:
/// the r-component (`?+`), the q-component (`?=`), and the
/// f-component (`#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// The r-component, carrying hints for resolution services.
    Resolution,
    /// The q-component, a query passed to the named resource.
    Query,
    /// The f-component, a fragment (same role as the URI fragment).
    Fragment,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution => write!(f, "r-component"),
            Self::Query => write!(f, "q-component"),
            Self::Fragment => write!(f, "f-component"),
        }
    }
}

/// Errors that can occur when constructing or parsing a URN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrnError {
    /// The namespace identifier does not match the NID grammar.
    InvalidNid,
    /// The namespace specific string does not match the NSS grammar.
    InvalidNss,
    /// An optional component does not match the component grammar.
    InvalidComponent(ComponentKind),
    /// The input does not match the URN production at all.
    InvalidUrn,
}

impl fmt::Display for UrnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNid => write!(f, "invalid namespace identifier (NID)"),
            Self::InvalidNss => write!(f, "invalid namespace specific string (NSS)"),
            Self::InvalidComponent(kind) => write!(f, "invalid {kind}"),
            Self::InvalidUrn => write!(f, "invalid URN"),
        }
    }
}

impl std::error::Error for UrnError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_display() {
        assert_eq!(ComponentKind::Resolution.to_string(), "r-component");
        assert_eq!(ComponentKind::Query.to_string(), "q-component");
        assert_eq!(ComponentKind::Fragment.to_string(), "f-component");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            UrnError::InvalidNid.to_string(),
            "invalid namespace identifier (NID)"
        );
        assert_eq!(
            UrnError::InvalidNss.to_string(),
            "invalid namespace specific string (NSS)"
        );
        assert_eq!(
            UrnError::InvalidComponent(ComponentKind::Query).to_string(),
            "invalid q-component"
        );
        assert_eq!(UrnError::InvalidUrn.to_string(), "invalid URN");
    }
}
