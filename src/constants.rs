//! Constants for URN validation.

/// Minimum NID length per RFC 8141.
pub const MIN_NID_LENGTH: usize = 2;

/// Maximum NID length per RFC 8141.
pub const MAX_NID_LENGTH: usize = 32;

/// The URI scheme.
pub const SCHEME: &str = "urn";

/// Marker introducing the r-component.
pub const R_COMPONENT_MARKER: &str = "?+";

/// Marker introducing the q-component.
pub const Q_COMPONENT_MARKER: &str = "?=";

/// Marker introducing the f-component.
pub const F_COMPONENT_MARKER: &str = "#";
