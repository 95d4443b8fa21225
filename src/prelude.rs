//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use urn_rfc8141::prelude::*;
//!
//! let urn = Urn::parse("urn:ietf:rfc:8141").unwrap();
//! assert!(validates("urn:ietf:rfc:8141"));
//! ```

pub use crate::{
    // Core type and free functions
    is_component, normalize_percent_case, validates, Urn,
    // Options
    UrnOptions,
    // Errors
    ComponentKind, UrnError,
    // Constants
    F_COMPONENT_MARKER, MAX_NID_LENGTH, MIN_NID_LENGTH, Q_COMPONENT_MARKER, R_COMPONENT_MARKER,
    SCHEME,
};
