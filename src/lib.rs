//! Parser and validator for Uniform Resource Names (RFC 8141).
//!
//! This crate implements parsing, validation, normalization, and
//! serialization of URNs as defined by RFC 8141.
//!
//! # Overview
//!
//! URNs are persistent, location-independent identifiers with the
//! structure:
//!
//! ```text
//! urn:<NID>:<NSS>[?+r-component][?=q-component][#f-component]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use urn_rfc8141::Urn;
//!
//! // Parse an untrusted string
//! let urn = Urn::parse("urn:ietf:rfc:8141#section-3").unwrap();
//! assert_eq!(urn.nid(), "ietf");
//! assert_eq!(urn.nss(), "rfc:8141");
//! assert_eq!(urn.f_component(), Some("section-3"));
//!
//! // Construct from parts
//! let built = Urn::new("ietf", "rfc:8141").unwrap();
//! assert_eq!(built.to_string(), "urn:ietf:rfc:8141");
//!
//! // RFC 8141 equivalence ignores optional components
//! assert!(urn.equivalent(&built));
//! ```
//!
//! # Options
//!
//! Optional components and the case policy are supplied through
//! [`UrnOptions`]:
//!
//! ```rust
//! use urn_rfc8141::{Urn, UrnOptions};
//!
//! let urn = Urn::new_with(
//!     "isbn",
//!     "978-0135800911",
//!     UrnOptions::new().fragment("Chapter1").preserve_case(),
//! )
//! .unwrap();
//! assert_eq!(urn.to_string(), "urn:isbn:978-0135800911#Chapter1");
//! ```
//!
//! # Grammar Specification
//!
//! This crate implements the ABNF grammar defined in `grammar.abnf` at the
//! crate root. The grammar follows RFC 8141 §2:
//!
//! - **NID**: 2–32 characters, alphanumeric plus hyphen, first and last
//!   character alphanumeric, case-insensitive
//! - **NSS**: one or more characters from an extended alphanumeric and
//!   punctuation alphabet including percent-encoded octets
//! - **Components**: at most one r-component (`?+`), q-component (`?=`),
//!   and f-component (`#`), in that fixed order
//!
//! # Serde
//!
//! With the `serde` feature enabled, a [`Urn`] serializes as its canonical
//! string form (the zero value as the empty string) and deserializes
//! through the parser, so it can sit directly in larger data structures.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod equivalence;
mod error;
mod grammar;
mod options;
pub mod prelude;
mod urn;

pub use constants::{
    F_COMPONENT_MARKER, MAX_NID_LENGTH, MIN_NID_LENGTH, Q_COMPONENT_MARKER, R_COMPONENT_MARKER,
    SCHEME,
};
pub use equivalence::normalize_percent_case;
pub use error::{ComponentKind, UrnError};
pub use grammar::is_component;
pub use options::UrnOptions;
pub use urn::{validates, Urn};
