//! Property-based tests validating the parser against the ABNF grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them, ensuring parser-grammar conformance.

use proptest::prelude::*;

use urn_rfc8141::{is_component, normalize_percent_case, validates, Urn, UrnOptions};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Valid alphanumeric characters (NID edges, general filler)
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Valid NID interior characters (alphanumeric + hyphen)
    const NID_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

    /// The full NSS / component alphabet
    const NSS_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~*+=%$&@'()!,:;/";

    /// Generate a valid NID (2-32 chars, alphanumeric edges)
    pub fn nid() -> impl Strategy<Value = String> {
        (2..=32usize).prop_flat_map(|len| {
            let first = prop::sample::select(ALPHANUMERIC.to_vec());
            let middle_len = len - 2;
            let middle = prop::collection::vec(
                prop::sample::select(NID_CHARS.to_vec()),
                middle_len..=middle_len,
            );
            let last = prop::sample::select(ALPHANUMERIC.to_vec());

            (first, middle, last).prop_map(|(f, m, l)| {
                let mut s = String::with_capacity(2 + m.len());
                s.push(f as char);
                for c in m {
                    s.push(c as char);
                }
                s.push(l as char);
                s
            })
        })
    }

    /// Generate a valid NSS (1-40 chars from the extended alphabet)
    pub fn nss() -> impl Strategy<Value = String> {
        (1..=40usize).prop_flat_map(|len| {
            prop::collection::vec(prop::sample::select(NSS_CHARS.to_vec()), len..=len)
                .prop_map(|chars| chars.into_iter().map(|c| c as char).collect())
        })
    }

    /// Generate a non-empty component (empty renders as absent, which
    /// would not survive a structural round-trip)
    pub fn component() -> impl Strategy<Value = String> {
        (1..=24usize).prop_flat_map(|len| {
            prop::collection::vec(prop::sample::select(NSS_CHARS.to_vec()), len..=len)
                .prop_map(|chars| chars.into_iter().map(|c| c as char).collect())
        })
    }

    /// Generate a valid complete URN string with optional components
    pub fn urn_string() -> impl Strategy<Value = String> {
        (
            nid(),
            nss(),
            prop::option::of(component()),
            prop::option::of(component()),
            prop::option::of(component()),
        )
            .prop_map(|(nid, nss, r, q, f)| {
                let mut s = format!("urn:{nid}:{nss}");
                if let Some(r) = r {
                    s.push_str("?+");
                    s.push_str(&r);
                }
                if let Some(q) = q {
                    s.push_str("?=");
                    s.push_str(&q);
                }
                if let Some(f) = f {
                    s.push('#');
                    s.push_str(&f);
                }
                s
            })
    }
}

mod nid_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_nids_construct(n in nid()) {
            let result = Urn::new(&n, "nss");
            prop_assert!(result.is_ok(), "Failed to accept NID: {}", n);
        }

        #[test]
        fn nid_is_lower_cased(n in nid()) {
            let urn = Urn::new(&n, "nss").unwrap();
            prop_assert_eq!(urn.nid(), n.to_ascii_lowercase());
        }

        #[test]
        fn nid_case_insensitive_construction(n in nid()) {
            let lower = Urn::new(&n.to_ascii_lowercase(), "nss").unwrap();
            let mixed = Urn::new(&n, "nss").unwrap();
            prop_assert_eq!(lower.nid(), mixed.nid());
        }

        #[test]
        fn preserve_case_keeps_nid(n in nid()) {
            let urn = Urn::new_with(&n, "nss", UrnOptions::new().preserve_case()).unwrap();
            prop_assert_eq!(urn.nid(), n.as_str());
        }
    }
}

mod nss_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_nss_construct(s in nss()) {
            let result = Urn::new("example", &s);
            prop_assert!(result.is_ok(), "Failed to accept NSS: {}", s);
        }

        #[test]
        fn nss_stored_verbatim(s in nss()) {
            let urn = Urn::new("example", &s).unwrap();
            prop_assert_eq!(urn.nss(), s.as_str());
        }

        #[test]
        fn components_pass_validator(c in component()) {
            prop_assert!(is_component(&c));
        }
    }
}

mod equivalence_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn normalization_is_idempotent(s in nss()) {
            let once = normalize_percent_case(&s);
            let twice = normalize_percent_case(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn equivalence_is_reflexive(s in urn_string()) {
            let urn = Urn::parse(&s).unwrap();
            prop_assert!(urn.equivalent(&urn));
        }

        #[test]
        fn equivalence_ignores_nid_case(n in nid(), s in nss()) {
            let lower = Urn::new(&n.to_ascii_lowercase(), &s).unwrap();
            let preserved = Urn::new_with(&n, &s, UrnOptions::new().preserve_case()).unwrap();
            prop_assert!(lower.equivalent(&preserved));
        }

        #[test]
        fn equivalence_ignores_components(n in nid(), s in nss(), f in component()) {
            let plain = Urn::new(&n, &s).unwrap();
            let with_fragment =
                Urn::new_with(&n, &s, UrnOptions::new().fragment(f)).unwrap();
            prop_assert!(plain.equivalent(&with_fragment));
        }
    }
}

mod full_urn_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_urns_parse(s in urn_string()) {
            let result = Urn::parse(&s);
            prop_assert!(result.is_ok(), "Failed to parse URN: {}", s);
        }

        #[test]
        fn valid_urns_validate(s in urn_string()) {
            prop_assert!(validates(&s));
        }

        #[test]
        fn parsed_original_matches_input(s in urn_string()) {
            let urn = Urn::parse(&s).unwrap();
            prop_assert_eq!(urn.original(), s.as_str());
        }

        #[test]
        fn roundtrip_parse_serialize(s in urn_string()) {
            let parsed = Urn::parse(&s).unwrap();
            let serialized = parsed.to_string();
            let reparsed = Urn::parse(&serialized).unwrap();

            // Structural equality covers NID, NSS, and all components.
            prop_assert_eq!(&parsed, &reparsed);
            prop_assert_eq!(serialized, reparsed.to_string());
        }

        #[test]
        fn roundtrip_construct_serialize(
            n in nid(),
            s in nss(),
            r in prop::option::of(component()),
            q in prop::option::of(component()),
            f in prop::option::of(component()),
        ) {
            let mut opts = UrnOptions::new();
            if let Some(r) = r {
                opts = opts.resolution(r);
            }
            if let Some(q) = q {
                opts = opts.query(q);
            }
            if let Some(f) = f {
                opts = opts.fragment(f);
            }

            let built = Urn::new_with(&n, &s, opts).unwrap();
            let reparsed = Urn::parse(&built.to_string()).unwrap();
            prop_assert_eq!(built, reparsed);
        }
    }
}
