//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{UriError, UriValue};

/// Characters for generated path segments; no delimiters
const SEGMENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~";

fn arbitrary_segment_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % SEGMENT_CHARS.len();
    SEGMENT_CHARS[idx] as char
}

fn arbitrary_segment() -> String {
    // 1-4 chars for tractability
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len).map(|_| arbitrary_segment_char()).collect()
}

/// Generates a relative path of 1-3 segments, such as `ab/c-d`.
impl kani::Arbitrary for UriValue {
    fn any() -> Self {
        let count: usize = kani::any();
        let count = 1 + (count % 3);
        let path = (0..count)
            .map(|_| arbitrary_segment())
            .collect::<Vec<_>>()
            .join("/");

        UriValue::parse(&path).expect("valid relative path by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Display writes back the parsed text
#[kani::proof]
#[kani::unwind(16)]
fn proof_display_roundtrip() {
    let uri: UriValue = kani::any();
    let reparsed = UriValue::parse(&uri.to_string()).expect("display output should parse");
    assert_eq!(reparsed.as_str(), uri.as_str());
}

/// Proof: Generated segment paths are relative and stay relative when reparsed
#[kani::proof]
#[kani::unwind(16)]
fn proof_generated_paths_are_relative() {
    let uri: UriValue = kani::any();
    assert!(uri.is_relative());
    assert!(uri.host().is_empty());
}

/// Proof: Resolving then relativizing against the same base is the identity
#[kani::proof]
#[kani::unwind(24)]
fn proof_absolute_then_relative_is_identity() {
    let base = UriValue::parse("/home/john").expect("valid base");
    let uri: UriValue = kani::any();

    let absolute = uri.absolute_uri(&base).expect("relative against absolute base");
    assert!(absolute.is_under(&base));

    let relative = absolute.relative_uri(&base).expect("absolute under base");
    assert_eq!(relative.as_str(), uri.as_str());
}

/// Proof: A relative base is always rejected before the receiver is checked
#[kani::proof]
#[kani::unwind(16)]
fn proof_relative_base_rejected_first() {
    let base: UriValue = kani::any();
    let uri: UriValue = kani::any();

    assert!(matches!(
        uri.absolute_uri(&base),
        Err(UriError::BaseNotAbsolute { .. })
    ));
    assert!(matches!(
        uri.relative_uri(&base),
        Err(UriError::BaseNotAbsolute { .. })
    ));
}
