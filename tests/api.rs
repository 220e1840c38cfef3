// SPDX-License-Identifier: CC0-1.0

//! Test the API surface of `sha1-engine`.
//!
//! The point of these tests is to check the API surface as opposed to test the API functionality.
//!
//! ref: <https://rust-lang.github.io/api-guidelines/about.html>

#![allow(dead_code)]
#![allow(unused_imports)]

use core::str::FromStr;

// Import using module style e.g., `sha1::Hash`.
use sha1_engine::sha1;
// Import using type alias style e.g., `Sha1`.
use sha1_engine::{FromSliceError, HexToArrayError, Sha1, StateError};

/// All the digest and engine types.
#[derive(Clone)] // C-COMMON-TRAITS
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct Types {
    a: sha1::Hash,
    b: sha1::HashEngine,
}

impl Types {
    fn new() -> Self {
        Self { a: sha1::Hash::hash(&[]), b: sha1::Hash::engine() }
    }
}

/// A struct that includes all public error types.
#[derive(Debug, Clone, PartialEq, Eq)] // All public types implement Debug (C-DEBUG).
struct Errors {
    a: StateError,
    b: FromSliceError,
    c: HexToArrayError,
}

#[test]
fn api_can_use_modules_from_crate_root() {
    use sha1_engine::{hex, sha1};
}

#[test]
fn api_can_use_types_from_crate_root() {
    use sha1_engine::{FromSliceError, HashEngine, HexToArrayError, Sha1, StateError};
}

// `Debug` representation is never empty (C-DEBUG-NONEMPTY).
#[test]
fn api_all_types_have_non_empty_debug() {
    let t = Types::new();

    let debug = format!("{:?}", t.a);
    assert!(!debug.is_empty());

    let debug = format!("{:?}", t.b);
    assert!(!debug.is_empty());
}

#[test]
fn all_types_implement_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    // Types are `Send` and `Sync` where possible (C-SEND-SYNC).
    assert_send::<Types>();
    assert_sync::<Types>();

    // Error types should implement the Send and Sync traits (C-GOOD-ERR).
    assert_send::<Errors>();
    assert_sync::<Errors>();
}

#[test]
fn hash_parses_display_output() {
    let hash = Sha1::hash(b"api surface");
    let roundtrip = Sha1::from_str(&hash.to_string()).expect("display output parses");
    assert_eq!(roundtrip, hash);
}

#[test]
fn errors_display_without_panicking() {
    let state = format!("{}", StateError::AlreadyFinalized);
    assert!(!state.is_empty());
    let state = format!("{}", StateError::LengthOverflow);
    assert!(!state.is_empty());

    let slice = sha1::Hash::from_slice(&[0u8; 3]).unwrap_err();
    assert_eq!(format!("{}", slice), "invalid slice length 3 (expected 20)");

    let hex = Sha1::from_str("not a hash").unwrap_err();
    assert!(!format!("{}", hex).is_empty());
}

#[test]
fn engine_protocol_reset_reuses_instance() {
    let mut engine = sha1::HashEngine::new();
    engine.input(b"first message").expect("engine accepts input");
    let first = engine.finalize().expect("engine is not corrupted");

    // Finalized engines refuse input until reset.
    assert_eq!(engine.input(b"x"), Err(StateError::AlreadyFinalized));

    engine.reset();
    engine.input(b"second message").expect("reset engine accepts input");
    let second = engine.finalize().expect("engine is not corrupted");

    assert_ne!(first, second);
    assert_eq!(second, sha1::Hash::hash(b"second message").to_byte_array());
}

#[test]
fn digest_indexing_and_borrowing() {
    let hash = Sha1::hash(b"index me");
    let bytes = hash.to_byte_array();

    assert_eq!(hash[0], bytes[0]);
    assert_eq!(&hash[..], &bytes[..]);
    assert_eq!(&hash[4..8], &bytes[4..8]);
    assert_eq!(AsRef::<[u8]>::as_ref(&hash), &bytes[..]);
}
