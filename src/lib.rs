// SPDX-License-Identifier: CC0-1.0

//! Streaming SHA-1 library.
//!
//! This is a small, almost-no-dependency library which implements the SHA-1
//! hash function as a resettable, incremental engine: bytes are fed in one or
//! more chunks and a fixed 20-byte digest is extracted at the end. As an
//! ancillary thing, it exposes hexadecimal serialization and deserialization,
//! since these are needed to display digests anyway.
//!
//! SHA-1 is cryptographically broken for collision resistance; this crate
//! exists for protocols that still require it (checksums, content addressing,
//! legacy handshakes), not for new designs.
//!
//! ## Commonly used operations
//!
//! Hashing a single byte slice or a string:
//!
//! ```rust
//! use sha1_engine::sha1;
//!
//! let digest = sha1::Hash::hash(b"Hello, World!");
//! assert_eq!(digest.to_string(), "0a0a9f2a6772942557ab5355d76af442f8f65e01");
//! ```
//!
//! Feeding input incrementally:
//!
//! ```rust
//! use sha1_engine::{sha1, StateError};
//!
//! # fn main() -> Result<(), StateError> {
//! let mut engine = sha1::Hash::engine();
//! engine.input(b"Hello, ")?;
//! engine.input(b"World!")?;
//! let digest = engine.finalize()?;
//! assert_eq!(digest, sha1::Hash::hash(b"Hello, World!").to_byte_array());
//! # Ok(())
//! # }
//! ```
//!
//! Hashing content from a reader via [`std::io::Write`]:
//!
//! ```rust
//! use sha1_engine::sha1;
//!
//! # fn main() -> std::io::Result<()> {
//! let mut reader: &[u8] = b"hello"; // in real code, this could be a `File` or `TcpStream`
//! let mut engine = sha1::Hash::engine();
//! std::io::copy(&mut reader, &mut engine)?;
//! let hash = sha1::Hash::from_engine(engine).expect("engine is not corrupted");
//! # Ok(())
//! # }
//! ```

// Coding conventions
#![warn(missing_docs)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(bench, feature(test))]
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "serde")]
/// A generic serialization/deserialization framework.
pub extern crate serde;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;
#[cfg(bench)]
extern crate test;

/// Re-export the `hex-conservative` crate.
pub extern crate hex;

mod error;
pub mod sha1;

pub use self::error::{FromSliceError, HexToArrayError, StateError};
#[doc(inline)]
pub use self::sha1::{Hash as Sha1, HashEngine};
