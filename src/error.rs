// SPDX-License-Identifier: CC0-1.0

//! Contains error types and other error handling tools.

use core::fmt;

/// Formats error.
///
/// If `std` feature is OFF appends error source (delimited by `: `). We do this because
/// `e.source()` is only available in std builds, without this macro the error source is lost for
/// no-std builds.
macro_rules! write_err {
    ($writer:expr, $string:literal $(, $args:expr)*; $source:expr) => {
        {
            #[cfg(feature = "std")]
            {
                let _ = &$source;   // Prevents clippy warnings.
                write!($writer, $string $(, $args)*)
            }
            #[cfg(not(feature = "std"))]
            {
                write!($writer, concat!($string, ": {}") $(, $args)*, $source)
            }
        }
    }
}
pub(crate) use write_err;

/// The feed/finalize protocol of a [`HashEngine`] was violated.
///
/// Both conditions are reported as return values, never panics, so callers
/// must check them. [`HashEngine::reset`] clears either condition.
///
/// [`HashEngine`]: crate::sha1::HashEngine
/// [`HashEngine::reset`]: crate::sha1::HashEngine::reset
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Input was fed after the digest had been finalized.
    ///
    /// The already-computed digest is unaffected and can still be extracted.
    AlreadyFinalized,
    /// The 64-bit bit-length counter overflowed: more than 2^64 - 1 bits of
    /// input were fed in total.
    ///
    /// Sticky: every subsequent operation on the engine fails with this same
    /// error until the engine is reset.
    LengthOverflow,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::AlreadyFinalized => f.write_str("input fed after the digest was finalized"),
            Self::LengthOverflow => f.write_str("total input length exceeds 2^64 - 1 bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
}

/// Attempted to create a hash from an invalid length slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FromSliceError {
    pub(crate) expected: usize,
    pub(crate) got: usize,
}

impl fmt::Display for FromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid slice length {} (expected {})", self.got, self.expected)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromSliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
}

/// Error converting hex to an array.
// Intentionally opaque so as to hide `hex` from the public API - do not make the inner error pub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexToArrayError(pub(crate) hex::HexToArrayError);

impl fmt::Display for HexToArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write_err!(f, "hex to array"; self.0) }
}

#[cfg(feature = "std")]
impl std::error::Error for HexToArrayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.0) }
}
