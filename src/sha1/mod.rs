// SPDX-License-Identifier: CC0-1.0

//! SHA1 implementation.

mod crypto;

#[cfg(bench)]
mod benches;

use core::{cmp, fmt, str};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::error::{FromSliceError, HexToArrayError, StateError};

/// Length of a SHA1 message block, in bytes.
const BLOCK_SIZE: usize = 64;

/// Initial value of the five-word accumulator (FIPS 180-1).
const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Output of the SHA1 hash function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Hash([u8; 20]);

impl Hash {
    /// Length of the hash, in bytes.
    pub const LEN: usize = 20;

    /// Creates a default hash engine, adds `bytes` to it, then finalizes the engine.
    ///
    /// # Returns
    ///
    /// The digest created by hashing `bytes` with the SHA1 algorithm.
    #[allow(clippy::self_named_constructors)] // `hash` is a verb but `Hash` is a noun.
    pub fn hash(bytes: &[u8]) -> Self {
        let mut engine = Self::engine();
        engine.input(bytes).expect("fresh engine cannot be finalized or corrupted");
        Self::from_engine(engine).expect("fresh engine cannot be corrupted")
    }

    /// Returns a hash engine that is ready to be used for data.
    pub fn engine() -> HashEngine { HashEngine::new() }

    /// Finalizes `engine` and wraps the digest it produced.
    ///
    /// Fails only if the engine's bit-length counter overflowed, see
    /// [`HashEngine::finalize`].
    pub fn from_engine(mut engine: HashEngine) -> Result<Self, StateError> {
        engine.finalize().map(Self)
    }

    /// Copies a byte slice into a hash object.
    pub fn from_slice(sl: &[u8]) -> Result<Self, FromSliceError> {
        if sl.len() != Self::LEN {
            Err(FromSliceError { expected: Self::LEN, got: sl.len() })
        } else {
            let mut ret = [0; 20];
            ret.copy_from_slice(sl);
            Ok(Self(ret))
        }
    }

    /// Constructs a hash from the underlying byte array.
    pub fn from_byte_array(bytes: [u8; 20]) -> Self { Self(bytes) }

    /// Returns the underlying byte array.
    pub fn to_byte_array(self) -> [u8; 20] { self.0 }

    /// Returns a reference to the underlying byte array.
    pub fn as_byte_array(&self) -> &[u8; 20] { &self.0 }

    /// Returns a reference to the underlying byte array as a slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Copies the underlying bytes into a new `Vec`.
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> { self.0.to_vec() }

    /// Returns an all zero hash.
    ///
    /// An all zeros hash is a made up construct, there is no known preimage
    /// for it; it is useful as a placeholder or sentinel value.
    pub fn all_zeros() -> Self { Self([0x00; 20]) }
}

impl fmt::LowerHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        hex::fmt_hex_exact!(f, 20, self.as_byte_array(), hex::Case::Lower)
    }
}

impl fmt::UpperHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        hex::fmt_hex_exact!(f, 20, self.as_byte_array(), hex::Case::Upper)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl str::FromStr for Hash {
    type Err = HexToArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use hex::FromHex;

        let bytes = <[u8; 20]>::from_hex(s).map_err(HexToArrayError)?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl AsRef<[u8; 20]> for Hash {
    fn as_ref(&self) -> &[u8; 20] { &self.0 }
}

impl core::borrow::Borrow<[u8]> for Hash {
    fn borrow(&self) -> &[u8] { &self.0 }
}

impl<I: core::slice::SliceIndex<[u8]>> core::ops::Index<I> for Hash {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output { &self.0[index] }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hash {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.collect_str(self)
        } else {
            s.serialize_bytes(&self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hash {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::de;

        if d.is_human_readable() {
            struct HexVisitor;

            impl<'de> de::Visitor<'de> for HexVisitor {
                type Value = Hash;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("an ASCII hex string")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                    v.parse::<Hash>().map_err(E::custom)
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                    if let Ok(hex) = core::str::from_utf8(v) {
                        hex.parse::<Hash>().map_err(E::custom)
                    } else {
                        Err(E::invalid_value(de::Unexpected::Bytes(v), &self))
                    }
                }
            }

            d.deserialize_str(HexVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> de::Visitor<'de> for BytesVisitor {
                type Value = Hash;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a bytestring")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                    Hash::from_slice(v).map_err(E::custom)
                }
            }

            d.deserialize_bytes(BytesVisitor)
        }
    }
}

/// Engine to compute SHA1 hash function.
///
/// The engine follows a strict protocol: zero or more [`input`] calls, then
/// [`finalize`], optionally followed by [`reset`] to reuse the instance.
/// Feeding input after finalization, or overflowing the 64-bit bit-length
/// counter, is reported through [`StateError`] return values rather than
/// panics.
///
/// [`input`]: Self::input
/// [`finalize`]: Self::finalize
/// [`reset`]: Self::reset
#[derive(Debug, Clone)]
pub struct HashEngine {
    h: [u32; 5],
    // 64-bit bit count of all input consumed, split into two words with
    // explicit carry propagation so overflow of the high word is observable.
    length_low: u32,
    length_high: u32,
    buffer: [u8; BLOCK_SIZE],
    // Number of valid bytes in `buffer`; in [0, 63] between calls.
    buffer_idx: usize,
    computed: bool,
    corrupted: bool,
}

impl HashEngine {
    /// Constructs a new SHA1 hash engine.
    pub const fn new() -> Self {
        Self {
            h: INITIAL_STATE,
            length_low: 0,
            length_high: 0,
            buffer: [0; BLOCK_SIZE],
            buffer_idx: 0,
            computed: false,
            corrupted: false,
        }
    }

    /// Re-initializes the engine, discarding any buffered input, a computed
    /// digest and the corrupted flag. Always succeeds.
    pub fn reset(&mut self) { *self = Self::new(); }

    /// Adds data to the hash engine.
    ///
    /// Empty input is a successful no-op.
    ///
    /// # Errors
    ///
    /// [`StateError::AlreadyFinalized`] if the digest was already computed and
    /// the engine has not been reset; [`StateError::LengthOverflow`] if the
    /// total input length would pass 2^64 - 1 bits. The overflow check runs
    /// before any byte of this call is consumed, so no input past the limit
    /// is ever hashed.
    pub fn input(&mut self, mut data: &[u8]) -> Result<(), StateError> {
        if data.is_empty() {
            return Ok(());
        }
        if self.corrupted {
            return Err(StateError::LengthOverflow);
        }
        if self.computed {
            return Err(StateError::AlreadyFinalized);
        }

        self.record_bits(data.len())?;

        while !data.is_empty() {
            let write_len = cmp::min(BLOCK_SIZE - self.buffer_idx, data.len());
            self.buffer[self.buffer_idx..self.buffer_idx + write_len]
                .copy_from_slice(&data[..write_len]);
            self.buffer_idx += write_len;
            if self.buffer_idx == BLOCK_SIZE {
                Self::process_block(&mut self.h, &self.buffer);
                self.buffer_idx = 0;
            }
            data = &data[write_len..];
        }
        Ok(())
    }

    /// Finalizes the engine and extracts the 20-byte digest.
    ///
    /// The first successful call pads the message, runs the final block
    /// transformation(s) and scrubs the message buffer and length counters.
    /// Calling again without an intervening [`reset`] re-extracts the same
    /// digest without reprocessing.
    ///
    /// # Errors
    ///
    /// [`StateError::LengthOverflow`] if the bit-length counter overflowed;
    /// the error is sticky until [`reset`].
    ///
    /// [`reset`]: Self::reset
    pub fn finalize(&mut self) -> Result<[u8; 20], StateError> {
        if self.corrupted {
            return Err(StateError::LengthOverflow);
        }
        if !self.computed {
            self.pad_message();
            // Scrub message remnants; the digest lives only in `h` from here on.
            self.buffer = [0; BLOCK_SIZE];
            self.length_low = 0;
            self.length_high = 0;
            self.computed = true;
        }
        Ok(self.midstate())
    }

    /// Returns the number of bytes fed since creation or the last reset.
    ///
    /// Finalizing scrubs the length counters, so this reports zero once the
    /// digest has been computed.
    pub fn n_bytes_hashed(&self) -> u64 {
        ((u64::from(self.length_high) << 32) | u64::from(self.length_low)) / 8
    }

    // Advances the split bit counter by `n_bytes` worth of input, carrying
    // from the low word into the high word. On overflow of the high word the
    // engine is marked corrupted and nothing is consumed.
    fn record_bits(&mut self, n_bytes: usize) -> Result<(), StateError> {
        let n_bytes = n_bytes as u64;
        let (low, carry) = self.length_low.overflowing_add((n_bytes << 3) as u32);
        let high = u64::from(self.length_high) + (n_bytes >> 29) + u64::from(carry);
        if high > u64::from(u32::MAX) {
            self.corrupted = true;
            return Err(StateError::LengthOverflow);
        }
        self.length_low = low;
        self.length_high = high as u32;
        Ok(())
    }

    // Appends the 0x80 marker, zero-fills to the length field (spilling into
    // an extra block when the marker lands past byte 55), writes the big-endian
    // 64-bit bit count and runs the final block transformation(s).
    fn pad_message(&mut self) {
        self.buffer[self.buffer_idx] = 0x80;
        self.buffer[self.buffer_idx + 1..].fill(0);

        if self.buffer_idx >= BLOCK_SIZE - 8 {
            Self::process_block(&mut self.h, &self.buffer);
            self.buffer[..BLOCK_SIZE - 8].fill(0);
        }

        self.buffer[BLOCK_SIZE - 8..BLOCK_SIZE - 4]
            .copy_from_slice(&self.length_high.to_be_bytes());
        self.buffer[BLOCK_SIZE - 4..].copy_from_slice(&self.length_low.to_be_bytes());
        Self::process_block(&mut self.h, &self.buffer);
        self.buffer_idx = 0;
    }

    // Big-endian serialization of the accumulator words, in order.
    fn midstate(&self) -> [u8; 20] {
        let mut ret = [0; 20];
        for (ret_bytes, val) in ret.chunks_exact_mut(4).zip(self.h.iter()) {
            ret_bytes.copy_from_slice(&val.to_be_bytes());
        }
        ret
    }
}

impl Default for HashEngine {
    fn default() -> Self { Self::new() }
}

#[cfg(feature = "std")]
impl std::io::Write for HashEngine {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.input(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
