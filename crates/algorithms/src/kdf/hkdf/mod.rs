//! HMAC-based Key Derivation Function (RFC 5869)
//!
//! Extract-then-expand over HMAC-SHA256. Input keying material that is not
//! necessarily uniform (an ECDH x-coordinate, here) is first concentrated
//! into a 32-byte pseudorandom key, then expanded under a context string
//! into as much output as the caller needs, up to the hard 255-block limit.
//! The pseudorandom key and the chaining block never leave zeroizing
//! wrappers.

use crate::error::{validate, Result};
use crate::mac::hmac::{HmacSha256, OUTPUT_SIZE};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Maximum expandable output: 255 blocks of the 32-byte hash output
pub const MAX_OUTPUT_SIZE: usize = 255 * OUTPUT_SIZE;

/// HKDF with HMAC-SHA256
pub struct HkdfSha256;

impl HkdfSha256 {
    /// HKDF-Extract: `PRK = HMAC(salt, ikm)`
    ///
    /// A missing salt is replaced by 32 zero bytes, as RFC 5869 specifies
    /// for the hash length.
    pub fn extract(salt: Option<&[u8]>, ikm: &[u8]) -> Result<Zeroizing<[u8; OUTPUT_SIZE]>> {
        let zero_salt = [0u8; OUTPUT_SIZE];
        let salt = salt.unwrap_or(&zero_salt);
        Ok(Zeroizing::new(HmacSha256::mac(salt, ikm)?))
    }

    /// HKDF-Expand: chain `T(i) = HMAC(PRK, T(i-1) || info || i)` blocks
    /// until `length` bytes are produced
    pub fn expand(
        prk: &[u8; OUTPUT_SIZE],
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::max_length("HKDF-Expand output", length, MAX_OUTPUT_SIZE)?;

        let info = info.unwrap_or(&[]);
        let blocks = length.div_ceil(OUTPUT_SIZE);

        let mut okm = Zeroizing::new(Vec::with_capacity(blocks * OUTPUT_SIZE));
        let mut block = Zeroizing::new([0u8; OUTPUT_SIZE]);

        for counter in 1..=blocks as u8 {
            let mut mac = HmacSha256::new(prk)?;
            if counter > 1 {
                mac.update(&block[..])?;
            }
            mac.update(info)?;
            mac.update(&[counter])?;
            *block = mac.finalize()?;
            okm.extend_from_slice(&block[..]);
        }

        okm.truncate(length);
        Ok(okm)
    }

    /// Full HKDF: extract, then expand
    pub fn derive(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let prk = Self::extract(salt, ikm)?;
        Self::expand(&prk, info, length)
    }
}
