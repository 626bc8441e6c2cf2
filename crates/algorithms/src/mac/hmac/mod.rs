//! HMAC-SHA256 (RFC 2104 / FIPS 198-1)
//!
//! The nested-hash construction over the external SHA-256 primitive. Key
//! preparation hashes the key unconditionally and selects between the raw
//! and hashed form with a byte mask, so timing depends only on the key's
//! public length; the pads live in zeroizing buffers for the life of the
//! instance.

use crate::error::{Error, Result};
use curvedh_common::security::SecretBuffer;
use sha2::{Digest, Sha256};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SHA-256 block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// HMAC-SHA256 output size in bytes
pub const OUTPUT_SIZE: usize = 32;

/// Streaming HMAC-SHA256 instance
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HmacSha256 {
    #[zeroize(skip)] // running hash state; the keyed pads are held below
    inner: Sha256,
    opad: SecretBuffer<BLOCK_SIZE>,
    is_finalized: bool,
}

impl HmacSha256 {
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create a new HMAC instance from `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        // Hash the key unconditionally so the running time depends only on
        // the public key length, then mask-select the form actually used.
        let mut hashed: [u8; OUTPUT_SIZE] = Sha256::digest(key).into();
        let long = Choice::from((key.len() > BLOCK_SIZE) as u8);

        let mut k_prime = [0u8; BLOCK_SIZE];
        for (i, slot) in k_prime.iter_mut().enumerate() {
            let direct = key.get(i).copied().unwrap_or(0);
            let prehashed = hashed.get(i).copied().unwrap_or(0);
            *slot = u8::conditional_select(&direct, &prehashed, long);
        }
        hashed.zeroize();

        let mut ipad = [0u8; BLOCK_SIZE];
        let mut opad = [0u8; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            ipad[i] = k_prime[i] ^ Self::IPAD_BYTE;
            opad[i] = k_prime[i] ^ Self::OPAD_BYTE;
        }
        k_prime.zeroize();

        let mut inner = Sha256::new();
        Digest::update(&mut inner, &ipad);
        ipad.zeroize();

        Ok(Self {
            inner,
            opad: SecretBuffer::new(opad),
            is_finalized: false,
        })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.is_finalized {
            return Err(Error::MacError {
                algorithm: "HMAC-SHA256",
                details: "update after finalization",
            });
        }
        Digest::update(&mut self.inner, data);
        Ok(())
    }

    /// Finalize and return the tag
    pub fn finalize(&mut self) -> Result<[u8; OUTPUT_SIZE]> {
        if self.is_finalized {
            return Err(Error::MacError {
                algorithm: "HMAC-SHA256",
                details: "already finalized",
            });
        }
        self.is_finalized = true;

        let mut inner_hash: [u8; OUTPUT_SIZE] = self.inner.finalize_reset().into();

        let mut outer = Sha256::new();
        Digest::update(&mut outer, self.opad.as_slice());
        Digest::update(&mut outer, &inner_hash);
        inner_hash.zeroize();

        Ok(outer.finalize().into())
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8], data: &[u8]) -> Result<[u8; OUTPUT_SIZE]> {
        let mut mac = Self::new(key)?;
        mac.update(data)?;
        mac.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `data`
    ///
    /// Always folds over the full, public digest length, so a short caller
    /// tag does not change the running time.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        let expected = Self::mac(key, data)?;

        let mut diff = 0u8;
        for i in 0..OUTPUT_SIZE {
            let a = expected[i];
            let b = tag.get(i).copied().unwrap_or(0);
            diff |= a ^ b;
        }
        // fold any length mismatch into the same accumulator
        diff |= (tag.len() ^ OUTPUT_SIZE) as u8;

        Ok(diff.ct_eq(&0u8).into())
    }
}
