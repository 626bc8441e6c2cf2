//! Private-key scalars
//!
//! A [`Scalar`] is a 256-bit integer in [1, n−1], held in a zeroizing
//! buffer. Out-of-range input is rejected, never reduced: the key generator
//! resamples on rejection, and silently folding values into range would
//! bias the distribution it is required to produce.

use crate::ec::curve::CurveParams;
use crate::error::{validate, Error, Result};
use curvedh_common::security::SecretBuffer;
use curvedh_common::Uint256;
use curvedh_params::weierstrass::SCALAR_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Scalar multiplier in [1, n−1], used as a private key
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(SecretBuffer<SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from big-endian bytes, rejecting out-of-range values
    ///
    /// The value must be nonzero and strictly below the curve order. The
    /// local copy of rejected input is erased before returning.
    pub fn new(curve: &CurveParams, bytes: [u8; SCALAR_SIZE]) -> Result<Self> {
        let mut bytes = bytes;
        let mut value = Uint256::from_be_bytes(bytes);
        let in_range = !value.is_zero() & value.ct_lt(&curve.n);
        value.zeroize();
        if bool::from(in_range) {
            Ok(Scalar(SecretBuffer::new(bytes)))
        } else {
            bytes.zeroize();
            Err(Error::param("scalar", "value outside [1, n-1]"))
        }
    }

    /// Create a scalar from an existing secret buffer
    ///
    /// Same validation as [`Scalar::new`]; the buffer is consumed either way.
    pub fn from_secret_buffer(
        curve: &CurveParams,
        buffer: SecretBuffer<SCALAR_SIZE>,
    ) -> Result<Self> {
        let mut bytes = [0u8; SCALAR_SIZE];
        bytes.copy_from_slice(buffer.as_ref());
        Self::new(curve, bytes)
    }

    /// Create a scalar from a big-endian byte slice with length validation
    pub fn deserialize(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        validate::length("scalar", bytes.len(), SCALAR_SIZE)?;
        let mut scalar_bytes = [0u8; SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);
        Self::new(curve, scalar_bytes)
    }

    /// Access the underlying secret buffer
    pub fn as_secret_buffer(&self) -> &SecretBuffer<SCALAR_SIZE> {
        &self.0
    }

    /// Serialize to big-endian bytes
    ///
    /// The returned array is key material; the caller takes over the
    /// erasure obligation.
    pub fn serialize(&self) -> [u8; SCALAR_SIZE] {
        let mut out = [0u8; SCALAR_SIZE];
        out.copy_from_slice(self.0.as_ref());
        out
    }

    /// The scalar as an integer; callers must erase the copy after use
    pub(crate) fn to_uint(&self) -> Uint256 {
        let mut bytes = [0u8; SCALAR_SIZE];
        bytes.copy_from_slice(self.0.as_ref());
        let value = Uint256::from_be_bytes(bytes);
        bytes.zeroize();
        value
    }
}
