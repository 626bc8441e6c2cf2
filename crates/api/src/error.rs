//! Error taxonomy for curvedh operations
//!
//! Every condition here is recoverable by the caller: a failed peer-key
//! validation is a deterministic fact (never retried internally), a failed
//! randomness read is terminal for the operation but not for the process.
//! Error values never carry secret material.

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The secure random source failed non-retryably.
    ///
    /// Propagated as-is; no deterministic fallback is ever substituted.
    RandomSourceUnavailable {
        /// Operation that needed randomness
        context: &'static str,
    },

    /// Private-key generation or the subsequent public-key validation failed
    KeypairGenerationFailed {
        /// Operation that failed
        context: &'static str,
    },

    /// A peer-supplied public key was rejected
    ///
    /// Raised when the point is off-curve, is the identity, or forces an
    /// identity-valued shared point (small-subgroup defence).
    InvalidPeerKey {
        /// Validation step that rejected the key
        context: &'static str,
    },

    /// Requested derived-key length exceeds what HKDF-SHA256 can expand
    OutputTooLong {
        /// Operation that requested the output
        context: &'static str,
        /// Requested length in bytes
        requested: usize,
        /// Hard limit in bytes (255 × hash length)
        limit: usize,
    },

    /// An "impossible" arithmetic result was observed
    ///
    /// Distinct from the validation errors above: this indicates a logic
    /// error inside the library, not bad input.
    InternalInvariantViolation {
        /// Invariant that was violated
        context: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Where the mismatch was detected
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Where the parameter was rejected
        context: &'static str,
        #[cfg(feature = "std")]
        /// Human-readable rejection reason
        message: String,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its classification
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::RandomSourceUnavailable { .. } => Self::RandomSourceUnavailable { context },
            Self::KeypairGenerationFailed { .. } => Self::KeypairGenerationFailed { context },
            Self::InvalidPeerKey { .. } => Self::InvalidPeerKey { context },
            Self::OutputTooLong {
                requested, limit, ..
            } => Self::OutputTooLong {
                context,
                requested,
                limit,
            },
            Self::InternalInvariantViolation { .. } => {
                Self::InternalInvariantViolation { context }
            }
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RandomSourceUnavailable { context } => {
                write!(f, "Random source unavailable in {}", context)
            }
            Error::KeypairGenerationFailed { context } => {
                write!(f, "Keypair generation failed in {}", context)
            }
            Error::InvalidPeerKey { context } => {
                write!(f, "Invalid peer public key: {}", context)
            }
            Error::OutputTooLong {
                context,
                requested,
                limit,
            } => {
                write!(
                    f,
                    "Requested output for {} is too long: {} bytes (limit {})",
                    context, requested, limit
                )
            }
            Error::InternalInvariantViolation { context } => {
                write!(f, "Internal invariant violation: {}", context)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter in {}", context)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}
