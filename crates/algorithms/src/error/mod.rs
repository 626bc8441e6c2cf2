//! Error handling for the arithmetic and KDF primitives
//!
//! Errors at this level describe *what* went wrong mechanically (a length
//! mismatch, an out-of-range parameter, a failed randomness read); the
//! protocol crate classifies them into the public taxonomy at its boundary.

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

use curvedh_api::Error as ApiError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected (or limiting) length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// MAC state error
    MacError {
        /// MAC algorithm that encountered the error
        algorithm: &'static str,
        /// Additional details about the MAC error
        details: &'static str,
    },

    /// Processing error during a cryptographic operation
    ///
    /// Raised only for results that correct arithmetic cannot produce;
    /// treated as a logic error, never retried.
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// The secure random source failed non-retryably
    Random {
        /// Operation that needed randomness
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
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
            Error::MacError { algorithm, details } => {
                write!(f, "MAC error in {}: {}", algorithm, details)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Random { context } => {
                write!(f, "Random source failure in {}", context)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Default classification into the public taxonomy. The protocol layer
// overrides this where it knows better (e.g. a rejected peer point).
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::MacError { algorithm, details } => ApiError::InvalidParameter {
                context: algorithm,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::Processing { operation, .. } => ApiError::InternalInvariantViolation {
                context: operation,
            },
            Error::Random { context } => ApiError::RandomSourceUnavailable { context },
        }
    }
}

// Include the validation submodule
pub mod validate;
