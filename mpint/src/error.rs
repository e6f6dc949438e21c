//! Error types.

use core::fmt;

/// Error kinds surfaced by the arithmetic layers.
///
/// Errors always propagate to the caller; no layer retries or suppresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Heap storage could not be obtained.
    OutOfMemory,
    /// A value was requested at a precision larger than the compiled-in
    /// maximum.
    PrecisionExceeded,
    /// A domain error in the inputs: division by zero, inversion of zero,
    /// or a malformed encoding.
    InvalidInput,
    /// The invoked variant is not supported in this configuration (e.g. a
    /// ladder multiplication on a supersingular curve).
    NoValidConfig,
    /// Unreachable internal state.
    Internal,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => f.write_str("out of memory"),
            Error::PrecisionExceeded => f.write_str("precision exceeded"),
            Error::InvalidInput => f.write_str("invalid input"),
            Error::NoValidConfig => f.write_str("no valid configuration"),
            Error::Internal => f.write_str("internal error"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
