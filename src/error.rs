//! Error types for conversion dispatch.
//!
//! This module provides the [`ConvertError`] type for all conversion
//! operations and the [`Result`] convenience type.

use thiserror::Error;

use crate::format::FormatTag;

/// Error type for all conversion dispatch operations.
///
/// Represents the ways a conversion request can fail: an empty registry,
/// an unreachable format pair, a converter failing mid-chain, a search
/// hitting its depth bound, or a chain executed against the wrong registry.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No converter has been registered at all.
    #[error("no converter has been registered")]
    NoConvertersRegistered,

    /// The requested format pair is unreachable: no converter consumes the
    /// source format, none produces the target format, or no chain connects
    /// them.
    #[error("converting {from} to {to} is not supported")]
    UnsupportedConversion {
        /// Requested source format.
        from: FormatTag,
        /// Requested target format.
        to: FormatTag,
    },

    /// A converter failed while transforming a value. Produced by converter
    /// implementations; the dispatcher propagates it unchanged and aborts the
    /// chain immediately.
    #[error("converter failed: {0}")]
    ConverterFailed(String),

    /// Chain discovery was cut off by the configured depth bound before any
    /// route was found. The format graph is cyclic or deeper than the bound.
    #[error("chain search exceeded the depth limit of {limit}")]
    DepthLimitExceeded {
        /// The depth bound that was in effect.
        limit: usize,
    },

    /// A chain was executed against a registry it was not created from: the
    /// converter at the given step no longer carries the step's recorded
    /// formats.
    #[error("chain step {step} does not match any registered converter")]
    ChainMismatch {
        /// Zero-based position of the offending step.
        step: usize,
    },
}

/// Convenience type alias for [`std::result::Result`] with [`ConvertError`].
pub type Result<T> = std::result::Result<T, ConvertError>;
