//! Error types for Multiform.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`NegotiateError`] - Top-level error type for dispatch operations
//! - [`PayloadError`] - Attribute-access errors on response data
//!
//! Negotiation *misses* are not errors: an unknown discriminator and a
//! permissive method miss both recover through the fallback chain. Only a
//! strict-mode miss, a failing handler, or an exhausted unwrap budget
//! surface to the caller.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for negotiation and dispatch.
#[derive(Error, Debug)]
pub enum NegotiateError {
    /// Strict dispatch found no handler under the constructed name.
    ///
    /// Strict mode is chosen when the discriminator comes from an explicit,
    /// caller-controlled signal, so a miss indicates a programming error.
    #[error("method `{method}` does not exist on `{target}`")]
    MethodNotFound {
        /// The response target's type name.
        target: &'static str,
        /// The handler name that was constructed and not found.
        method: String,
    },

    /// A representation handler failed.
    #[error("handler error: {0}")]
    Handler(#[source] BoxError),

    /// A fallback handler failed.
    #[error("fallback error: {0}")]
    Fallback(#[source] BoxError),

    /// Response unwrapping exceeded the configured depth limit.
    #[error("response unwrapping exceeded {0} nested levels")]
    UnwrapDepth(usize),
}

/// Errors raised by [`Payload`](crate::Payload) field access.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The requested field was never supplied to the response target.
    #[error("accessing undefined attribute `{target}::{field}`")]
    UnknownAttribute {
        /// The owning target's type name.
        target: &'static str,
        /// The field that was requested.
        field: String,
    },

    /// The field exists but could not be decoded into the requested type.
    #[error("decoding attribute `{field}`: {source}")]
    Decode {
        /// The field that was requested.
        field: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
