//! # multiform-core
//!
//! Core traits and value types for the Multiform representation-negotiation
//! pipeline.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! response targets and host integrations that don't need the full
//! `multiform-std` implementation.
//!
//! # Pipeline Layers
//!
//! Multiform resolves *which representation a request wants* and dispatches
//! to the handler that produces it:
//!
//! ## Layer 1: Signals ([`TypeCheck`])
//!
//! A checker inspects one signal on the request (URL extension, Accept
//! header, version parameter, ...) and either contributes a [`Fragment`] or
//! stays silent.
//!
//! ## Layer 2: Discriminator ([`Discriminator`])
//!
//! Fragments accumulate, in checker order, into a single composite
//! discriminator describing the wanted representation. An empty
//! discriminator is *unknown* and routes to the fallback chain instead of a
//! handler.
//!
//! ## Layer 3: Dispatch ([`Respond`])
//!
//! The discriminator projects into a conventional [`MethodName`]
//! (`to{Type}Response`) and the response target is asked whether it exposes
//! a handler under that name.
//!
//! ## Layer 4: Unwrapping ([`Representable`])
//!
//! A handler may return a terminal [`Response`] or defer to another
//! representable value; deferred results are unwrapped until a terminal
//! response is produced.
//!
//! # Error Types
//!
//! - [`NegotiateError`] - Top-level error type
//! - [`PayloadError`] - Attribute-access errors on response data

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod check;
mod discriminator;
mod error;
mod fragment;
mod method;
mod payload;
mod request;
mod respond;
mod response;

// Re-exports
pub use check::{BoxTypeCheck, TypeCheck};
pub use discriminator::Discriminator;
pub use error::{BoxError, NegotiateError, PayloadError};
pub use fragment::Fragment;
pub use method::MethodName;
pub use payload::Payload;
pub use request::Request;
pub use respond::{FallbackHandler, Representable, Respond, ResponseFuture};
pub use response::{Outcome, Response, status};
