//! # multiform - Representation Negotiation and Handler Dispatch
//!
//! `multiform` resolves which representation an incoming request wants
//! (html, json, csv, a version tag, ...) and dispatches to the handler
//! responsible for producing it, falling back gracefully when no explicit
//! handler exists.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use multiform::{
//!     AcceptHeader, Fallback, MimeMap, Negotiator, TypeResolver, UrlExtension,
//! };
//!
//! // Wire once at application start.
//! let negotiator = Negotiator::builder()
//!     .resolver(TypeResolver::first_match([
//!         Arc::new(UrlExtension) as _,
//!         Arc::new(AcceptHeader::new(mime_map)) as _,
//!     ]))
//!     .global_fallback(Fallback::extension("html").unwrap())
//!     .build();
//!
//! // Per request: the target exposes `to{Type}Response` handlers.
//! let response = negotiator.respond(&request, &report).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use multiform_core::{
    // Errors
    BoxError,
    // Checker seam
    BoxTypeCheck,
    // Discriminator
    Discriminator,
    // Fallback seam
    FallbackHandler,
    Fragment,
    // Naming
    MethodName,
    NegotiateError,
    // Handler outcomes
    Outcome,
    // Data holder
    Payload,
    PayloadError,
    // Host collaborators
    Request,
    // Unwrapping
    Representable,
    // Targets
    Respond,
    Response,
    ResponseFuture,
    TypeCheck,
    status,
};

pub use multiform_std::{
    checkers::{AcceptHeader, FirstOf, HeaderVersion, QueryVersion, UrlExtension, UrlVersion},
    fallback::{Fallback, FallbackResolver},
    mime::MimeMap,
    negotiator::{MissingMethod, Negotiator, NegotiatorBuilder},
    registry::{HandlerTable, HandlerTableBuilder, RegistryError},
    resolver::{ResolvePolicy, TypeResolver},
};

/// Standard checker implementations.
pub mod checkers {
    pub use multiform_std::checkers::{
        AcceptHeader, FirstOf, HeaderVersion, QueryVersion, UrlExtension, UrlVersion,
    };
}

/// Testing utilities.
pub mod testing {
    pub use multiform_std::testing::{FakeRequest, RecordingFallback};
}

/// Prelude module - common imports for Multiform.
///
/// # Usage
///
/// ```rust,ignore
/// use multiform::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Discriminator, Fallback, FallbackHandler, Fragment, MethodName, MimeMap,
        NegotiateError, Negotiator, Outcome, Payload, Representable, Request, Respond, Response,
        ResponseFuture, TypeCheck, TypeResolver,
    };
}
