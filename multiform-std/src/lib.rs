//! # multiform-std
//!
//! Standard implementations for the Multiform negotiation pipeline.
//!
//! This crate provides:
//! - **Checkers**: [`UrlExtension`], [`AcceptHeader`], the version checkers,
//!   and the [`FirstOf`] combinator
//! - **Mime mapping**: [`MimeMap`] with a built-in content-type table
//! - **Type resolution**: [`TypeResolver`] with configurable policy
//! - **Dispatch**: [`Negotiator`] and the [`FallbackResolver`] chain
//! - **Registration**: [`HandlerTable`] for registry-style targets
//! - **Testing utilities**: [`testing::FakeRequest`] and friends
//!
//! [`UrlExtension`]: checkers::UrlExtension
//! [`AcceptHeader`]: checkers::AcceptHeader
//! [`FirstOf`]: checkers::FirstOf
//! [`MimeMap`]: mime::MimeMap
//! [`TypeResolver`]: resolver::TypeResolver
//! [`Negotiator`]: negotiator::Negotiator
//! [`FallbackResolver`]: fallback::FallbackResolver
//! [`HandlerTable`]: registry::HandlerTable

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use multiform_core;

// Modules
pub mod checkers;
pub mod fallback;
pub mod mime;
pub mod negotiator;
pub mod registry;
pub mod resolver;
pub mod testing;
