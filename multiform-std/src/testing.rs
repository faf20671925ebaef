//! Testing utilities for Multiform.
//!
//! This module provides utilities to make testing checkers, resolvers, and
//! targets easier.
//!
//! # Features
//!
//! - [`FakeRequest`]: a self-contained [`Request`] with builder methods
//! - [`RecordingFallback`]: a fallback handler that records invocations

use multiform_core::{Outcome, Request, Respond, Response, ResponseFuture};
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Fake Request
// ============================================================================

/// A self-contained request for driving the pipeline in tests.
///
/// # Example
///
/// ```rust,ignore
/// let request = FakeRequest::get("reports/summary.csv")
///     .accepts(&["application/json"])
///     .header("Api-Version", "2")
///     .query("v", "2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeRequest {
    path: String,
    route_params: HashMap<String, String>,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    accepts: Vec<String>,
}

impl FakeRequest {
    /// A request for the given path with no other signals.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the acceptable content types, in preference order.
    #[must_use]
    pub fn accepts(mut self, content_types: &[&str]) -> Self {
        self.accepts = content_types.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Bind a route parameter.
    #[must_use]
    pub fn route_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_params.insert(name.into(), value.into());
        self
    }

    /// Set a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

impl Request for FakeRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn route_param(&self, name: &str) -> Option<&str> {
        self.route_params.get(name).map(String::as_str)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    fn acceptable_content_types(&self) -> &[String] {
        &self.accepts
    }
}

// ============================================================================
// Recording Fallback
// ============================================================================

/// A fallback handler that records how often it ran and answers with a
/// fixed response.
///
/// # Example
///
/// ```rust,ignore
/// let fallback = RecordingFallback::new("from fallback");
/// let negotiator = Negotiator::builder()
///     .global_fallback(Fallback::handler(fallback.clone()))
///     .build();
///
/// negotiator.respond(&request, &target).await?;
/// assert_eq!(fallback.calls(), 1);
/// ```
pub struct RecordingFallback {
    body: String,
    calls: Arc<AtomicUsize>,
    targets: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingFallback {
    /// A fallback answering with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            calls: Arc::new(AtomicUsize::new(0)),
            targets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// How many times the fallback ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The type names of the targets it ran against.
    pub fn targets(&self) -> Vec<&'static str> {
        self.targets.lock().unwrap().clone()
    }
}

impl Clone for RecordingFallback {
    fn clone(&self) -> Self {
        Self {
            body: self.body.clone(),
            calls: self.calls.clone(),
            targets: self.targets.clone(),
        }
    }
}

impl multiform_core::FallbackHandler for RecordingFallback {
    fn call<'a>(
        &'a self,
        _request: &'a dyn Request,
        target: &'a dyn Respond,
    ) -> ResponseFuture<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.targets.lock().unwrap().push(target.type_name());

        let body = self.body.clone();
        Box::pin(async move { Ok(Outcome::Ready(Response::text(body))) })
    }
}
