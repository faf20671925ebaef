#![allow(dead_code)]

use multiform::checkers::{AcceptHeader, UrlExtension};
use multiform::{
    MethodName, Negotiator, Outcome, Request, Respond, Response, ResponseFuture, TypeResolver,
};
use std::sync::Arc;

// ============================================================================
// Test Targets
// ============================================================================

/// A target exposing the handler set the behavioral suite negotiates
/// against. Bodies identify which handler ran.
pub struct TestReport;

impl TestReport {
    fn body_for(method: &MethodName) -> Option<&'static str> {
        match method.as_str() {
            "toHtmlResponse" => Some("expected html response"),
            "toJsonResponse" => Some("expected json response"),
            "toCsvResponse" => Some("expected csv response"),
            "toXlsxResponse" => Some("expected xlsx response"),
            "toFallbackResponse" => Some("expected fallback response"),
            "toJsonVersion5Response" => Some("expected json v5 response"),
            _ => None,
        }
    }
}

impl Respond for TestReport {
    fn respond_to<'a>(
        &'a self,
        method: &MethodName,
        _request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>> {
        let body = Self::body_for(method)?;
        Some(Box::pin(async move {
            Ok(Outcome::Ready(Response::text(body)))
        }))
    }
}

/// A target with no handlers at all, but an `unsupported` recovery handler.
pub struct UnsupportedOnly;

impl Respond for UnsupportedOnly {
    fn respond_to<'a>(
        &'a self,
        _method: &MethodName,
        _request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>> {
        None
    }

    fn unsupported<'a>(&'a self, _request: &'a dyn Request) -> Option<ResponseFuture<'a>> {
        Some(Box::pin(async {
            Ok(Outcome::Ready(Response::text("expected unsupported response")))
        }))
    }
}

/// A target with no handlers and no recovery capability.
pub struct Bare;

impl Respond for Bare {
    fn respond_to<'a>(
        &'a self,
        _method: &MethodName,
        _request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>> {
        None
    }
}

// ============================================================================
// Negotiator Wiring
// ============================================================================

/// The conventional wiring: URL extension outranks the Accept header,
/// permissive dispatch, no fallback registered.
pub fn negotiator() -> Negotiator {
    Negotiator::builder().resolver(default_resolver()).build()
}

pub fn default_resolver() -> TypeResolver {
    TypeResolver::first_match([
        Arc::new(UrlExtension) as _,
        Arc::new(AcceptHeader::default()) as _,
    ])
}
