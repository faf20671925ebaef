//! Fallback resolution: what to do when negotiation produced nothing.

use multiform_core::{
    FallbackHandler, Fragment, MethodName, NegotiateError, Outcome, Request, Respond, Response,
};
use std::sync::Arc;
use tracing::debug;

/// A registered recovery strategy.
///
/// A fallback is either an explicit fragment, which re-enters strict
/// dispatch against the target (so `Fallback::extension("html")` routes to
/// `toHtmlResponse`, and a missing handler there is a hard
/// [`MethodNotFound`]), or an arbitrary invocable over the request and
/// target, whose outcome is used directly. The second shape lets a fallback
/// short-circuit with a ready-made response instead of redirecting to
/// another handler convention.
///
/// [`MethodNotFound`]: NegotiateError::MethodNotFound
#[derive(Clone)]
pub enum Fallback {
    /// Redirect to the handler convention for this fragment.
    Extension(Fragment),
    /// Invoke an arbitrary recovery handler.
    Handler(Arc<dyn FallbackHandler>),
}

impl Fallback {
    /// A fallback redirecting to the handler for `extension`.
    ///
    /// Returns `None` when the extension fails fragment validation.
    pub fn extension(extension: impl Into<String>) -> Option<Self> {
        Fragment::parse(extension).map(Self::Extension)
    }

    /// A fallback invoking the given handler.
    pub fn handler(handler: impl FallbackHandler + 'static) -> Self {
        Self::Handler(Arc::new(handler))
    }

    async fn apply(
        &self,
        request: &dyn Request,
        target: &dyn Respond,
    ) -> Result<Outcome, NegotiateError> {
        match self {
            Self::Extension(fragment) => {
                let method = MethodName::for_fragment(fragment);
                debug!(method = %method, "fallback re-enters dispatch");

                match target.respond_to(&method, request) {
                    Some(handler) => handler.await.map_err(NegotiateError::Fallback),
                    None => Err(NegotiateError::MethodNotFound {
                        target: target.type_name(),
                        method: method.into(),
                    }),
                }
            }
            Self::Handler(handler) => handler
                .call(request, target)
                .await
                .map_err(NegotiateError::Fallback),
        }
    }
}

impl std::fmt::Debug for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extension(fragment) => f.debug_tuple("Extension").field(fragment).finish(),
            Self::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// Resolves the fallback chain when type resolution failed or a permissive
/// dispatch missed.
///
/// Precedence, highest first:
/// 1. the per-call override handed to the dispatcher,
/// 2. the process-wide fallback registered here at construction,
/// 3. the target's own [`Respond::unsupported`] recovery handler,
/// 4. the hard default: `406 Not Acceptable`, empty body.
///
/// The hard default always resolves, so the chain itself cannot fail; only
/// a fallback *handler* failing (or an extension fallback hitting a missing
/// method) surfaces an error.
#[derive(Debug, Clone, Default)]
pub struct FallbackResolver {
    global: Option<Fallback>,
}

impl FallbackResolver {
    /// A resolver with no process-wide fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver with a process-wide fallback.
    pub fn with_global(fallback: Fallback) -> Self {
        Self {
            global: Some(fallback),
        }
    }

    /// Resolve a recovery outcome for the request.
    pub async fn resolve(
        &self,
        request: &dyn Request,
        target: &dyn Respond,
        local: Option<&Fallback>,
    ) -> Result<Outcome, NegotiateError> {
        if let Some(fallback) = local.or(self.global.as_ref()) {
            return fallback.apply(request, target).await;
        }

        if let Some(handler) = target.unsupported(request) {
            debug!(target = target.type_name(), "using target's unsupported handler");
            return handler.await.map_err(NegotiateError::Fallback);
        }

        debug!("no fallback configured, responding not acceptable");
        Ok(Outcome::Ready(Response::not_acceptable()))
    }
}
