//! Response-target and deferred-result traits.
//!
//! [`Respond`] is the seam between the pipeline and user code: the pipeline
//! constructs a conventional [`MethodName`] and asks the target whether it
//! exposes a handler under that name. Handler lookup never invokes anything;
//! the returned future is the *bound invocable* and runs only when the
//! dispatcher awaits it.

use crate::error::BoxError;
use crate::method::MethodName;
use crate::request::Request;
use crate::response::Outcome;
use std::{future::Future, pin::Pin};

/// A bound, not-yet-invoked handler: the future produced by looking a
/// handler up on its target.
pub type ResponseFuture<'a> = Pin<Box<dyn Future<Output = Result<Outcome, BoxError>> + Send + 'a>>;

/// A response target that exposes representation handlers by name.
///
/// Implementations match on the constructed name and return the bound
/// handler future, or `None` when no handler exists for that
/// representation:
///
/// ```rust,ignore
/// impl Respond for Report {
///     fn respond_to<'a>(
///         &'a self,
///         method: &MethodName,
///         request: &'a dyn Request,
///     ) -> Option<ResponseFuture<'a>> {
///         match method.as_str() {
///             "toJsonResponse" => Some(Box::pin(self.json(request))),
///             "toCsvResponse" => Some(Box::pin(self.csv(request))),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// Targets that prefer registration over match arms can delegate to a
/// handler table (see `multiform-std`).
///
/// The provided methods are optional capabilities; the dispatcher checks
/// for them through ordinary trait dispatch rather than runtime probing.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Respond`",
    label = "missing `Respond` implementation",
    note = "Respond targets must implement `respond_to` to expose representation handlers."
)]
pub trait Respond: Send + Sync {
    /// Look up the handler for a constructed method name.
    ///
    /// Returns `None` when the target has no handler under that name; the
    /// dispatcher then either fails hard or defers to the fallback chain,
    /// depending on its configured missing-method policy.
    fn respond_to<'a>(
        &'a self,
        method: &MethodName,
        request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>>;

    /// Recovery handler used when negotiation failed and no explicit
    /// fallback was registered.
    ///
    /// Targets that can produce a sensible "unsupported representation"
    /// response override this; the default opts out, letting the resolver
    /// fall through to the hard default.
    fn unsupported<'a>(&'a self, request: &'a dyn Request) -> Option<ResponseFuture<'a>> {
        let _ = request;
        None
    }

    /// Called once on the handler's raw outcome, before unwrapping.
    ///
    /// Lets targets return plain data from their representation handlers
    /// and wrap it centrally.
    fn prepare(&self, outcome: Outcome) -> Outcome {
        outcome
    }

    /// Called once on the fully-unwrapped terminal response.
    fn prepare_final(&self, response: crate::response::Response) -> crate::response::Response {
        response
    }

    /// The target's type name, used in dispatch diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A deferred result that knows how to convert itself toward a terminal
/// response.
///
/// The dispatcher repeatedly converts deferred outcomes until one is
/// terminal, passing the same request at every step. The loop is unbounded
/// unless the dispatcher was configured with a depth limit, so a value
/// whose conversion yields itself will not terminate on its own.
pub trait Representable: Send + Sync {
    /// Convert this value one step toward a terminal response.
    fn to_response<'a>(&'a self, request: &'a dyn Request) -> ResponseFuture<'a>;
}

/// A registered fallback invocable, called with the request and the target
/// that failed to negotiate.
pub trait FallbackHandler: Send + Sync {
    /// Produce a recovery outcome for the request.
    fn call<'a>(&'a self, request: &'a dyn Request, target: &'a dyn Respond)
    -> ResponseFuture<'a>;
}

// Blanket implementation: closures over (request, target) are fallback
// handlers.
impl<F> FallbackHandler for F
where
    F: for<'a> Fn(&'a dyn Request, &'a dyn Respond) -> ResponseFuture<'a> + Send + Sync,
{
    fn call<'a>(
        &'a self,
        request: &'a dyn Request,
        target: &'a dyn Respond,
    ) -> ResponseFuture<'a> {
        (self)(request, target)
    }
}
