//! The dispatch engine: discriminator to handler to terminal response.

use crate::fallback::{Fallback, FallbackResolver};
use crate::resolver::TypeResolver;
use multiform_core::{MethodName, NegotiateError, Outcome, Request, Respond, Response};
use tracing::{debug, trace};

/// What to do when a known discriminator has no matching handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMethod {
    /// Fail with [`NegotiateError::MethodNotFound`].
    ///
    /// Choose this when the only configured checkers read explicit,
    /// caller-controlled signals (a literal URL extension): a miss then
    /// means the handler was simply never written.
    Strict,
    /// Silently defer to the fallback chain.
    ///
    /// Required whenever the checker list can legitimately resolve types
    /// the target does not handle (Accept-header negotiation).
    #[default]
    Permissive,
}

/// The negotiation pipeline: resolves the wanted representation and
/// dispatches to the matching handler, recovering through the fallback
/// chain when resolution or dispatch misses.
///
/// Construct one per configuration (checker list, policy, global fallback)
/// at application start and share it; it is immutable and safe to use from
/// concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// let negotiator = Negotiator::builder()
///     .resolver(TypeResolver::first_match([
///         Arc::new(UrlExtension) as _,
///         Arc::new(AcceptHeader::new(mime_map)) as _,
///     ]))
///     .global_fallback(Fallback::extension("html").unwrap())
///     .build();
///
/// let response = negotiator.respond(&request, &target).await?;
/// ```
pub struct Negotiator {
    resolver: TypeResolver,
    fallback: FallbackResolver,
    missing_method: MissingMethod,
    max_unwrap_depth: Option<usize>,
}

impl Negotiator {
    /// Start building a negotiator.
    pub fn builder() -> NegotiatorBuilder {
        NegotiatorBuilder::default()
    }

    /// Negotiate and produce the terminal response for a request.
    pub async fn respond(
        &self,
        request: &dyn Request,
        target: &dyn Respond,
    ) -> Result<Response, NegotiateError> {
        self.respond_with(request, target, None).await
    }

    /// Like [`respond`](Negotiator::respond), with a per-call fallback that
    /// outranks the process-wide one.
    pub async fn respond_with(
        &self,
        request: &dyn Request,
        target: &dyn Respond,
        local_fallback: Option<&Fallback>,
    ) -> Result<Response, NegotiateError> {
        let discriminator = self.resolver.resolve(request);

        let outcome = match MethodName::of(&discriminator) {
            None => {
                // Unknown type is not an error; recover through the chain.
                self.fallback.resolve(request, target, local_fallback).await?
            }
            Some(method) => match target.respond_to(&method, request) {
                Some(handler) => {
                    debug!(method = %method, target = target.type_name(), "dispatching");
                    handler.await.map_err(NegotiateError::Handler)?
                }
                None => match self.missing_method {
                    MissingMethod::Strict => {
                        return Err(NegotiateError::MethodNotFound {
                            target: target.type_name(),
                            method: method.into(),
                        });
                    }
                    MissingMethod::Permissive => {
                        debug!(method = %method, "no handler, deferring to fallback");
                        self.fallback.resolve(request, target, local_fallback).await?
                    }
                },
            },
        };

        self.unwrap_outcome(request, target, outcome).await
    }

    /// Run the prepare hook, unwrap nested representables until a terminal
    /// response appears, then run the final-prepare hook.
    async fn unwrap_outcome(
        &self,
        request: &dyn Request,
        target: &dyn Respond,
        outcome: Outcome,
    ) -> Result<Response, NegotiateError> {
        let mut outcome = target.prepare(outcome);
        let mut depth = 0usize;

        loop {
            match outcome {
                Outcome::Ready(response) => return Ok(target.prepare_final(response)),
                Outcome::Deferred(representable) => {
                    depth += 1;

                    if let Some(max) = self.max_unwrap_depth
                        && depth > max
                    {
                        return Err(NegotiateError::UnwrapDepth(max));
                    }

                    trace!(depth, "unwrapping deferred response");
                    outcome = representable
                        .to_response(request)
                        .await
                        .map_err(NegotiateError::Handler)?;
                }
            }
        }
    }
}

/// Builder for [`Negotiator`].
pub struct NegotiatorBuilder {
    resolver: TypeResolver,
    fallback: FallbackResolver,
    missing_method: MissingMethod,
    max_unwrap_depth: Option<usize>,
}

impl Default for NegotiatorBuilder {
    fn default() -> Self {
        Self {
            resolver: TypeResolver::first_match([]),
            fallback: FallbackResolver::new(),
            missing_method: MissingMethod::default(),
            max_unwrap_depth: None,
        }
    }
}

impl NegotiatorBuilder {
    /// Set the type resolver (checker list and combination policy).
    #[must_use]
    pub fn resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Register the process-wide fallback.
    #[must_use]
    pub fn global_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = FallbackResolver::with_global(fallback);
        self
    }

    /// Set the missing-method policy.
    #[must_use]
    pub fn missing_method(mut self, policy: MissingMethod) -> Self {
        self.missing_method = policy;
        self
    }

    /// Bound the response-unwrapping loop.
    ///
    /// Unbounded by default, matching the contract that a representable
    /// chain is followed however deep it goes; a bound turns a
    /// self-returning chain into [`NegotiateError::UnwrapDepth`] instead of
    /// a hang.
    #[must_use]
    pub fn max_unwrap_depth(mut self, depth: usize) -> Self {
        self.max_unwrap_depth = Some(depth);
        self
    }

    /// Finish building.
    pub fn build(self) -> Negotiator {
        Negotiator {
            resolver: self.resolver,
            fallback: self.fallback,
            missing_method: self.missing_method,
            max_unwrap_depth: self.max_unwrap_depth,
        }
    }
}
