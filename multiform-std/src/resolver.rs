//! Type resolution: ordered checkers folding into a discriminator.

use multiform_core::{BoxTypeCheck, Discriminator, Request, TypeCheck};
use std::sync::Arc;
use tracing::{debug, trace};

/// How the resolver combines checker results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Stop at the first checker that produces a fragment. Later checkers
    /// never run. Suits single-axis negotiation where the checker order is
    /// the precedence order (URL extension before Accept header).
    #[default]
    FirstMatch,
    /// Run every checker and append every fragment in order. Suits
    /// multi-axis negotiation (content type and version are independent
    /// dimensions).
    Accumulate,
}

/// Runs an ordered checker list against a request, producing a
/// [`Discriminator`].
///
/// Whichever policy is configured, a request on which no checker fires
/// resolves to `Discriminator::unknown()`, which is the contract the
/// dispatcher relies on to decide fallback. The checker list is fixed at construction
/// and shared read-only across requests.
pub struct TypeResolver {
    checkers: Vec<BoxTypeCheck>,
    policy: ResolvePolicy,
}

impl TypeResolver {
    /// A first-match resolver over the given checkers.
    pub fn first_match(checkers: impl IntoIterator<Item = BoxTypeCheck>) -> Self {
        Self::new(checkers, ResolvePolicy::FirstMatch)
    }

    /// An accumulating resolver over the given checkers.
    pub fn accumulate(checkers: impl IntoIterator<Item = BoxTypeCheck>) -> Self {
        Self::new(checkers, ResolvePolicy::Accumulate)
    }

    /// A resolver with an explicit policy.
    pub fn new(checkers: impl IntoIterator<Item = BoxTypeCheck>, policy: ResolvePolicy) -> Self {
        Self {
            checkers: checkers.into_iter().collect(),
            policy,
        }
    }

    /// Append a checker at the lowest precedence.
    #[must_use]
    pub fn with_checker(mut self, checker: impl TypeCheck + 'static) -> Self {
        self.checkers.push(Arc::new(checker));
        self
    }

    /// The configured combination policy.
    pub fn policy(&self) -> ResolvePolicy {
        self.policy
    }

    /// Resolve the request's discriminator.
    pub fn resolve(&self, request: &dyn Request) -> Discriminator {
        let mut discriminator = Discriminator::unknown();

        for (index, checker) in self.checkers.iter().enumerate() {
            match checker.check(request) {
                Some(fragment) => {
                    trace!(index, fragment = %fragment, "checker matched");
                    discriminator = discriminator.add(fragment);

                    if self.policy == ResolvePolicy::FirstMatch {
                        break;
                    }
                }
                None => trace!(index, "checker silent"),
            }
        }

        debug!(known = discriminator.is_known(), ?discriminator, "type resolved");

        discriminator
    }
}
