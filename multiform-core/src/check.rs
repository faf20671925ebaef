//! The checker trait: one signal source per implementation.

use crate::fragment::Fragment;
use crate::request::Request;

/// A boxed, shareable checker.
pub type BoxTypeCheck = std::sync::Arc<dyn TypeCheck>;

/// Inspects the request for one signal of the desired representation.
///
/// Checkers are stateless and read-only over the request: they either
/// contribute a [`Fragment`] or return `None`. Candidate values that fail
/// fragment validation are reported as `None`, never as errors.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `TypeCheck`",
    label = "missing `TypeCheck` implementation",
    note = "checkers must implement `check`, returning `Option<Fragment>`."
)]
pub trait TypeCheck: Send + Sync {
    /// Check the request for this checker's signal.
    fn check(&self, request: &dyn Request) -> Option<Fragment>;
}

// Blanket implementation: plain closures are checkers.
impl<F> TypeCheck for F
where
    F: Fn(&dyn Request) -> Option<Fragment> + Send + Sync,
{
    fn check(&self, request: &dyn Request) -> Option<Fragment> {
        (self)(request)
    }
}
