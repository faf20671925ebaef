//! Standard checker implementations.
//!
//! Each checker reads one signal off the request. Wire them into a
//! [`TypeResolver`](crate::resolver::TypeResolver) in the precedence order
//! the host wants; the URL extension conventionally outranks the Accept
//! header, so a typical content-type dimension is
//! `FirstOf::new([UrlExtension, AcceptHeader])`.

mod accept;
mod url;
mod version;

pub use accept::AcceptHeader;
pub use url::UrlExtension;
pub use version::{HeaderVersion, QueryVersion, UrlVersion};

use multiform_core::{BoxTypeCheck, Fragment, Request, TypeCheck};
use std::sync::Arc;

/// Combinator over an ordered checker list: the first checker to produce a
/// fragment wins, later checkers never run.
///
/// Useful inside an accumulating resolver to keep one dimension
/// first-match-wins while other dimensions (a version axis, say) still
/// contribute independently.
pub struct FirstOf {
    checkers: Vec<BoxTypeCheck>,
}

impl FirstOf {
    /// A combinator over the given checkers, in precedence order.
    pub fn new(checkers: impl IntoIterator<Item = BoxTypeCheck>) -> Self {
        Self {
            checkers: checkers.into_iter().collect(),
        }
    }

    /// Append a checker at the lowest precedence.
    #[must_use]
    pub fn or(mut self, checker: impl TypeCheck + 'static) -> Self {
        self.checkers.push(Arc::new(checker));
        self
    }
}

impl TypeCheck for FirstOf {
    fn check(&self, request: &dyn Request) -> Option<Fragment> {
        self.checkers
            .iter()
            .find_map(|checker| checker.check(request))
    }
}

#[cfg(test)]
mod tests {
    use super::{FirstOf, UrlExtension};
    use crate::testing::FakeRequest;
    use multiform_core::{Fragment, Request, TypeCheck};
    use std::sync::Arc;

    #[test]
    fn first_match_wins_and_later_checkers_are_skipped() {
        let checker = FirstOf::new([Arc::new(UrlExtension) as _])
            .or(|_: &dyn Request| Fragment::parse("never"));

        let request = FakeRequest::get("reports/summary.csv");
        assert_eq!(checker.check(&request).unwrap().as_str(), "csv");
    }

    #[test]
    fn falls_through_when_earlier_checkers_are_silent() {
        let checker = FirstOf::new([Arc::new(UrlExtension) as _])
            .or(|_: &dyn Request| Fragment::parse("fallthrough"));

        let request = FakeRequest::get("reports/summary");
        assert_eq!(checker.check(&request).unwrap().as_str(), "fallthrough");
    }
}
