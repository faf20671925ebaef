//! Host-facing request abstraction.
//!
//! The pipeline never owns an HTTP request; the host framework implements
//! [`Request`] over whatever request type it already has. Everything the
//! pipeline reads goes through this trait, which keeps checkers pure and
//! trivially testable.

/// Read-only view over an incoming request.
///
/// The host is responsible for ordering [`acceptable_content_types`] by
/// preference (quality-sorting happens before the list reaches this crate;
/// first-match-wins is applied over the order given).
///
/// [`acceptable_content_types`]: Request::acceptable_content_types
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Request`",
    label = "missing `Request` implementation",
    note = "implement `Request` over your framework's request type to drive negotiation."
)]
pub trait Request: Send + Sync {
    /// The request path, without scheme, host, or query string.
    fn path(&self) -> &str;

    /// A named route parameter, if the host's router bound one.
    fn route_param(&self, name: &str) -> Option<&str>;

    /// A request header value by name.
    fn header(&self, name: &str) -> Option<&str>;

    /// A query-string parameter by key.
    fn query(&self, key: &str) -> Option<&str>;

    /// Acceptable content types in host-determined preference order.
    fn acceptable_content_types(&self) -> &[String];
}

impl<R: Request + ?Sized> Request for &R {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn route_param(&self, name: &str) -> Option<&str> {
        (**self).route_param(name)
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn query(&self, key: &str) -> Option<&str> {
        (**self).query(key)
    }

    fn acceptable_content_types(&self) -> &[String] {
        (**self).acceptable_content_types()
    }
}
