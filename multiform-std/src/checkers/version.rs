//! Version checkers: route parameter, header, and query string.

use multiform_core::{Fragment, Request, TypeCheck};

/// Tag prepended to every version fragment, so `5` resolves to the
/// `toVersion5Response` convention rather than a bare `to5Response`.
const VERSION_TAG: &str = "Version";

/// Validate a raw version value and turn it into a `Version{value}`
/// fragment. A leading literal `v` is stripped (`v5` and `5` are
/// equivalent); values with no name-safe characters are rejected up front
/// so they read as "no signal" rather than producing a malformed name.
fn version_fragment(value: &str) -> Option<Fragment> {
    Fragment::parse(value)?;

    let value = value.strip_prefix('v').unwrap_or(value);

    Fragment::parse(format!("{VERSION_TAG}{value}"))
}

/// Reads the version from a named route parameter.
pub struct UrlVersion {
    param: String,
}

impl UrlVersion {
    /// A checker over the conventional `version` route parameter.
    pub fn new() -> Self {
        Self::param("version")
    }

    /// A checker over a custom route parameter name.
    pub fn param(name: impl Into<String>) -> Self {
        Self { param: name.into() }
    }
}

impl Default for UrlVersion {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCheck for UrlVersion {
    fn check(&self, request: &dyn Request) -> Option<Fragment> {
        version_fragment(request.route_param(&self.param)?)
    }
}

/// Reads the version from a request header.
pub struct HeaderVersion {
    header: String,
}

impl HeaderVersion {
    /// A checker over the conventional `Api-Version` header.
    pub fn new() -> Self {
        Self::header("Api-Version")
    }

    /// A checker over a custom header name.
    pub fn header(name: impl Into<String>) -> Self {
        Self {
            header: name.into(),
        }
    }
}

impl Default for HeaderVersion {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCheck for HeaderVersion {
    fn check(&self, request: &dyn Request) -> Option<Fragment> {
        version_fragment(request.header(&self.header)?)
    }
}

/// Reads the version from a query-string parameter.
pub struct QueryVersion {
    key: String,
}

impl QueryVersion {
    /// A checker over the conventional `v` query parameter.
    pub fn new() -> Self {
        Self::key("v")
    }

    /// A checker over a custom query key.
    pub fn key(name: impl Into<String>) -> Self {
        Self { key: name.into() }
    }
}

impl Default for QueryVersion {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCheck for QueryVersion {
    fn check(&self, request: &dyn Request) -> Option<Fragment> {
        version_fragment(request.query(&self.key)?)
    }
}
