//! Terminal response values and handler outcomes.

use crate::respond::Representable;

/// HTTP status codes the pipeline itself produces.
pub mod status {
    /// 200 OK.
    pub const OK: u16 = 200;
    /// 406 Not Acceptable, the hard-default fallback status.
    pub const NOT_ACCEPTABLE: u16 = 406;
}

/// A terminal response value.
///
/// Deliberately minimal: the host framework owns the real HTTP response
/// type; this carries just enough (status, body, content type) for the host
/// to translate the pipeline's result onto its own transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: String,
    content_type: Option<String>,
}

impl Response {
    /// A response with the given status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: None,
        }
    }

    /// A `200 OK` text response.
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(status::OK, body)
    }

    /// The hard-default fallback: `406 Not Acceptable` with an empty body.
    pub fn not_acceptable() -> Self {
        Self::new(status::NOT_ACCEPTABLE, "")
    }

    /// Set the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The response status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The content type, if one was set.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// What a handler produced: either a terminal response or a deferred
/// representable that still needs unwrapping.
///
/// The deferred arm is what lets handlers return other negotiating values
/// (nested multi-format responses, resource wrappers, ...) instead of
/// building a response inline; the dispatcher unwraps until it reaches
/// [`Outcome::Ready`].
pub enum Outcome {
    /// A terminal response; unwrapping stops here.
    Ready(Response),
    /// A value that knows how to convert itself into a further outcome.
    Deferred(Box<dyn Representable>),
}

impl Outcome {
    /// Wrap a representable value for further unwrapping.
    pub fn deferred(value: impl Representable + 'static) -> Self {
        Self::Deferred(Box::new(value))
    }
}

impl From<Response> for Outcome {
    fn from(response: Response) -> Self {
        Self::Ready(response)
    }
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(response) => f.debug_tuple("Ready").field(response).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
