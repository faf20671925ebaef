//! Accept-header checker.

use crate::mime::MimeMap;
use multiform_core::{Fragment, Request, TypeCheck};
use std::sync::Arc;

/// Resolves the first acceptable content type that maps to an extension.
///
/// Walks [`Request::acceptable_content_types`] in the order the host
/// provides (the host has already quality-sorted it) and returns the first
/// entry the [`MimeMap`] can resolve to a name-safe extension. Unmapped
/// entries are skipped rather than failing the check, so
/// `Accept: text/unknown, application/json` still negotiates json.
pub struct AcceptHeader {
    mime_map: Arc<MimeMap>,
}

impl AcceptHeader {
    /// A checker over the given mime mapping.
    pub fn new(mime_map: Arc<MimeMap>) -> Self {
        Self { mime_map }
    }
}

impl Default for AcceptHeader {
    fn default() -> Self {
        Self::new(Arc::new(MimeMap::new()))
    }
}

impl TypeCheck for AcceptHeader {
    fn check(&self, request: &dyn Request) -> Option<Fragment> {
        request
            .acceptable_content_types()
            .iter()
            .find_map(|content_type| {
                let extension = self.mime_map.extension(content_type)?;
                Fragment::parse(extension)
            })
    }
}
