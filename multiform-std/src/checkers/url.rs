//! URL-extension checker.

use multiform_core::{Fragment, Request, TypeCheck};

/// Reads the extension off the last path segment.
///
/// `websites/example.com.json` resolves to `json`: the segment is split
/// on `.` and the *last* piece wins, so dotted filenames don't confuse the
/// check. Segments without a dot produce no fragment.
pub struct UrlExtension;

impl TypeCheck for UrlExtension {
    fn check(&self, request: &dyn Request) -> Option<Fragment> {
        let filename = request.path().rsplit('/').next()?;

        if !filename.contains('.') {
            return None;
        }

        let extension = filename.rsplit('.').next()?;

        Fragment::parse(extension)
    }
}
