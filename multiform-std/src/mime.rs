//! Content-type to extension mapping.

use std::collections::HashMap;

/// Built-in content-type table, covering the formats multi-format endpoints
/// actually serve. Hosts extend or override it through [`MimeMap`].
static BUILTIN: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "text/html" => "html",
    "application/xhtml+xml" => "html",
    "text/plain" => "txt",
    "text/markdown" => "md",
    "text/csv" => "csv",
    "text/css" => "css",
    "text/calendar" => "ics",
    "application/json" => "json",
    "application/problem+json" => "json",
    "text/xml" => "xml",
    "application/xml" => "xml",
    "application/atom+xml" => "atom",
    "application/rss+xml" => "rss",
    "application/yaml" => "yaml",
    "application/pdf" => "pdf",
    "application/zip" => "zip",
    "application/msword" => "doc",
    "application/vnd.ms-excel" => "xls",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "xlsx",
    "image/png" => "png",
    "image/jpeg" => "jpg",
    "image/svg+xml" => "svg",
};

/// Maps a content-type string to an extension, consulting a host-supplied
/// override table before the built-in one.
///
/// Constructed once at configuration time and read-only afterwards, so it
/// can be shared across concurrent requests without locking. Overrides are
/// total for their key: an entry for `text/csv` mapping to `json` makes an
/// `Accept: text/csv` request dispatch to the json handler.
#[derive(Debug, Clone, Default)]
pub struct MimeMap {
    overrides: HashMap<String, String>,
}

impl MimeMap {
    /// A map with no overrides; lookups hit the built-in table only.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with the given override entries (content type -> extension).
    pub fn with_overrides<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve a content type to an extension.
    pub fn extension(&self, content_type: &str) -> Option<&str> {
        if let Some(ext) = self.overrides.get(content_type) {
            return Some(ext.as_str());
        }

        BUILTIN.get(content_type).copied()
    }
}
