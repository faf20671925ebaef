//! Registry-style handler tables.
//!
//! [`Respond::respond_to`] is a match on the constructed method name; for
//! targets with many representations, or representations registered from
//! configuration, a [`HandlerTable`] replaces the match arms with explicit
//! registration. Built once, immutable after.
//!
//! [`Respond::respond_to`]: multiform_core::Respond::respond_to

use multiform_core::{Fragment, MethodName, Request, ResponseFuture};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from handler registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The fragment failed identifier-safety validation.
    #[error("invalid handler fragment: {0:?}")]
    InvalidFragment(String),

    /// A handler is already registered under this name.
    #[error("handler already registered for `{0}`")]
    Duplicate(String),
}

type TableHandler<T> =
    Box<dyn for<'a> Fn(&'a T, &'a dyn Request) -> ResponseFuture<'a> + Send + Sync>;

/// A name-keyed table of representation handlers for targets of type `T`.
///
/// # Example
///
/// ```rust,ignore
/// let table: HandlerTable<Report> = HandlerTable::builder()
///     .on(["json"], |report, request| Box::pin(report.json(request)))?
///     .on(["json", "Version2"], |report, request| Box::pin(report.json_v2(request)))?
///     .build();
///
/// impl Respond for Report {
///     fn respond_to<'a>(
///         &'a self,
///         method: &MethodName,
///         request: &'a dyn Request,
///     ) -> Option<ResponseFuture<'a>> {
///         self.table.dispatch(self, method, request)
///     }
/// }
/// ```
pub struct HandlerTable<T> {
    entries: HashMap<String, TableHandler<T>>,
}

impl<T> HandlerTable<T> {
    /// Start building a table.
    pub fn builder() -> HandlerTableBuilder<T> {
        HandlerTableBuilder {
            entries: HashMap::new(),
        }
    }

    /// Look up the handler registered under `method` and bind it to the
    /// target, without invoking it.
    pub fn dispatch<'a>(
        &'a self,
        target: &'a T,
        method: &MethodName,
        request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>> {
        self.entries
            .get(method.as_str())
            .map(|handler| handler(target, request))
    }

    /// The number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no handlers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`HandlerTable`].
pub struct HandlerTableBuilder<T> {
    entries: HashMap<String, TableHandler<T>>,
}

impl<T> HandlerTableBuilder<T> {
    /// Register a handler under the name constructed from the given
    /// fragment sequence, matching what the resolver would produce for the
    /// same fragments.
    pub fn on<I, F>(mut self, fragments: I, handler: F) -> Result<Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        F: for<'a> Fn(&'a T, &'a dyn Request) -> ResponseFuture<'a> + Send + Sync + 'static,
    {
        let mut parsed = Vec::new();

        for fragment in fragments {
            let fragment = fragment.into();
            match Fragment::parse(fragment.clone()) {
                Some(f) => parsed.push(f),
                None => return Err(RegistryError::InvalidFragment(fragment)),
            }
        }

        let discriminator: multiform_core::Discriminator = parsed.into_iter().collect();
        let Some(method) = MethodName::of(&discriminator) else {
            return Err(RegistryError::InvalidFragment(String::new()));
        };

        let name = String::from(method);
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        self.entries.insert(name, Box::new(handler));
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> HandlerTable<T> {
        HandlerTable {
            entries: self.entries,
        }
    }
}
