//! Conventional handler-name construction.

use crate::discriminator::Discriminator;
use crate::fragment::Fragment;
use std::fmt;

/// A conventional handler name of the form `to{Types}Response`.
///
/// Each fragment is capitalized (first letter uppercased, remainder
/// unchanged) and fragments are joined in discriminator order with no
/// separator, so a json/version-5 discriminator projects to
/// `toJsonVersion5Response`. Construction is deterministic: the same
/// discriminator always yields the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodName(String);

impl MethodName {
    /// Build the handler name for a discriminator.
    ///
    /// Returns `None` for unknown discriminators; no name is ever
    /// constructed when type resolution produced nothing.
    pub fn of(discriminator: &Discriminator) -> Option<Self> {
        if discriminator.is_unknown() {
            return None;
        }

        let joined: String = discriminator
            .fragments()
            .iter()
            .map(Fragment::capitalized)
            .collect();

        Some(Self(format!("to{joined}Response")))
    }

    /// Build the handler name for a single fragment.
    ///
    /// Used by the fallback-extension path, which re-enters dispatch with an
    /// explicit fragment instead of a resolved discriminator.
    pub fn for_fragment(fragment: &Fragment) -> Self {
        Self(format!("to{}Response", fragment.capitalized()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MethodName> for String {
    fn from(name: MethodName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::MethodName;
    use crate::discriminator::Discriminator;
    use crate::fragment::Fragment;

    fn fragment(s: &str) -> Fragment {
        Fragment::parse(s).unwrap()
    }

    #[test]
    fn single_fragment_name() {
        let d = Discriminator::of(fragment("csv"));
        assert_eq!(MethodName::of(&d).unwrap().as_str(), "toCsvResponse");
    }

    #[test]
    fn joins_dimensions_in_order() {
        let d = Discriminator::unknown()
            .add(fragment("json"))
            .add(fragment("Version5"));
        assert_eq!(
            MethodName::of(&d).unwrap().as_str(),
            "toJsonVersion5Response"
        );
    }

    #[test]
    fn unknown_discriminator_has_no_name() {
        assert!(MethodName::of(&Discriminator::unknown()).is_none());
    }

    #[test]
    fn construction_is_deterministic() {
        let d = Discriminator::unknown()
            .add(fragment("csv"))
            .add(fragment("Version2"));
        assert_eq!(MethodName::of(&d), MethodName::of(&d));
    }

    #[test]
    fn fragment_name_matches_discriminator_name() {
        let f = fragment("html");
        assert_eq!(
            MethodName::for_fragment(&f),
            MethodName::of(&Discriminator::of(f.clone())).unwrap()
        );
    }
}
