//! The resolved representation discriminator.

use crate::fragment::Fragment;

/// The ordered set of fragments describing which representation a request
/// wants.
///
/// Each checker that matched contributes one [`Fragment`]; independent axes
/// (content type, version, ...) stay independent entries, in checker
/// invocation order. An empty discriminator is *unknown*, which is the
/// signal the dispatcher uses to defer to the fallback chain, never an
/// error.
///
/// Discriminators are immutable values: [`add`] returns a new discriminator
/// rather than mutating in place.
///
/// [`add`]: Discriminator::add
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discriminator {
    fragments: Vec<Fragment>,
}

impl Discriminator {
    /// The unknown (empty) discriminator.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// A discriminator with a single fragment.
    pub fn of(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    /// Whether any checker produced a fragment.
    pub fn is_known(&self) -> bool {
        !self.fragments.is_empty()
    }

    /// Inverse of [`is_known`](Discriminator::is_known).
    pub fn is_unknown(&self) -> bool {
        !self.is_known()
    }

    /// Append a fragment, preserving insertion order.
    #[must_use]
    pub fn add(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// The fragments in checker-invocation order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

impl FromIterator<Fragment> for Discriminator {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Discriminator;
    use crate::fragment::Fragment;

    #[test]
    fn empty_is_unknown() {
        let d = Discriminator::unknown();
        assert!(d.is_unknown());
        assert!(!d.is_known());
    }

    #[test]
    fn add_preserves_order() {
        let d = Discriminator::unknown()
            .add(Fragment::parse("json").unwrap())
            .add(Fragment::parse("Version5").unwrap());

        assert!(d.is_known());
        let fragments: Vec<_> = d.fragments().iter().map(Fragment::as_str).collect();
        assert_eq!(fragments, ["json", "Version5"]);
    }
}
