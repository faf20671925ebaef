//! Discriminator fragments.

use std::fmt;

/// One piece of a [`Discriminator`], contributed by a single checker.
///
/// Fragments are restricted to strings that can participate in handler-name
/// construction: a candidate is accepted only if it contains at least one
/// character from `{A-Z, a-z, 0-9, _}` or a byte `>= 0x80`. This is the
/// mechanism that rejects malformed header/query input before it reaches
/// name construction; rejected candidates are treated as "no signal", never
/// as errors.
///
/// [`Discriminator`]: crate::Discriminator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Validate and wrap a candidate fragment.
    ///
    /// Returns `None` when the candidate contains no name-safe character.
    pub fn parse(candidate: impl Into<String>) -> Option<Self> {
        let candidate = candidate.into();

        if candidate.bytes().any(Self::is_name_safe) {
            Some(Self(candidate))
        } else {
            None
        }
    }

    /// The raw fragment text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fragment with its first character ASCII-uppercased, remainder
    /// unchanged. Used when joining fragments into a handler name.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();

        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    fn is_name_safe(byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
