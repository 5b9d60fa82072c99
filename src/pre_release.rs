use crate::error::FormatError;
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// A pre-release tag, such as the `rc.1` in `1.2.3-rc.1`.
///
/// A tag is one or more segments separated by `.`, where each segment is one or more characters
/// from `[0-9a-z]`. Empty segments are not allowed, so `rc.`, `.rc`, and `rc..1` are all invalid.
///
/// ```
/// use semver_next::prelude::*;
///
/// let tag: PreRelease = "rc.1".parse().unwrap();
/// assert_eq!("rc.1", tag.as_str());
///
/// assert!(PreRelease::parse("RC.1").is_err());
/// assert!(PreRelease::parse("rc.").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease(String);

impl PreRelease {
    /// Returns a new [PreRelease] if `pre_release` is a valid tag, or a
    /// [FormatError::InvalidPreRelease] otherwise.
    pub fn parse(pre_release: &str) -> Result<Self, FormatError> {
        if Self::is_valid(pre_release) {
            Ok(Self(pre_release.to_owned()))
        } else {
            Err(FormatError::InvalidPreRelease {
                pre_release: pre_release.to_owned(),
            })
        }
    }

    /// Returns the tag text, exactly as it was parsed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(pre_release: &str) -> bool {
        // `split` always yields at least one item, so the empty string fails on its only segment
        pre_release.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        })
    }
}

impl FromStr for PreRelease {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Deref for PreRelease {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
