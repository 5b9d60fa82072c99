use crate::pre_release::PreRelease;
use core::fmt::{self, Display};

/// The field of a version that an [Increment] bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// The major field. Minor and patch are reset to zero.
    Major,
    /// The minor field. Patch is reset to zero.
    Minor,
    /// The patch field. Nothing is reset.
    Patch,
    /// No numeric field. Only the pre-release tag is dropped.
    Release,
}

impl Level {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Patch => "patch",
            Level::Release => "release",
        }
    }

    /// Returns an [Increment] for this level that attaches `pre_release` to its result.
    ///
    /// [Level::Release] never attaches a tag, so `pre_release` is ignored for it.
    ///
    /// ```
    /// use semver_next::prelude::*;
    ///
    /// let rc = PreRelease::parse("rc.1").unwrap();
    /// assert_eq!(Increment::Minor(Some(rc.clone())), Level::Minor.increment(Some(rc.clone())));
    /// assert_eq!(Increment::Release, Level::Release.increment(Some(rc)));
    /// ```
    pub fn increment(self, pre_release: Option<PreRelease>) -> Increment {
        match self {
            Level::Major => Increment::Major(pre_release),
            Level::Minor => Increment::Minor(pre_release),
            Level::Patch => Increment::Patch(pre_release),
            Level::Release => Increment::Release,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A request to move a version forward, passed to [Version::next](crate::Version::next).
///
/// The pre-release tag of the version being incremented is never carried over. The tag of the
/// result comes only from the increment: the one it holds for [Increment::Major],
/// [Increment::Minor] and [Increment::Patch], and none at all for [Increment::Release].
///
/// | Increment | Result of `X.Y.Z[-tag]` |
/// |---|---|
/// | `Patch(p)` | `X.Y.(Z+1)[-p]` |
/// | `Minor(p)` | `X.(Y+1).0[-p]` |
/// | `Major(p)` | `(X+1).0.0[-p]` |
/// | `Release` | `X.Y.Z` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Increment {
    /// Increment patch, optionally tagging the result.
    Patch(Option<PreRelease>),
    /// Increment minor and reset patch, optionally tagging the result.
    Minor(Option<PreRelease>),
    /// Increment major and reset minor and patch, optionally tagging the result.
    Major(Option<PreRelease>),
    /// Keep all numeric fields and remove the pre-release tag.
    Release,
}

impl Increment {
    /// Returns the [Level] this increment bumps.
    pub fn level(&self) -> Level {
        match self {
            Increment::Patch(_) => Level::Patch,
            Increment::Minor(_) => Level::Minor,
            Increment::Major(_) => Level::Major,
            Increment::Release => Level::Release,
        }
    }

    /// Returns the pre-release tag this increment will attach to its result, if any.
    pub fn pre_release(&self) -> Option<&PreRelease> {
        match self {
            Increment::Patch(pre_release)
            | Increment::Minor(pre_release)
            | Increment::Major(pre_release) => pre_release.as_ref(),
            Increment::Release => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn rc() -> PreRelease {
        PreRelease::parse("rc.1").unwrap()
    }

    #[rstest]
    #[case(Level::Major)]
    #[case(Level::Minor)]
    #[case(Level::Patch)]
    #[case(Level::Release)]
    fn test_level_round_trips_through_increment(#[case] level: Level, rc: PreRelease) {
        assert_eq!(level, level.increment(None).level());
        assert_eq!(level, level.increment(Some(rc)).level());
    }

    #[rstest]
    fn test_pre_release_accessor(rc: PreRelease) {
        assert_eq!(Some(&rc), Increment::Patch(Some(rc.clone())).pre_release());
        assert_eq!(Some(&rc), Increment::Minor(Some(rc.clone())).pre_release());
        assert_eq!(Some(&rc), Increment::Major(Some(rc.clone())).pre_release());
        assert_eq!(None, Increment::Patch(None).pre_release());
        assert_eq!(None, Level::Release.increment(Some(rc)).pre_release());
    }

    #[rstest]
    #[case(Level::Major, "major")]
    #[case(Level::Minor, "minor")]
    #[case(Level::Patch, "patch")]
    #[case(Level::Release, "release")]
    fn test_level_display(#[case] level: Level, #[case] expected: &str) {
        assert_eq!(expected, level.to_string());
    }
}
