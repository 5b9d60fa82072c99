use crate::{error::FormatError, increment::Increment, pre_release::PreRelease};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use tracing::{debug, trace};

/// A semantic version of the form `MAJOR.MINOR.PATCH[-PRE_RELEASE]`, such as `1.2.3` or
/// `1.2.3-rc.1`.
///
/// Versions are values: they are never changed in place. Moving to a new version with
/// [Version::next] returns a new object and leaves the original as it was.
///
/// # Examples
///
/// ```
/// use semver_next::prelude::*;
///
/// let cur = Version::parse("1.2.3-rc.1").unwrap();
/// assert_eq!(3, cur.patch());
/// assert_eq!(Some("rc.1"), cur.pre_release().map(PreRelease::as_str));
///
/// let next = cur.next(&Increment::Minor(None));
/// assert_eq!("1.3.0", next.to_string());
///
/// let released = cur.next(&Increment::Release);
/// assert_eq!("1.2.3", released.to_string());
/// ```
///
/// Or, build one directly:
///
/// ```
/// use semver_next::prelude::*;
///
/// let beta = PreRelease::parse("beta").unwrap();
/// let version = Version::new(0, 9, 0, Some(beta));
/// assert_eq!("0.9.0-beta", version.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<PreRelease>,
}

impl Version {
    /// Returns a new version from its fields.
    pub fn new(major: u64, minor: u64, patch: u64, pre_release: Option<PreRelease>) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release,
        }
    }

    /// Parses a version string of the form `MAJOR.MINOR.PATCH[-PRE_RELEASE]`.
    ///
    /// The whole string must match. Numeric fields are one or more ASCII digits. Leading zeros are
    /// accepted but not remembered, so `01.2.3` parses to the same version as `1.2.3`. The
    /// pre-release tag, if present, must be valid for [PreRelease] and is kept verbatim.
    ///
    /// # Errors
    ///
    /// - If the string is not of the form above, returns a
    ///   [FormatError::VersionFormatMismatch]. This includes prefixes like `v1.2.3`, build
    ///   metadata like `1.2.3+abc`, and bad tags like `1.2.3-` or `1.2.3-rc.`.
    /// - If a numeric field does not fit in a `u64`, returns a [FormatError::ValueTooLarge].
    pub fn parse(version_str: &str) -> Result<Self, FormatError> {
        let mismatch = || {
            trace!(version = version_str, "version string does not match");
            FormatError::VersionFormatMismatch {
                version_string: version_str.to_owned(),
            }
        };

        // the tag alphabet has no hyphen, so the first one (if any) always starts the tag
        let (numbers, pre_release) = match version_str.split_once('-') {
            Some((numbers, pre_release)) => (numbers, Some(pre_release)),
            None => (version_str, None),
        };

        let mut fields = numbers.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(mismatch());
        };

        if ![major, minor, patch].iter().all(|field| is_numeric(field)) {
            return Err(mismatch());
        }

        let pre_release = match pre_release {
            Some(pre_release) => Some(PreRelease::parse(pre_release).map_err(|_| mismatch())?),
            None => None,
        };

        Ok(Self::new(
            parse_field("major", major)?,
            parse_field("minor", minor)?,
            parse_field("patch", patch)?,
            pre_release,
        ))
    }

    /// Returns the major field.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Returns the minor field.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Returns the patch field.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the pre-release tag, if any.
    pub fn pre_release(&self) -> Option<&PreRelease> {
        self.pre_release.as_ref()
    }

    /// Returns a new version that is this one moved forward by `increment`. See [Increment] for
    /// the rules of each kind.
    ///
    /// # Example
    ///
    /// ```
    /// use semver_next::prelude::*;
    ///
    /// let version = Version::parse("1.2.3").unwrap();
    /// let rc = PreRelease::parse("rc.1").unwrap();
    ///
    /// assert_eq!("2.0.0", version.next(&Increment::Major(None)).to_string());
    /// assert_eq!("1.3.0-rc.1", version.next(&Increment::Minor(Some(rc))).to_string());
    /// assert_eq!("1.2.4", version.next(&Increment::Patch(None)).to_string());
    /// assert_eq!("1.2.3", version.to_string());
    /// ```
    ///
    /// # Panics
    ///
    /// If the incremented field is already `u64::MAX`, in every build profile. Use
    /// [Version::checked_next] to handle that case instead.
    pub fn next(&self, increment: &Increment) -> Self {
        self.checked_next(increment).unwrap_or_else(|| {
            panic!(
                "{} field of version `{}` is already at its maximum",
                increment.level(),
                self
            )
        })
    }

    /// Like [Version::next], but returns `None` instead of panicking if the incremented field is
    /// already `u64::MAX`.
    ///
    /// ```
    /// use semver_next::prelude::*;
    ///
    /// let version = Version::new(1, u64::MAX, 3, None);
    /// assert_eq!(None, version.checked_next(&Increment::Minor(None)));
    /// assert_eq!(
    ///     Some(Version::new(2, 0, 0, None)),
    ///     version.checked_next(&Increment::Major(None))
    /// );
    /// ```
    pub fn checked_next(&self, increment: &Increment) -> Option<Self> {
        let pre_release = increment.pre_release().cloned();
        let next = match increment {
            Increment::Patch(_) => {
                Self::new(self.major, self.minor, self.patch.checked_add(1)?, pre_release)
            }
            Increment::Minor(_) => Self::new(self.major, self.minor.checked_add(1)?, 0, pre_release),
            Increment::Major(_) => Self::new(self.major.checked_add(1)?, 0, 0, pre_release),
            Increment::Release => Self::new(self.major, self.minor, self.patch, None),
        };
        debug!(
            current = %self,
            next = %next,
            level = %increment.level(),
            pre_release = ?increment.pre_release().map(PreRelease::as_str),
            "computed next version"
        );
        Some(next)
    }
}

fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|c| c.is_ascii_digit())
}

/// Converts a field already checked by [is_numeric] to its value.
fn parse_field(name: &'static str, digits: &str) -> Result<u64, FormatError> {
    digits
        .bytes()
        .try_fold(0u64, |value, next| {
            value.checked_mul(10)?.checked_add(u64::from(next - b'0'))
        })
        .ok_or_else(|| FormatError::ValueTooLarge {
            field: name,
            value: digits.to_owned(),
        })
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Version {
    /// Returns the canonical version string. Values are written without zero-padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        Ok(())
    }
}
