//! # semver-next
//!
//! A library for parsing semantic versions and computing the next one.
//!
//! Versions have the form `MAJOR.MINOR.PATCH[-PRE_RELEASE]`. They can be parsed from strings,
//! written back out in their canonical form, and moved forward by an [`Increment`].
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use semver_next::prelude::*;
//!
//! let next = Version::parse("1.2.3").unwrap().next(&Increment::Minor(None));
//! assert_eq!(next.to_string(), "1.3.0");
//! ```
//!
//! Cut a release candidate, then finalize it:
//!
//! ```
//! use semver_next::prelude::*;
//!
//! let cur = Version::parse("1.2.3").unwrap();
//! let rc = cur.next(&Level::Major.increment(Some("rc.1".parse().unwrap())));
//! assert_eq!(rc.to_string(), "2.0.0-rc.1");
//!
//! let release = rc.next(&Increment::Release);
//! assert_eq!(release.to_string(), "2.0.0");
//! ```
//!
//! ## Increments
//!
//! | Increment | Example (from `1.2.3-rc.1`) | Description |
//! |---|---|---|
//! | `Patch(None)` | `1.2.4` | Increment patch. |
//! | `Minor(None)` | `1.3.0` | Increment minor, reset patch. |
//! | `Major(None)` | `2.0.0` | Increment major, reset minor and patch. |
//! | `Major(Some(b))` | `2.0.0-b` | Any of the above may tag the result. |
//! | `Release` | `1.2.3` | Keep the numbers, drop the tag. |
//!
//! The current version's tag is never carried over to the next one.
//!
//! ## Grammar
//!
//! - `MAJOR`, `MINOR` and `PATCH` are one or more ASCII digits. Leading zeros are accepted when
//!   parsing but are not written back out.
//! - `PRE_RELEASE` is one or more `.`-separated segments, each one or more of `[0-9a-z]`.
//! - Build metadata (`+build`) and prefixes such as `v` are not accepted.
//!
//! ## Prelude
//!
//! semver-next provides a prelude module for convenience. It contains everything needed to
//! interact with the library.
//!
//! Use it with:
//!
//! ```
//! use semver_next::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod increment;
mod pre_release;
mod version;

pub use crate::error::FormatError;
pub use crate::increment::{Increment, Level};
pub use crate::pre_release::PreRelease;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use semver_next::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::FormatError;
    #[doc(no_inline)]
    pub use crate::Increment;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::PreRelease;
    #[doc(no_inline)]
    pub use crate::Version;
}
