/// Errors that occur when a string cannot be read as a version or a pre-release tag.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum FormatError {
    /// The version string is not of the form `MAJOR.MINOR.PATCH[-PRE_RELEASE]`.
    #[error("Version `{version_string}` should be of the form `MAJOR.MINOR.PATCH[-PRE_RELEASE]`")]
    VersionFormatMismatch {
        /// The version string that was attempted to be parsed
        version_string: String,
    },

    /// A numeric field has only digits, but is too large to be represented.
    #[error("Value `{value}` for {field} is too large")]
    ValueTooLarge {
        /// The name of the field, e.g. `major`
        field: &'static str,
        /// The digits of the field as they appeared in the version string
        value: String,
    },

    /// The pre-release tag is not made of dot-separated, non-empty segments of `[0-9a-z]`.
    #[error(
        "Pre-release `{pre_release}` should be one or more dot-separated segments of `[0-9a-z]`"
    )]
    InvalidPreRelease {
        /// The pre-release tag that was attempted to be parsed
        pre_release: String,
    },
}
