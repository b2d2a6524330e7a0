//! Error types.

use core::fmt;

/// An error occurred when setting a component of a [`Uri`].
///
/// [`Uri`]: crate::Uri
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ComponentError {
    /// The scheme does not start with a letter or contains a character
    /// other than a letter, digit, `'+'`, `'-'` or `'.'`.
    InvalidScheme,
    /// The host is empty.
    InvalidHost,
    /// The port is zero.
    InvalidPort,
}

impl ComponentError {
    fn description(self) -> &'static str {
        match self {
            Self::InvalidScheme => "invalid scheme",
            Self::InvalidHost => "invalid host",
            Self::InvalidPort => "invalid port",
        }
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(feature = "impl-error")]
impl core::error::Error for ComponentError {}

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// Invalid scheme, such as an empty one before a leading `':'`.
    ///
    /// The error index points to the start of the input.
    InvalidScheme,
    /// Empty host within a non-empty authority.
    ///
    /// The error index points to where the host would start.
    InvalidHost,
    /// Port out of range.
    ///
    /// Parsing never reports this kind, since an out-of-range port is
    /// dropped instead. It only arises through `From<ComponentError>`.
    InvalidPort,
    /// Character not allowed in the component it appears in.
    ///
    /// Only reported under [`CharPolicy::Reject`]. The error index points
    /// to the first byte of the character.
    ///
    /// [`CharPolicy::Reject`]: crate::CharPolicy::Reject
    UnexpectedChar,
}

impl From<ComponentError> for ParseErrorKind {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::InvalidScheme => Self::InvalidScheme,
            ComponentError::InvalidHost => Self::InvalidHost,
            ComponentError::InvalidPort => Self::InvalidPort,
        }
    }
}

/// An error occurred when parsing a URI reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index at which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidScheme => "invalid scheme",
            ParseErrorKind::InvalidHost => "invalid host",
            ParseErrorKind::InvalidPort => "invalid port",
            ParseErrorKind::UnexpectedChar => "unexpected character",
        };
        write!(f, "failed to parse URI: {msg} at index {}", self.index)
    }
}

#[cfg(feature = "impl-error")]
impl core::error::Error for ParseError {}
