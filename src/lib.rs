#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A generic-syntax URI reference parser following IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! A URI reference is split into scheme, authority (userinfo, host, port),
//! path, query, and fragment, and can be written back with [`Display`].
//! See the documentation of [`Uri`] for more details.
//!
//! This crate does not normalize URIs, resolve relative references, or
//! check what percent-encoded octets decode to. Percent-decoding is offered
//! separately in [`pct_enc`] and is never applied while parsing.
//!
//! [`Display`]: core::fmt::Display
//!
//! # Parsing rules
//!
//! - A scheme is read only if the input starts with a letter and a `':'`
//!   follows a run of scheme characters. Otherwise the input is a relative
//!   reference, except that a leading `':'` is an invalid (empty) scheme.
//! - The authority is split at its **first** `'@'`. Userinfo that needs an
//!   `'@'` must carry it percent-encoded.
//! - A port that is not a digit run within `1..=65535` is dropped silently.
//! - Characters outside the class of the path, query, or fragment are
//!   dropped, or rejected under [`CharPolicy::Reject`].
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. This includes [`Error`] implementations.
//! - `impl-error`: Implements [`Error`] for the error types without `std`.
//! - `serde`: Implements `Serialize` and `Deserialize` for [`Uri`].
//!
//! [`Error`]: core::error::Error

extern crate alloc;

pub mod class;
pub mod pct_enc;

mod authority;
mod builder;
mod cursor;
mod error;
mod fmt;
mod parser;
mod uri;

pub use authority::build_authority;
pub use builder::Builder;
pub use error::{ComponentError, ParseError, ParseErrorKind};
pub use parser::CharPolicy;
pub use uri::Uri;

use alloc::borrow::Cow;

/// Parses a URI reference from a string.
///
/// This is the same as [`Uri::parse`].
///
/// # Errors
///
/// Returns `Err` if the scheme is empty or the authority has an empty host.
///
/// # Examples
///
/// ```
/// let uri = rfc3986_uri::parse("https://example.com:8080/path")?;
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), Some(8080));
///
/// let e = rfc3986_uri::parse("://example.com").unwrap_err();
/// assert_eq!(e.kind(), rfc3986_uri::ParseErrorKind::InvalidScheme);
/// # Ok::<_, rfc3986_uri::ParseError>(())
/// ```
pub fn parse(s: &str) -> Result<Uri, ParseError> {
    Uri::parse(s)
}

/// Parses a URI reference from a string with the given [`CharPolicy`].
///
/// This is the same as [`Uri::parse_with`].
///
/// # Errors
///
/// See [`Uri::parse_with`].
pub fn parse_with(s: &str, policy: CharPolicy) -> Result<Uri, ParseError> {
    Uri::parse_with(s, policy)
}

/// Percent-decodes a string to bytes.
///
/// Malformed escapes are kept as is. This never fails; see [`pct_enc::decode`]
/// for the exact rules.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::percent_decode;
///
/// assert_eq!(&*percent_decode("hello%20world%21"), b"hello world!");
/// assert_eq!(&*percent_decode("50%off"), b"50%off");
/// ```
#[must_use]
pub fn percent_decode(s: &str) -> Cow<'_, [u8]> {
    pct_enc::decode(s).to_bytes()
}
