use crate::{
    builder::Builder,
    class,
    error::{ComponentError, ParseError},
    parser::{self, CharPolicy},
    pct_enc::EStr,
};
use alloc::{borrow::ToOwned, string::String};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A [URI reference] defined in RFC 3986, split into its components.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// A `Uri` owns every component and shares nothing with the input it was
/// parsed from or with any other `Uri`. An empty component means that
/// the component is absent.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::Uri;
///
/// let uri = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose")?;
/// assert_eq!(uri.scheme(), "foo");
/// assert_eq!(uri.authority(), "user@example.com:8042");
/// assert_eq!(uri.userinfo(), "user");
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), Some(8042));
/// assert_eq!(uri.path(), "/over/there");
/// assert_eq!(uri.query(), "name=ferret");
/// assert_eq!(uri.fragment(), "nose");
/// assert_eq!(uri.to_string(), "foo://user@example.com:8042/over/there?name=ferret#nose");
/// # Ok::<_, rfc3986_uri::ParseError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: String,
    authority: String,
    userinfo: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: String,
    fragment: String,
}

impl Uri {
    /// Creates a `Uri` with every component absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URI reference from a string, dropping characters that are
    /// not allowed in the path, query, or fragment.
    ///
    /// Equivalent to [`parse_with`] with [`CharPolicy::Drop`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scheme is empty or the authority has an empty host.
    ///
    /// [`parse_with`]: Self::parse_with
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parser::parse(s, CharPolicy::Drop)
    }

    /// Parses a URI reference from a string with the given policy
    /// for characters outside a component's class.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scheme is empty, the authority has an empty host,
    /// or, under [`CharPolicy::Reject`], any character is not allowed
    /// where it appears.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc3986_uri::{CharPolicy, ParseErrorKind, Uri};
    ///
    /// let uri = Uri::parse_with("http://example.com/a b", CharPolicy::Drop)?;
    /// assert_eq!(uri.path(), "/ab");
    ///
    /// let e = Uri::parse_with("http://example.com/a b", CharPolicy::Reject).unwrap_err();
    /// assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);
    /// assert_eq!(e.index(), 20);
    /// # Ok::<_, rfc3986_uri::ParseError>(())
    /// ```
    pub fn parse_with(s: &str, policy: CharPolicy) -> Result<Self, ParseError> {
        parser::parse(s, policy)
    }

    /// Creates a new builder for `Uri`.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns the [scheme] component, lower-cased, or an empty string if absent.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the [authority] component, or an empty string if absent.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
    #[must_use]
    pub fn authority(&self) -> &EStr {
        EStr::new(&self.authority)
    }

    /// Returns the [userinfo] subcomponent, or an empty string if absent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
    #[must_use]
    pub fn userinfo(&self) -> &EStr {
        EStr::new(&self.userinfo)
    }

    /// Returns the [host] subcomponent, or an empty string if absent.
    ///
    /// An IPv6 literal is returned with its brackets.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
    #[must_use]
    pub fn host(&self) -> &EStr {
        EStr::new(&self.host)
    }

    /// Returns the [port] subcomponent.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.3
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
    #[must_use]
    pub fn path(&self) -> &EStr {
        EStr::new(&self.path)
    }

    /// Returns the [query] component, or an empty string if absent.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.4
    #[must_use]
    pub fn query(&self) -> &EStr {
        EStr::new(&self.query)
    }

    /// Returns the [fragment] component, or an empty string if absent.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.5
    #[must_use]
    pub fn fragment(&self) -> &EStr {
        EStr::new(&self.fragment)
    }

    /// Sets the scheme, stored lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::InvalidScheme`] and leaves the scheme
    /// unchanged if the string does not match
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc3986_uri::{ComponentError, Uri};
    ///
    /// let mut uri = Uri::new();
    /// uri.set_scheme("HTTPS")?;
    /// assert_eq!(uri.scheme(), "https");
    /// assert_eq!(uri.set_scheme("123invalid"), Err(ComponentError::InvalidScheme));
    /// assert_eq!(uri.scheme(), "https");
    /// # Ok::<_, ComponentError>(())
    /// ```
    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), ComponentError> {
        if !class::is_valid_scheme(scheme) {
            return Err(ComponentError::InvalidScheme);
        }
        self.scheme.clear();
        self.scheme
            .extend(scheme.chars().map(|ch| ch.to_ascii_lowercase()));
        Ok(())
    }

    /// Sets the raw authority text.
    ///
    /// Userinfo, host and port are left as they are.
    pub fn set_authority(&mut self, authority: &str) {
        authority.clone_into(&mut self.authority);
    }

    /// Sets the userinfo.
    pub fn set_userinfo(&mut self, userinfo: &str) {
        userinfo.clone_into(&mut self.userinfo);
    }

    /// Sets the host.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::InvalidHost`] and leaves the host
    /// unchanged if the string is empty.
    pub fn set_host(&mut self, host: &str) -> Result<(), ComponentError> {
        if host.is_empty() {
            return Err(ComponentError::InvalidHost);
        }
        host.clone_into(&mut self.host);
        Ok(())
    }

    /// Sets or clears the port.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::InvalidPort`] and leaves the port
    /// unchanged if the port is `Some(0)`.
    pub fn set_port(&mut self, port: Option<u16>) -> Result<(), ComponentError> {
        if port == Some(0) {
            return Err(ComponentError::InvalidPort);
        }
        self.port = port;
        Ok(())
    }

    /// Sets the path.
    pub fn set_path(&mut self, path: &str) {
        path.clone_into(&mut self.path);
    }

    /// Sets the query.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
    }

    /// Sets the fragment.
    pub fn set_fragment(&mut self, fragment: &str) {
        fragment.clone_into(&mut self.fragment);
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(de::Error::custom)
    }
}
