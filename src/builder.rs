use crate::{
    authority::{self, build_authority},
    error::ComponentError,
    Uri,
};
use alloc::{borrow::ToOwned, string::String};

/// A builder for [`Uri`].
///
/// This struct is created by [`Uri::builder`].
///
/// Components are collected as raw strings and validated all at once
/// by [`build`], so a partially valid `Uri` is never observable.
///
/// # Authority
///
/// The authority can be given either as raw text with [`authority`], which
/// is split into userinfo, host and port the same way the parser does it,
/// or as parts with [`userinfo`], [`host`] and [`port`]. Explicit parts take
/// precedence over the ones split from raw text, in which case the authority
/// text is rebuilt from the resulting parts.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::Uri;
///
/// let uri = Uri::builder()
///     .scheme("foo")
///     .userinfo("user")
///     .host("example.com")
///     .port(8042)
///     .path("/over/there")
///     .query("name=ferret")
///     .fragment("nose")
///     .build()?;
///
/// assert_eq!(
///     uri.to_string(),
///     "foo://user@example.com:8042/over/there?name=ferret#nose"
/// );
/// # Ok::<_, rfc3986_uri::ComponentError>(())
/// ```
///
/// [`build`]: Self::build
/// [`authority`]: Self::authority
/// [`userinfo`]: Self::userinfo
/// [`host`]: Self::host
/// [`port`]: Self::port
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Builder {
    scheme: Option<String>,
    authority: Option<String>,
    userinfo: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    query: String,
    fragment: String,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme.
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Sets the raw authority text.
    pub fn authority(mut self, authority: &str) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Sets the userinfo.
    pub fn userinfo(mut self, userinfo: &str) -> Self {
        self.userinfo = Some(userinfo.into());
        self
    }

    /// Sets the host.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the path.
    pub fn path(mut self, path: &str) -> Self {
        path.clone_into(&mut self.path);
        self
    }

    /// Sets the query.
    pub fn query(mut self, query: &str) -> Self {
        query.clone_into(&mut self.query);
        self
    }

    /// Sets the fragment.
    pub fn fragment(mut self, fragment: &str) -> Self {
        fragment.clone_into(&mut self.fragment);
        self
    }

    /// Validates the components and builds the `Uri`.
    ///
    /// # Errors
    ///
    /// Returns the first error in component order:
    ///
    /// - [`InvalidScheme`] if the scheme does not match the scheme grammar.
    /// - [`InvalidHost`] if the host is empty while an authority is present.
    /// - [`InvalidPort`] if the port is zero.
    ///
    /// [`InvalidScheme`]: ComponentError::InvalidScheme
    /// [`InvalidHost`]: ComponentError::InvalidHost
    /// [`InvalidPort`]: ComponentError::InvalidPort
    pub fn build(self) -> Result<Uri, ComponentError> {
        let mut uri = Uri::new();

        if let Some(scheme) = &self.scheme {
            uri.set_scheme(scheme)?;
        }

        let split = self
            .authority
            .as_deref()
            .filter(|auth| !auth.is_empty())
            .map(authority::split);

        let userinfo = self
            .userinfo
            .as_deref()
            .or(split.map(|parts| parts.userinfo));
        let host = self.host.as_deref().or(split.map(|parts| parts.host));
        let port = self.port.or(split.and_then(|parts| parts.port));
        let overridden = self.userinfo.is_some() || self.host.is_some() || self.port.is_some();

        if let Some(host) = host {
            uri.set_host(host)?;
            uri.set_port(port)?;
            uri.set_userinfo(userinfo.unwrap_or_default());

            match self.authority.as_deref() {
                Some(auth) if split.is_some() && !overridden => uri.set_authority(auth),
                _ => uri.set_authority(&build_authority(
                    userinfo.unwrap_or_default(),
                    host,
                    port,
                )),
            }
        } else if port.is_some() || userinfo.is_some() {
            // Userinfo and port cannot exist without a host.
            return Err(ComponentError::InvalidHost);
        }

        uri.set_path(&self.path);
        uri.set_query(&self.query);
        uri.set_fragment(&self.fragment);
        Ok(uri)
    }
}
