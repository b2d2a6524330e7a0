use alloc::string::String;
use core::fmt::Write;

/// The parts of an authority, borrowed from its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AuthorityParts<'a> {
    pub userinfo: &'a str,
    pub host: &'a str,
    /// Byte offset of the host within the authority.
    pub host_offset: usize,
    /// Text after the port separator, if any.
    pub port_text: Option<&'a str>,
    /// Byte offset of the port text within the authority.
    pub port_offset: usize,
    pub port: Option<u16>,
}

/// Splits an authority into userinfo, host and port.
///
/// The split happens at the first `'@'`, so userinfo can never contain one.
/// A port that is empty, not a digit run, or out of `1..=65535`
/// is dropped without an error.
pub(crate) fn split(auth: &str) -> AuthorityParts<'_> {
    let (userinfo, host_port, host_offset) = match auth.split_once('@') {
        Some((userinfo, rest)) => (userinfo, rest, userinfo.len() + 1),
        None => ("", auth, 0),
    };

    let colon_i = if host_port.starts_with('[') {
        // The port separator of an IP literal directly follows the closing bracket.
        host_port
            .find(']')
            .map(|i| i + 1)
            .filter(|&i| host_port.as_bytes().get(i) == Some(&b':'))
    } else {
        host_port.find(':')
    };

    let (host, port_text) = match colon_i {
        Some(i) => (&host_port[..i], Some(&host_port[i + 1..])),
        None => (host_port, None),
    };

    AuthorityParts {
        userinfo,
        host,
        host_offset,
        port_text,
        port_offset: host_offset + host.len() + 1,
        port: port_text.and_then(parse_port),
    }
}

/// Parses the leading digits of the string as a port number.
pub(crate) fn parse_port(s: &str) -> Option<u16> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    // Too many digits for `u32` means out of range anyway.
    let port: u32 = s[..len].parse().ok()?;
    match u16::try_from(port) {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}

/// Builds an authority from its parts.
///
/// Userinfo and port are omitted when empty or absent.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::build_authority;
///
/// assert_eq!(build_authority("user:pass", "example.com", Some(8080)), "user:pass@example.com:8080");
/// assert_eq!(build_authority("", "example.com", None), "example.com");
/// ```
#[must_use]
pub fn build_authority(userinfo: &str, host: &str, port: Option<u16>) -> String {
    let mut buf = String::with_capacity(userinfo.len() + host.len() + 7);
    if !userinfo.is_empty() {
        buf.push_str(userinfo);
        buf.push('@');
    }
    buf.push_str(host);
    if let Some(port) = port {
        // Writing to a `String` never fails.
        let _ = write!(buf, ":{port}");
    }
    buf
}
