//! Percent-encoding utilities.
//!
//! Decoding here is lenient: a `'%'` that is not followed by two hexadecimal
//! digits is kept as literal text rather than reported as an error, and the
//! decoded bytes are treated as opaque. Nothing in this module is applied
//! automatically while parsing.

use crate::class::{self, Table};
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{cmp::Ordering, fmt, hash, iter::FusedIterator, str};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// String slices that may contain percent-encoded octets.
///
/// Every component of a [`Uri`] except the scheme is exposed as an `EStr`,
/// so that it can be split and decoded without copying. No validation is
/// attached to an `EStr`: any string slice is one.
///
/// # Comparison
///
/// `EStr` slices are compared [lexicographically](Ord#lexicographical-comparison)
/// by their byte values. Normalization is **not** performed prior to comparison.
///
/// # Examples
///
/// Parse key-value pairs from a query string into a hash map:
///
/// ```
/// use rfc3986_uri::{pct_enc::EStr, Uri};
/// use std::collections::HashMap;
///
/// let uri = Uri::parse("?name=%E5%BC%A0%E4%B8%89&speech=%C2%A1Ol%C3%A9%21")?;
/// let map: HashMap<_, _> = uri
///     .query()
///     .split('&')
///     .map(|s| s.split_once('=').unwrap_or((s, EStr::EMPTY)))
///     .map(|(k, v)| (k.decode().to_string_lossy(), v.decode().to_string_lossy()))
///     .collect();
/// assert_eq!(map["name"], "张三");
/// assert_eq!(map["speech"], "¡Olé!");
/// # Ok::<_, rfc3986_uri::ParseError>(())
/// ```
///
/// [`Uri`]: crate::Uri
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr {
    inner: str,
}

impl EStr {
    /// Converts a string slice to an `EStr` slice.
    #[ref_cast_custom]
    pub const fn new(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new("");

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator used to decode the `EStr` slice.
    ///
    /// Always **split before decoding**, as otherwise the data may be
    /// mistaken for component delimiters.
    ///
    /// Note that the iterator will **not** decode `U+002B` (+) as `0x20` (space).
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc3986_uri::pct_enc::EStr;
    ///
    /// let dec = EStr::new("%C2%A1Hola%21").decode();
    /// assert_eq!(*dec.clone().to_bytes(), [0xc2, 0xa1, 0x48, 0x6f, 0x6c, 0x61, 0x21]);
    /// assert_eq!(dec.to_string().unwrap(), "¡Hola!");
    /// ```
    pub fn decode(&self) -> Decode<'_> {
        decode(&self.inner)
    }

    /// Returns an iterator over subslices of the `EStr` slice separated by the given delimiter.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc3986_uri::pct_enc::EStr;
    ///
    /// assert!(EStr::new("a,b,c").split(',').eq(["a", "b", "c"]));
    /// assert!(EStr::new(",").split(',').eq(["", ""]));
    /// assert!(EStr::EMPTY.split(',').eq([""]));
    /// ```
    pub fn split(&self, delim: char) -> Split<'_> {
        assert!(
            class::is_reserved(delim),
            "splitting with non-reserved character"
        );
        Split {
            inner: self.inner.split(delim),
        }
    }

    /// Splits the `EStr` slice on the first occurrence of the given delimiter and
    /// returns prefix before delimiter and suffix after delimiter.
    ///
    /// Returns `None` if the delimiter is not found.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    #[must_use]
    pub fn split_once(&self, delim: char) -> Option<(&Self, &Self)> {
        assert!(
            class::is_reserved(delim),
            "splitting with non-reserved character"
        );
        self.inner
            .split_once(delim)
            .map(|(a, b)| (Self::new(a), Self::new(b)))
    }

    /// Splits the `EStr` slice on the last occurrence of the given delimiter and
    /// returns prefix before delimiter and suffix after delimiter.
    ///
    /// Returns `None` if the delimiter is not found.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    #[must_use]
    pub fn rsplit_once(&self, delim: char) -> Option<(&Self, &Self)> {
        assert!(
            class::is_reserved(delim),
            "splitting with non-reserved character"
        );
        self.inner
            .rsplit_once(delim)
            .map(|(a, b)| (Self::new(a), Self::new(b)))
    }
}

impl AsRef<str> for EStr {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for EStr {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for EStr {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<EStr> for str {
    fn eq(&self, other: &EStr) -> bool {
        self == &other.inner
    }
}

impl Eq for EStr {}

impl hash::Hash for EStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl PartialOrd for EStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl Default for &EStr {
    /// Creates an empty `EStr` slice.
    fn default() -> Self {
        EStr::EMPTY
    }
}

impl fmt::Debug for EStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for EStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// An iterator over subslices of an [`EStr`] slice separated by a delimiter.
///
/// This struct is created by [`EStr::split`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a> {
    inner: str::Split<'a, char>,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a EStr;

    fn next(&mut self) -> Option<&'a EStr> {
        self.inner.next().map(EStr::new)
    }
}

impl<'a> DoubleEndedIterator for Split<'a> {
    fn next_back(&mut self) -> Option<&'a EStr> {
        self.inner.next_back().map(EStr::new)
    }
}

impl FusedIterator for Split<'_> {}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    // Non-hexadecimal bytes map to zero.
    let mut out = [0; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Checks whether both bytes are hexadecimal digits.
#[inline]
#[must_use]
pub const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    class::HEXDIG.allows_ascii(hi) & class::HEXDIG.allows_ascii(lo)
}

/// Converts two hexadecimal digits to the octet they encode.
///
/// Digits are case-insensitive. A byte that is not a hexadecimal digit
/// contributes `0` instead of failing, so `hex_to_octet(b'4', b'g')` is `0x40`.
/// Callers are expected to check the pair with [`is_hexdig_pair`] first;
/// without that check, malformed input decodes silently to a wrong octet.
#[inline]
#[must_use]
pub const fn hex_to_octet(hi: u8, lo: u8) -> u8 {
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// Returns the index of the first well-formed percent-encoded octet.
fn find_pct_encoded(s: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < s.len() {
        // Check the bounds before looking at the digits.
        if s[i] == b'%' && i + 2 < s.len() && is_hexdig_pair(s[i + 1], s[i + 2]) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Returns an iterator used to decode a string slice.
///
/// Well-formed `%HH` octets are decoded, with the digits matched
/// case-insensitively. Anything else, including a `'%'` not followed by two
/// hexadecimal digits, is yielded as is.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::pct_enc;
///
/// assert_eq!(pct_enc::decode("hello%20world%21").to_string().unwrap(), "hello world!");
/// assert_eq!(pct_enc::decode("100%").to_string().unwrap(), "100%");
/// assert_eq!(pct_enc::decode("%zz%4").to_string().unwrap(), "%zz%4");
/// ```
pub fn decode(s: &str) -> Decode<'_> {
    Decode { source: s }
}

/// An iterator used to decode a string slice.
///
/// This struct is created by [`decode`] and [`EStr::decode`]. Normally you'll
/// use the methods below instead of iterating over a `Decode` manually.
///
/// See the [`DecodedChunk`] type for documentation of the items yielded by this iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decode<'a> {
    source: &'a str,
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedChunk<'a> {
    /// A subslice left as is.
    Unencoded(&'a str),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

impl<'a> Decode<'a> {
    fn next_if_unencoded(&mut self) -> Option<&'a str> {
        let i = find_pct_encoded(self.source.as_bytes()).unwrap_or(self.source.len());

        if i == 0 {
            None
        } else {
            let s;
            (s, self.source) = self.source.split_at(i);
            Some(s)
        }
    }

    /// Decodes the slice to bytes.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_bytes(mut self) -> Cow<'a, [u8]> {
        let first = match self.next() {
            None => return Cow::Borrowed(&[]),
            Some(DecodedChunk::Unencoded(s)) if self.source.is_empty() => {
                return Cow::Borrowed(s.as_bytes())
            }
            Some(chunk) => chunk,
        };

        let mut buf = Vec::with_capacity(first_len(first) + self.source.len());
        for chunk in core::iter::once(first).chain(self) {
            match chunk {
                DecodedChunk::Unencoded(s) => buf.extend_from_slice(s.as_bytes()),
                DecodedChunk::PctDecoded(x) => buf.push(x),
            }
        }
        Cow::Owned(buf)
    }

    /// Attempts to decode the slice to a string.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    ///
    /// # Errors
    ///
    /// Returns `Err` containing the decoded bytes if they are not valid UTF-8.
    pub fn to_string(self) -> Result<Cow<'a, str>, Vec<u8>> {
        match self.to_bytes() {
            // The borrowed bytes are a slice of the source string.
            Cow::Borrowed(bytes) => match str::from_utf8(bytes) {
                Ok(s) => Ok(Cow::Borrowed(s)),
                Err(_) => Err(bytes.to_vec()),
            },
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|e| e.into_bytes()),
        }
    }

    /// Decodes the slice to a string, replacing any invalid UTF-8 sequences with
    /// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_string_lossy(self) -> Cow<'a, str> {
        match self.to_bytes() {
            Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
            Cow::Owned(bytes) => match String::from_utf8(bytes) {
                Ok(s) => Cow::Owned(s),
                Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            },
        }
    }
}

fn first_len(chunk: DecodedChunk<'_>) -> usize {
    match chunk {
        DecodedChunk::Unencoded(s) => s.len(),
        DecodedChunk::PctDecoded(_) => 1,
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = DecodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            None
        } else if let Some(s) = self.next_if_unencoded() {
            Some(DecodedChunk::Unencoded(s))
        } else {
            let s;
            (s, self.source) = self.source.split_at(3);
            let x = hex_to_octet(s.as_bytes()[1], s.as_bytes()[2]);
            Some(DecodedChunk::PctDecoded(x))
        }
    }
}

impl FusedIterator for Decode<'_> {}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Percent-encodes a string slice with the given table.
///
/// Every byte of a character not allowed by `table` is encoded as an
/// upper-case `%HH` triple. `'%'` itself is always encoded, even if the
/// table allows it, so that [`decode`] restores the input exactly.
///
/// This function allocates only when anything needs encoding.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::{class::PATH, pct_enc};
///
/// assert_eq!(pct_enc::encode("/a b/ü", PATH), "/a%20b/%C3%BC");
/// assert_eq!(pct_enc::encode("100%", PATH), "100%25");
/// assert_eq!(pct_enc::encode("/plain", PATH), "/plain");
/// ```
#[must_use]
pub fn encode(s: &str, table: Table) -> Cow<'_, str> {
    let allowed = |x: u8| x != b'%' && table.allows_ascii(x);

    let Some(i) = s.bytes().position(|x| !allowed(x)) else {
        return Cow::Borrowed(s);
    };

    let mut buf = String::with_capacity(s.len() + 8);
    buf.push_str(&s[..i]);
    for &x in &s.as_bytes()[i..] {
        if allowed(x) {
            buf.push(x as char);
        } else {
            buf.push_str(encode_byte(x));
        }
    }
    Cow::Owned(buf)
}
