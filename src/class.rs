//! Character classes from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! Every predicate is total over [`char`]. Characters outside 7-bit ASCII
//! belong to no class, so all predicates return `false` for them.
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

/// A table specifying the ASCII characters allowed in a string.
///
/// The table is a 128-bit mask split into two halves, one bit per
/// ASCII character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow non-ASCII byte");
            table |= 1u128 << *cur;
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the characters allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    #[inline]
    pub(crate) const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            return false;
        };
        table & (1u64 << (x & 63)) != 0
    }

    /// Checks whether the given character is allowed by the table.
    ///
    /// Always returns `false` for non-ASCII characters.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        ch.is_ascii() && self.allows_ascii(ch as u8)
    }

    /// Checks whether every character of the string is allowed by the table.
    #[must_use]
    pub const fn validate(self, s: &str) -> bool {
        let s = s.as_bytes();
        let mut i = 0;
        while i < s.len() {
            if !self.allows_ascii(s[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns the byte index of the first character not allowed by the table.
    #[must_use]
    pub fn first_disallowed(self, s: &str) -> Option<usize> {
        s.bytes().position(|x| !self.allows_ascii(x))
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
///
/// Only the characters are checked here. The leading `ALPHA`
/// is checked separately.
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `userinfo = *( unreserved / "%" / sub-delims / ":" )`
pub const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":%"));

/// `host = *( unreserved / "%" / sub-delims / ":" / "[" / "]" )`
///
/// This is looser than `IP-literal / IPv4address / reg-name`:
/// the brackets and colons of IPv6 literals are accepted anywhere.
pub const HOST: Table = USERINFO.or(new(b"[]"));

/// `port = *DIGIT`
pub const PORT: Table = DIGIT;

/// `path = *( unreserved / "%" / sub-delims / ":" / "@" / "/" )`
pub const PATH: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@/%"));

/// `query = *( path / "?" )`
pub const QUERY: Table = PATH.or(new(b"?"));

/// `fragment = *( path / "?" )`
pub const FRAGMENT: Table = QUERY;

/// Checks whether the character is `unreserved`.
#[inline]
#[must_use]
pub const fn is_unreserved(ch: char) -> bool {
    UNRESERVED.allows(ch)
}

/// Checks whether the character is one of the `gen-delims`.
#[inline]
#[must_use]
pub const fn is_gen_delim(ch: char) -> bool {
    GEN_DELIMS.allows(ch)
}

/// Checks whether the character is one of the `sub-delims`.
#[inline]
#[must_use]
pub const fn is_sub_delim(ch: char) -> bool {
    SUB_DELIMS.allows(ch)
}

/// Checks whether the character is `reserved`.
#[inline]
#[must_use]
pub const fn is_reserved(ch: char) -> bool {
    RESERVED.allows(ch)
}

/// Checks whether the character may appear in a scheme.
#[inline]
#[must_use]
pub const fn is_scheme_char(ch: char) -> bool {
    SCHEME.allows(ch)
}

/// Checks whether the character may appear in userinfo.
#[inline]
#[must_use]
pub const fn is_userinfo_char(ch: char) -> bool {
    USERINFO.allows(ch)
}

/// Checks whether the character may appear in a host.
#[inline]
#[must_use]
pub const fn is_host_char(ch: char) -> bool {
    HOST.allows(ch)
}

/// Checks whether the character may appear in a port.
#[inline]
#[must_use]
pub const fn is_port_char(ch: char) -> bool {
    PORT.allows(ch)
}

/// Checks whether the character may appear in a path.
#[inline]
#[must_use]
pub const fn is_path_char(ch: char) -> bool {
    PATH.allows(ch)
}

/// Checks whether the character may appear in a query.
#[inline]
#[must_use]
pub const fn is_query_char(ch: char) -> bool {
    QUERY.allows(ch)
}

/// Checks whether the character may appear in a fragment.
#[inline]
#[must_use]
pub const fn is_fragment_char(ch: char) -> bool {
    FRAGMENT.allows(ch)
}

/// Checks whether the string is a valid scheme name.
#[must_use]
pub const fn is_valid_scheme(s: &str) -> bool {
    matches!(s.as_bytes(), [first, ..] if first.is_ascii_alphabetic()) && SCHEME.validate(s)
}
