use crate::{
    authority,
    builder::Builder,
    class::{self, Table},
    cursor::Cursor,
    error::{ComponentError, ParseError, ParseErrorKind},
    Uri,
};
use alloc::string::String;
use core::{
    mem,
    ops::{Deref, DerefMut},
};

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
        })
    };
}

/// What to do with a character that is not allowed in the component it appears in.
///
/// The policy applies to the path, query, and fragment, and under
/// [`Reject`](Self::Reject) also to userinfo, host and port. A malformed scheme
/// never falls under it: text that cannot be a scheme is read as a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CharPolicy {
    /// Skip the character and keep parsing.
    ///
    /// The parsed components then no longer reproduce the input exactly.
    #[default]
    Drop,
    /// Fail with [`ParseErrorKind::UnexpectedChar`].
    Reject,
}

pub(crate) fn parse(s: &str, policy: CharPolicy) -> Result<Uri> {
    let mut parser = Parser {
        policy,
        reader: Cursor::new(s),
        out: Builder::new(),
        host_start: 0,
    };
    parser.parse_from_scheme()?;
    let host_start = parser.host_start;
    parser.out.build().map_err(|e| ParseError {
        index: match e {
            ComponentError::InvalidScheme => 0,
            ComponentError::InvalidHost | ComponentError::InvalidPort => host_start,
        },
        kind: e.into(),
    })
}

/// URI reference parser.
///
/// # Preconditions and guarantees
///
/// Start and finish parsing by calling `parse_from_scheme`.
/// When it returns `Ok`, the whole input has been consumed and every
/// component has been handed to `out`, which does the validation.
struct Parser<'a> {
    policy: CharPolicy,
    reader: Cursor<'a>,
    out: Builder,
    host_start: usize,
}

impl<'a> Deref for Parser<'a> {
    type Target = Cursor<'a>;

    fn deref(&self) -> &Self::Target {
        &self.reader
    }
}

impl<'a> DerefMut for Parser<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reader
    }
}

impl<'a> Parser<'a> {
    fn emit(&mut self, f: impl FnOnce(Builder) -> Builder) {
        self.out = f(mem::take(&mut self.out));
    }

    fn parse_from_scheme(&mut self) -> Result<()> {
        match self.peek() {
            // A colon at the start leaves an empty scheme.
            Some(b':') => err!(0, InvalidScheme),
            Some(x) if x.is_ascii_alphabetic() => self.read_scheme(),
            // Not a scheme. Read the rest as a relative reference.
            _ => {}
        }

        if self.next_if_eq(b'/') {
            if self.next_if_eq(b'/') {
                self.parse_authority()?;
            } else {
                // The slash belongs to the path.
                self.rewind(1);
            }
        }

        self.parse_from_path()
    }

    /// Reads a scheme if the input starts with one and otherwise
    /// leaves the cursor where it was.
    fn read_scheme(&mut self) {
        let start = self.pos();
        let mut len = 0;

        while let Some(x) = self.next() {
            if x == b':' {
                let scheme = self.slice(start, start + len);
                self.emit(|b| b.scheme(scheme));
                return;
            }
            if !class::SCHEME.allows_ascii(x) {
                // Undo the scheme characters and the one just read.
                self.rewind(len + 1);
                return;
            }
            len += 1;
        }

        // End of input before ':'.
        self.rewind(len);
    }

    fn parse_authority(&mut self) -> Result<()> {
        let auth_start = self.pos();
        let auth = self.take_until(|x| matches!(x, b'/' | b'?' | b'#'));
        if auth.is_empty() {
            return Ok(());
        }

        let parts = authority::split(auth);
        self.host_start = auth_start + parts.host_offset;

        if self.policy == CharPolicy::Reject {
            self.check(parts.userinfo, auth_start, class::USERINFO)?;
            self.check(parts.host, self.host_start, class::HOST)?;
            if let Some(port) = parts.port_text {
                self.check(port, auth_start + parts.port_offset, class::PORT)?;
            }
        }

        self.emit(|b| b.authority(auth));
        Ok(())
    }

    fn check(&self, s: &str, start: usize, table: Table) -> Result<()> {
        match table.first_disallowed(s) {
            Some(i) => err!(start + i, UnexpectedChar),
            None => Ok(()),
        }
    }

    /// Reads bytes allowed by the table until one of the delimiters or the end,
    /// leaving the delimiter unread.
    fn read(&mut self, table: Table, delims: &[u8]) -> Result<String> {
        let mut buf = String::new();
        while let Some(x) = self.peek() {
            if delims.contains(&x) {
                break;
            }
            if table.allows_ascii(x) {
                buf.push(x as char);
            } else if self.policy == CharPolicy::Reject {
                err!(self.pos(), UnexpectedChar);
            }
            self.next();
        }
        Ok(buf)
    }

    fn parse_from_path(&mut self) -> Result<()> {
        let path = self.read(class::PATH, b"?#")?;
        self.emit(|b| b.path(&path));

        if self.next_if_eq(b'?') {
            let query = self.read(class::QUERY, b"#")?;
            self.emit(|b| b.query(&query));
        }

        if self.next_if_eq(b'#') {
            let fragment = self.read(class::FRAGMENT, b"")?;
            self.emit(|b| b.fragment(&fragment));
        }

        debug_assert!(!self.has_remaining());
        Ok(())
    }
}
