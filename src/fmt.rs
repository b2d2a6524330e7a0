use crate::Uri;
use core::fmt::{self, Write};

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("authority", &self.authority())
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

/// Writes `scheme ":" "//" authority path "?" query "#" fragment`,
/// leaving out each empty component with its delimiter.
///
/// Parsing the output gives back the same components when nothing was
/// dropped, with one exception: a path starting with `"//"` under an empty
/// authority (as in `a:////x`) is written as `a://x` and then reads back
/// as an authority.
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme().is_empty() {
            f.write_str(self.scheme())?;
            f.write_char(':')?;
        }
        if !self.authority().is_empty() {
            f.write_str("//")?;
            f.write_str(self.authority().as_str())?;
        }
        f.write_str(self.path().as_str())?;
        if !self.query().is_empty() {
            f.write_char('?')?;
            f.write_str(self.query().as_str())?;
        }
        if !self.fragment().is_empty() {
            f.write_char('#')?;
            f.write_str(self.fragment().as_str())?;
        }
        Ok(())
    }
}
