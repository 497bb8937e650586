//! The source of user input for the interactive session.

use std::io::{self, BufRead};

/// Something that hands out one line of user input at a time.
pub(crate) trait LineSource {
    /// Reads the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Bytes that are not valid UTF-8 come back as U+FFFD, which the
/// validators then reject like any other unsupported character.
impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
