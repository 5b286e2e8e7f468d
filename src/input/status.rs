use std::io::{self, Write};

/// A single console line rewritten in place with `\r`.
///
/// Shorter updates are padded with spaces so no tail of the previous text
/// survives.
pub struct StatusLine<W: Write> {
    out: W,
    last_len: usize,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_len: 0 }
    }

    pub fn show(&mut self, text: &str) -> io::Result<()> {
        let pad = self.last_len.saturating_sub(text.len());
        write!(self.out, "\r{}{:pad$}", text, "", pad = pad)?;
        self.out.flush()?;
        self.last_len = text.len();
        Ok(())
    }

    pub fn show_note(&mut self, name: &str) -> io::Result<()> {
        self.show(&format!("Note: {}", name))
    }

    /// Move past the status line so later output starts on a fresh line.
    ///
    /// Raw mode turns off output processing, so the carriage return is explicit.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.last_len > 0 {
            write!(self.out, "\r\n")?;
            self.out.flush()?;
            self.last_len = 0;
        }
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
