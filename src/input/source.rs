use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Outcome of one non-blocking read attempt
#[derive(Debug)]
pub enum ReadOutcome {
    Bytes(usize),
    Empty,
    Failed(io::Error),
}

/// Anything the poller can pull raw keystrokes from
pub trait KeySource {
    /// Read up to `buf.len()` pending bytes without waiting for more.
    fn read_keys(&mut self, buf: &mut [u8]) -> ReadOutcome;
}

/// Byte the key map understands for a terminal key event.
///
/// Only presses and repeats count. Ctrl-C becomes ETX (0x03); other
/// non-ASCII keys have no byte.
pub fn key_byte(key: &KeyEvent) -> Option<u8> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(0x03),
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        KeyCode::Esc => Some(0x1b),
        _ => None,
    }
}

/// Keystrokes from the controlling terminal via crossterm's event queue
#[derive(Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }

    fn drain(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut n = 0;
        while n < buf.len() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(byte) = key_byte(&key) {
                    buf[n] = byte;
                    n += 1;
                }
            }
        }
        Ok(n)
    }
}

impl KeySource for TerminalKeys {
    fn read_keys(&mut self, buf: &mut [u8]) -> ReadOutcome {
        match self.drain(buf) {
            Ok(0) => ReadOutcome::Empty,
            Ok(n) => ReadOutcome::Bytes(n),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => ReadOutcome::Empty,
            Err(err) => ReadOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn letters_map_to_their_ascii_byte() {
        let press = key(KeyCode::Char('z'), KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(key_byte(&press), Some(b'z'));

        let space = key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(key_byte(&space), Some(b' '));

        let shifted = key(KeyCode::Char('Z'), KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(key_byte(&shifted), Some(b'Z'));
    }

    #[test]
    fn ctrl_c_maps_to_etx() {
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(key_byte(&ctrl_c), Some(0x03));

        let plain_c = key(KeyCode::Char('c'), KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(key_byte(&plain_c), Some(b'c'));
    }

    #[test]
    fn releases_and_special_keys_have_no_byte() {
        let release = key(KeyCode::Char('z'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(key_byte(&release), None);

        for code in [KeyCode::Up, KeyCode::F(1), KeyCode::Char('é')] {
            assert_eq!(key_byte(&key(code, KeyModifiers::NONE, KeyEventKind::Press)), None);
        }
    }
}
