use crossterm::terminal;
use log::{debug, warn};
use std::io::{self, IsTerminal};

/// Get/set access to a terminal's mode, abstracted so the guard can be
/// exercised without a real tty.
pub trait ModeControl {
    type Mode: Clone;

    fn capture(&mut self) -> io::Result<Self::Mode>;
    /// Keypad mode derived from the captured one
    fn raw_mode(&self, saved: &Self::Mode) -> Self::Mode;
    fn apply(&mut self, mode: &Self::Mode) -> io::Result<()>;
}

/// Holds the terminal in keypad mode and restores the captured mode on drop.
///
/// If the mode cannot be captured (stdin is not a terminal) the guard is
/// inert: nothing is changed and nothing is restored.
pub struct TerminalModeGuard<C: ModeControl> {
    control: C,
    saved: Option<C::Mode>,
}

impl<C: ModeControl> TerminalModeGuard<C> {
    pub fn acquire(mut control: C) -> Self {
        let saved = match control.capture() {
            Ok(saved) => saved,
            Err(err) => {
                warn!("Terminal mode unavailable, keys will not be raw: {}", err);
                return Self { control, saved: None };
            }
        };

        let raw = control.raw_mode(&saved);
        if let Err(err) = control.apply(&raw) {
            warn!("Failed to switch terminal to raw mode: {}", err);
            if let Err(err) = control.apply(&saved) {
                warn!("Failed to restore terminal mode: {}", err);
            }
            return Self { control, saved: None };
        }

        debug!("Terminal switched to raw mode");
        Self {
            control,
            saved: Some(saved),
        }
    }

    pub fn is_raw(&self) -> bool {
        self.saved.is_some()
    }
}

impl<C: ModeControl> Drop for TerminalModeGuard<C> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            match self.control.apply(&saved) {
                Ok(()) => debug!("Terminal mode restored"),
                Err(err) => warn!("Failed to restore terminal mode: {}", err),
            }
        }
    }
}

/// The controlling terminal, switched with crossterm.
///
/// The captured mode is whether raw mode was already on. Leaving raw mode
/// hands back the line settings crossterm saved when it entered it.
#[derive(Default)]
pub struct Tty;

impl Tty {
    pub fn stdin() -> Self {
        Self
    }
}

impl ModeControl for Tty {
    type Mode = bool;

    fn capture(&mut self) -> io::Result<bool> {
        if !io::stdin().is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdin is not a terminal",
            ));
        }
        terminal::is_raw_mode_enabled()
    }

    fn raw_mode(&self, _saved: &bool) -> bool {
        true
    }

    fn apply(&mut self, raw: &bool) -> io::Result<()> {
        if *raw {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const RAW_BIT: u32 = 0x100;

    /// In-memory terminal whose mode is a bit set
    #[derive(Clone)]
    struct FakeTerminal {
        mode: Rc<RefCell<u32>>,
        capture_fails: bool,
        apply_calls: Rc<RefCell<usize>>,
    }

    impl FakeTerminal {
        fn new(mode: u32) -> Self {
            Self {
                mode: Rc::new(RefCell::new(mode)),
                capture_fails: false,
                apply_calls: Rc::new(RefCell::new(0)),
            }
        }
    }

    impl ModeControl for FakeTerminal {
        type Mode = u32;

        fn capture(&mut self) -> io::Result<u32> {
            if self.capture_fails {
                return Err(io::Error::new(io::ErrorKind::Unsupported, "not a tty"));
            }
            Ok(*self.mode.borrow())
        }

        fn raw_mode(&self, saved: &u32) -> u32 {
            saved | RAW_BIT
        }

        fn apply(&mut self, mode: &u32) -> io::Result<()> {
            *self.apply_calls.borrow_mut() += 1;
            *self.mode.borrow_mut() = *mode;
            Ok(())
        }
    }

    #[test]
    fn restores_exact_mode_on_drop() {
        let terminal = FakeTerminal::new(0b1011);
        {
            let guard = TerminalModeGuard::acquire(terminal.clone());
            assert!(guard.is_raw());
            assert_eq!(*terminal.mode.borrow(), 0b1011 | RAW_BIT);
        }
        assert_eq!(*terminal.mode.borrow(), 0b1011);
    }

    #[test]
    fn restores_on_early_return() {
        fn bail_early(terminal: FakeTerminal, fail: bool) -> Result<(), &'static str> {
            let _guard = TerminalModeGuard::acquire(terminal);
            if fail {
                return Err("early");
            }
            Ok(())
        }

        let terminal = FakeTerminal::new(0b0110);
        assert!(bail_early(terminal.clone(), true).is_err());
        assert_eq!(*terminal.mode.borrow(), 0b0110);
    }

    #[test]
    fn failed_capture_leaves_terminal_alone() {
        let mut terminal = FakeTerminal::new(0b0001);
        terminal.capture_fails = true;
        {
            let guard = TerminalModeGuard::acquire(terminal.clone());
            assert!(!guard.is_raw());
        }
        assert_eq!(*terminal.mode.borrow(), 0b0001);
        assert_eq!(*terminal.apply_calls.borrow(), 0);
    }

    #[test]
    fn tty_keypad_mode_is_always_raw() {
        let tty = Tty::stdin();
        assert!(tty.raw_mode(&false));
        assert!(tty.raw_mode(&true));
    }
}
