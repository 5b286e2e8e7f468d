//! Terminal keypad: raw-mode handling, key decoding and the poll loop

mod keymap;
mod poller;
mod source;
mod status;
mod terminal;

pub use keymap::{KeyAction, KeyMap, KeyNote, QUIT_KEYS, STOP_KEY};
pub use poller::{InputPoller, PollerExit, PollerState};
pub use source::{key_byte, KeySource, ReadOutcome, TerminalKeys};
pub use status::StatusLine;
pub use terminal::{ModeControl, TerminalModeGuard, Tty};
