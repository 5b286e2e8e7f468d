//! Monophonic sine voice played from a terminal keypad.
//!
//! Two contexts share one [`VoiceState`](crate::core::VoiceState): the cpal audio callback, which
//! renders through [`Renderer`](crate::core::audio::Renderer), and the main-thread
//! [`InputPoller`](crate::input::InputPoller), which reads raw keystrokes under a
//! [`TerminalModeGuard`](crate::input::TerminalModeGuard).

pub mod config;
pub mod core;
pub mod input;
pub mod messaging;
pub mod utils;
