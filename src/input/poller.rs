use anyhow::{anyhow, Context, Result};
use log::{debug, trace, warn};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use super::{KeyAction, KeyMap, KeySource, ReadOutcome, StatusLine};
use crate::config::EngineConfig;
use crate::core::VoiceState;
use crate::messaging::{EngineEvent, EventBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Running,
    Stopped,
}

/// Why the poll loop ended
#[derive(Debug)]
pub enum PollerExit {
    Quit,
    ReadFailed(io::Error),
    StreamFailed(EngineEvent),
}

impl PollerExit {
    /// Only a quit key is a clean exit; failures carry their cause.
    pub fn into_result(self) -> Result<()> {
        match self {
            PollerExit::Quit => Ok(()),
            PollerExit::ReadFailed(err) => Err(err).context("Failed to read keyboard input"),
            PollerExit::StreamFailed(event) => Err(anyhow!("{}", event)),
        }
    }
}

/// Main-thread loop turning keystrokes into voice updates.
///
/// Only writes to the shared voice; never waits on the audio thread.
pub struct InputPoller<'a, S: KeySource, W: Write> {
    keymap: &'a KeyMap,
    voice: &'a VoiceState,
    source: S,
    status: StatusLine<W>,
    events: &'a EventBus,
    poll_interval: Duration,
    read_batch: usize,
    state: PollerState,
}

impl<'a, S: KeySource, W: Write> InputPoller<'a, S, W> {
    pub fn new(
        keymap: &'a KeyMap,
        voice: &'a VoiceState,
        source: S,
        status: StatusLine<W>,
        events: &'a EventBus,
        config: &EngineConfig,
    ) -> Self {
        Self {
            keymap,
            voice,
            source,
            status,
            events,
            poll_interval: config.poll_interval,
            read_batch: config.read_batch.max(1),
            state: PollerState::Running,
        }
    }

    pub fn state(&self) -> PollerState {
        self.state
    }

    pub fn status(&self) -> &StatusLine<W> {
        &self.status
    }

    /// Apply one batch of bytes in order.
    ///
    /// A quit byte stops the poller and drops whatever follows it in the batch.
    pub fn handle_batch(&mut self, bytes: &[u8]) -> PollerState {
        let keymap = self.keymap;
        for &byte in bytes {
            match keymap.classify(byte) {
                Some(KeyAction::Quit) => {
                    debug!("Quit key received");
                    self.state = PollerState::Stopped;
                    break;
                }
                Some(KeyAction::Stop) => {
                    self.voice.close_gate();
                    self.report(|status| status.show("Stopped"));
                }
                Some(KeyAction::Note(note)) => {
                    self.voice.set_target_frequency(note.frequency_hz);
                    self.voice.open_gate();
                    self.report(|status| status.show_note(&note.name));
                }
                None => trace!("Ignoring unmapped key {:#04x}", byte),
            }
        }
        self.state
    }

    fn report(&mut self, update: impl FnOnce(&mut StatusLine<W>) -> io::Result<()>) {
        if let Err(err) = update(&mut self.status) {
            warn!("Failed to update status line: {}", err);
        }
    }

    /// Poll until quit, a read failure, or a stream failure.
    pub fn run(&mut self) -> PollerExit {
        let mut buf = vec![0u8; self.read_batch];

        let exit = loop {
            if let Some(event) = self.events.try_receive() {
                debug!("Stopping on engine event: {}", event);
                break PollerExit::StreamFailed(event);
            }

            match self.source.read_keys(&mut buf) {
                ReadOutcome::Bytes(n) => {
                    if self.handle_batch(&buf[..n]) == PollerState::Stopped {
                        break PollerExit::Quit;
                    }
                }
                ReadOutcome::Empty => thread::sleep(self.poll_interval),
                ReadOutcome::Failed(err) => {
                    debug!("Stopping on read failure: {}", err);
                    break PollerExit::ReadFailed(err);
                }
            }
        };

        self.state = PollerState::Stopped;
        self.report(|status| status.finish());
        exit
    }
}
