use anyhow::{Context, Result};
use cpal::traits::StreamTrait;
use log::{debug, error, info, warn};
use std::io;
use std::sync::Arc;

use keytone::config::EngineConfig;
use keytone::core::audio::open_output_stream;
use keytone::core::VoiceState;
use keytone::input::{
    InputPoller, KeyMap, StatusLine, TerminalKeys, TerminalModeGuard, Tty,
};
use keytone::messaging::EventBus;
use keytone::utils::helpers::{format_frequency, freq_to_midi_note, midi_note_name};

const EVENT_CAPACITY: usize = 16;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = EngineConfig::default();
    config.validate()?;
    info!(
        "Pitch changes land within {:.1} ms",
        config.buffer_duration().as_secs_f64() * 1000.0
    );

    let voice = Arc::new(VoiceState::new(config.default_frequency_hz));
    let bus = EventBus::new(EVENT_CAPACITY);

    let stream = open_output_stream(&config, Arc::clone(&voice), bus.sender())?;
    stream.play().context("Failed to start stream")?;
    let start_hz = voice.target_frequency();
    info!(
        "Audio stream started at {} ({})",
        format_frequency(start_hz),
        midi_note_name(freq_to_midi_note(start_hz))
    );

    let keymap = KeyMap::chromatic();
    println!("Playing... keys z-m and s-j play notes, space stops, q quits.");

    let exit = {
        let guard = TerminalModeGuard::acquire(Tty::stdin());
        if !guard.is_raw() {
            warn!("Reading keys without raw mode");
        }
        let mut poller = InputPoller::new(
            &keymap,
            &voice,
            TerminalKeys::new(),
            StatusLine::new(io::stdout()),
            &bus,
            &config,
        );
        poller.run()
    };

    if let Err(err) = stream.pause() {
        debug!("Failed to pause stream: {}", err);
    }

    exit.into_result()
}
