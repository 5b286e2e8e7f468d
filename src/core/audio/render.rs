use cpal::{FromSample, Sample};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::core::{Oscillator, VoiceState};

/// Result of one render pass, reported back to the stream driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStatus {
    Continue,
    Abort,
}

/// Fills interleaved output buffers from the shared voice.
///
/// Runs on the audio thread: no locks, no allocation, no I/O.
pub struct Renderer {
    oscillator: Oscillator,
    voice: Arc<VoiceState>,
    channels: usize,
}

impl Renderer {
    pub fn new(config: &EngineConfig, voice: Arc<VoiceState>) -> Self {
        Self {
            oscillator: Oscillator::new(
                config.sample_rate as f32,
                config.default_frequency_hz,
                config.gain,
            ),
            voice,
            channels: (config.channels as usize).max(1),
        }
    }

    #[cfg(test)]
    pub(crate) fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Render `data.len() / channels` frames, the mono voice copied to every channel.
    ///
    /// The voice is re-read every frame, so a pitch change lands within the
    /// current buffer. A buffer that is not a whole number of frames is
    /// silenced and reported as `Abort`.
    pub fn render<T>(&mut self, data: &mut [T]) -> CallbackStatus
    where
        T: Sample + FromSample<f32>,
    {
        if data.len() % self.channels != 0 {
            data.fill(T::EQUILIBRIUM);
            return CallbackStatus::Abort;
        }

        for frame in data.chunks_mut(self.channels) {
            let voice = self.voice.snapshot();
            self.oscillator.set_frequency(voice.frequency_hz);

            // Keep the phase running while gated so reopening stays continuous.
            let value = self.oscillator.advance();
            let value = if voice.gate_open {
                value * voice.amplitude
            } else {
                0.0
            };

            let value_t = T::from_sample(value);
            for sample in frame.iter_mut() {
                *sample = value_t;
            }
        }

        CallbackStatus::Continue
    }
}
