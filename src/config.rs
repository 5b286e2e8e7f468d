use anyhow::{bail, Result};
use std::time::Duration;

use crate::core::Oscillator;

/// Fixed engine settings; there is no config file or command line.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: u32,
    pub buffer_frames: u32,
    pub channels: u16,
    pub gain: f32,
    pub default_frequency_hz: f32,
    pub poll_interval: Duration,
    pub read_batch: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            buffer_frames: 1024,
            channels: 2,
            gain: Oscillator::DEFAULT_GAIN,
            default_frequency_hz: 440.0,
            poll_interval: Duration::from_millis(1),
            read_batch: 16,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            bail!("sample rate must be non-zero");
        }
        if self.buffer_frames == 0 {
            bail!("buffer size must be non-zero");
        }
        if self.channels == 0 {
            bail!("channel count must be non-zero");
        }
        if !(self.gain > 0.0 && self.gain <= 1.0) {
            bail!("gain {} outside (0, 1]", self.gain);
        }
        if !(self.default_frequency_hz.is_finite() && self.default_frequency_hz > 0.0) {
            bail!("default frequency {} is not a positive number", self.default_frequency_hz);
        }
        if self.read_batch == 0 {
            bail!("read batch must hold at least one byte");
        }
        Ok(())
    }

    /// Worst-case delay between a voice update and the waveform following it
    pub fn buffer_duration(&self) -> Duration {
        Duration::from_secs_f64(self.buffer_frames as f64 / self.sample_rate as f64)
    }
}
