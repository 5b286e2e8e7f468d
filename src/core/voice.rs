//! State shared between the input poller and the render callback.
//!
//! Each field is its own relaxed atomic. The poller is the only writer and the
//! render callback the only reader; a reader may see a new frequency paired
//! with an old gate for one frame, which is inaudible. Neither side ever waits
//! on the other.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

#[derive(Debug)]
pub struct VoiceState {
    frequency_bits: AtomicU32,
    amplitude_bits: AtomicU32,
    gate_open: AtomicBool,
}

/// Plain copy of the voice fields, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSnapshot {
    pub frequency_hz: f32,
    pub amplitude: f32,
    pub gate_open: bool,
}

impl VoiceState {
    pub fn new(frequency_hz: f32) -> Self {
        Self {
            frequency_bits: AtomicU32::new(frequency_hz.to_bits()),
            amplitude_bits: AtomicU32::new(1.0f32.to_bits()),
            gate_open: AtomicBool::new(true),
        }
    }

    pub fn target_frequency(&self) -> f32 {
        f32::from_bits(self.frequency_bits.load(Ordering::Relaxed))
    }

    pub fn set_target_frequency(&self, frequency_hz: f32) {
        self.frequency_bits
            .store(frequency_hz.to_bits(), Ordering::Relaxed);
    }

    pub fn amplitude(&self) -> f32 {
        f32::from_bits(self.amplitude_bits.load(Ordering::Relaxed))
    }

    #[cfg(test)]
    pub(crate) fn set_amplitude(&self, amplitude: f32) {
        self.amplitude_bits
            .store(amplitude.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }

    pub fn gate_open(&self) -> bool {
        self.gate_open.load(Ordering::Relaxed)
    }

    pub fn open_gate(&self) {
        self.gate_open.store(true, Ordering::Relaxed);
    }

    pub fn close_gate(&self) {
        self.gate_open.store(false, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> VoiceSnapshot {
        VoiceSnapshot {
            frequency_hz: self.target_frequency(),
            amplitude: self.amplitude(),
            gate_open: self.gate_open(),
        }
    }
}
