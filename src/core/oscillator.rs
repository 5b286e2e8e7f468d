use std::f32::consts::TAU;

/// Phase-accumulating sine oscillator.
///
/// The phase is kept in radians in `[0, TAU)` and is never reset while a
/// stream is running; changing the frequency only changes the increment.
#[derive(Debug, Clone)]
pub struct Oscillator {
    phase: f32,
    frequency_hz: f32,
    sample_rate: f32,
    gain: f32,
}

impl Oscillator {
    pub const DEFAULT_GAIN: f32 = 0.2;

    pub fn new(sample_rate: f32, frequency_hz: f32, gain: f32) -> Self {
        let mut osc = Self {
            phase: 0.0,
            frequency_hz: 440.0,
            sample_rate,
            gain,
        };
        osc.set_frequency(frequency_hz);
        osc
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn frequency_hz(&self) -> f32 {
        self.frequency_hz
    }

    /// Radians the phase moves per sample at the current frequency
    pub fn phase_increment(&self) -> f32 {
        TAU * self.frequency_hz / self.sample_rate
    }

    /// Set a new frequency without touching the phase.
    ///
    /// Non-finite and non-positive values are ignored and the frequency is
    /// capped at Nyquist so a single wrap keeps the phase in range.
    pub fn set_frequency(&mut self, frequency_hz: f32) {
        if frequency_hz.is_finite() && frequency_hz > 0.0 {
            self.frequency_hz = frequency_hz.min(self.sample_rate / 2.0);
        }
    }

    /// Emit the sample for the current phase, then step the phase.
    pub fn advance(&mut self) -> f32 {
        let sample = self.phase.sin() * self.gain;

        self.phase += self.phase_increment();
        if self.phase >= TAU {
            self.phase -= TAU;
        }

        sample
    }
}
