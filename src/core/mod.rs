pub mod audio;
pub mod oscillator;
pub mod voice;

pub use oscillator::Oscillator;
pub use voice::VoiceState;
