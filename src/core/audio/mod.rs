//! Real-time rendering and the cpal stream that drives it

mod render;
mod stream;

pub use render::{CallbackStatus, Renderer};
pub use stream::open_output_stream;
