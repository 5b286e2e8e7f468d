/// Notifications raised on the audio side and consumed by the main loop
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    StreamError(String),
    RenderAborted,
}

impl std::fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineEvent::StreamError(msg) => write!(f, "audio stream error: {}", msg),
            EngineEvent::RenderAborted => write!(f, "render callback aborted the stream"),
        }
    }
}
