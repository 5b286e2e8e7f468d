use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use super::EngineEvent;

/// Carries engine events from the audio context to the poll loop.
///
/// The channel is bounded and only ever written with `try_send`, so the audio
/// side never blocks on a slow or absent reader.
pub struct EventBus {
    sender: Sender<EngineEvent>,
    receiver: Receiver<EngineEvent>,
}

/// Cloneable, non-blocking handle given to audio callbacks
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<EngineEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));
        EventBus { sender, receiver }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, if any
    pub fn try_receive(&self) -> Option<EngineEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl EventSender {
    /// Returns false when the event was dropped because the bus is full.
    pub fn notify(&self, event: EngineEvent) -> bool {
        self.sender.try_send(event).is_ok()
    }
}
