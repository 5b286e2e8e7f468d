mod bus;
mod types;

pub use bus::{EventBus, EventSender};
pub use types::EngineEvent;
