pub mod event_bus;

pub use event_bus::{create_event_channel, EventReceiver, EventSender, SolveEvent};
