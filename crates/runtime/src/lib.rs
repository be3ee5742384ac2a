pub mod event_bus;
pub mod frame;
pub mod phase;

pub use event_bus::*;
pub use frame::*;
pub use phase::*;
