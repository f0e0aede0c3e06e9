//! Data types shared by the engine and its host.

mod command;
mod event;
mod message;
mod mode;
mod reply;
mod session;
mod turn;

pub use command::Command;
pub use event::Event;
pub use message::{Message, Role};
pub use mode::{Mode, ServiceContext};
pub use reply::{Reply, ResponseCategory};
pub use session::{Session, Visibility};
pub use turn::TurnRequest;
