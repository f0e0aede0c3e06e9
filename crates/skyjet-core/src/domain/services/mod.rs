mod backend;
mod intent;
pub mod quick_replies;
mod recovery;
pub mod responses;
mod widget;

pub use backend::ReplyBackend;
pub use backend::SimulatedBackend;
pub use intent::IntentResolver;
pub use quick_replies::suggestions_for;
pub use quick_replies::suggestions_for_host;
pub use quick_replies::QuickReplySet;
pub use recovery::ResilientBackend;
pub use widget::ChatWidget;
