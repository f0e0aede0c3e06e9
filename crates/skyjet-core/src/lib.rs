//! Conversational assistant engine for the Skyjet charter widget.
//!
//! The engine answers free-text questions about executive charters,
//! air-ambulance service and organ transport by keyword matching against
//! per-mode tables, after a simulated round-trip. It is organized as:
//!
//! - **Domain models**: messages, sessions, service modes and turn events
//! - **Intent resolution**: ordered keyword rules with a total fallback
//! - **Turn control**: [`ChatWidget`] owns the session and folds finished
//!   turns into it, so replies from overlapping turns never race
//! - **Reply backends**: the simulated resolver plus a timeout and retry wrapper
//! - **Configuration**: YAML with `SKYJET_*` environment overrides

pub mod config;
pub mod domain;
pub mod errors;

pub use config::{ConfigLoader, SkyjetConfig};
pub use domain::models::{Message, Mode, Role, ServiceContext, Session};
pub use domain::services::{ChatWidget, IntentResolver, ReplyBackend, SimulatedBackend};
pub use errors::AssistantError;
