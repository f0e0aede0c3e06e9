//! Assistant domain: conversation models and the services that drive a turn.
//!
//! Models are plain data owned by the host through a [`services::ChatWidget`].
//! Services hold the intent tables, the reply backends and the turn controller.

pub mod models;
pub mod services;
