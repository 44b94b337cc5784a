//! Shared types for the Noory back-office
//!
//! Data models and change-event types used by both the server and its
//! clients. Wire names follow the frontend's JSON conventions (camelCase
//! fields, lowercase status values), so payloads round-trip unchanged.

pub mod events;
pub mod models;

// Re-exports
pub use events::ChangeEvent;
pub use serde::{Deserialize, Serialize};
