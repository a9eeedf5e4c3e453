//! Core type definitions for the chat core

pub mod identifiers;
pub mod messages;

pub use identifiers::MessageId;
pub use messages::{ChatMessage, DeliveryStatus, Role};
