//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document, its name and lifecycle state
//! - Application settings
//! - Message, action and choice types exchanged with the host

pub mod document;
pub mod messages;
pub mod settings;

pub use document::{Document, DocumentName, DocumentState};
pub use messages::{Action, Choice, Message, Operation};
pub use settings::{AppSettings, OpenOrder};
