//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages)
//! - `controllers/` - Document lifecycle controller and its collaborator seams
//! - `services/` - Path helpers
//! - `infrastructure/` - File-backed editor content
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::collaborators::{
    ActionSink, Callbacks, ConfirmationPrompter, ContentProvider, FileChooser, RecentsNotifier,
};
pub use controllers::document::DocumentController;
pub use domain::{Action, AppSettings, Choice, Document, DocumentName, DocumentState, Message, OpenOrder, Operation};
pub use error::{AppError, Result};
pub use infrastructure::FsContent;
