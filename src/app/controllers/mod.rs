//! Controllers layer - orchestration and coordination.
//!
//! - Document lifecycle (new/open/save/save as/close/quit)
//! - Collaborator traits the host implements

pub mod collaborators;
pub mod document;
