//! Infrastructure layer - external integrations.
//!
//! - File-backed editor content

pub mod fs_content;

pub use fs_content::FsContent;
