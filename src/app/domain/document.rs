use crate::app::services::text_ops::{extract_filename, parent_directory};

/// Identity of the open document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentName {
    /// Created by New and never saved; must go through Save As.
    Untitled,
    Named(String),
}

impl DocumentName {
    pub fn path(&self) -> Option<&str> {
        match self {
            DocumentName::Untitled => None,
            DocumentName::Named(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Closed,
    OpenClean,
    OpenDirty,
}

/// The single document tracked by a controller.
///
/// `name == None` means no document is open, and then `dirty` is always false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    name: Option<DocumentName>,
    dirty: bool,
    last_directory: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DocumentState {
        match (&self.name, self.dirty) {
            (None, _) => DocumentState::Closed,
            (Some(_), false) => DocumentState::OpenClean,
            (Some(_), true) => DocumentState::OpenDirty,
        }
    }

    pub fn name(&self) -> Option<&DocumentName> {
        self.name.as_ref()
    }

    /// Path of a named document; `None` when closed or untitled.
    pub fn path(&self) -> Option<&str> {
        self.name.as_ref().and_then(DocumentName::path)
    }

    pub fn is_open(&self) -> bool {
        self.name.is_some()
    }

    pub fn is_named(&self) -> bool {
        matches!(self.name, Some(DocumentName::Named(_)))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn last_directory(&self) -> Option<&str> {
        self.last_directory.as_deref()
    }

    /// Returns false (and changes nothing) when no document is open.
    pub fn set_dirty(&mut self, dirty: bool) -> bool {
        if self.name.is_none() {
            return false;
        }
        self.dirty = dirty;
        true
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn start_untitled(&mut self) {
        self.name = Some(DocumentName::Untitled);
        self.dirty = false;
    }

    /// Bind to `path` after a successful open or save-as.
    pub fn bind(&mut self, path: &str) {
        self.name = Some(DocumentName::Named(path.to_string()));
        self.dirty = false;
        self.last_directory = Some(parent_directory(path));
    }

    pub fn close(&mut self) {
        self.name = None;
        self.dirty = false;
    }

    pub fn display_name(&self, untitled: &str) -> String {
        match &self.name {
            Some(DocumentName::Named(path)) => extract_filename(path),
            _ => untitled.to_string(),
        }
    }
}
