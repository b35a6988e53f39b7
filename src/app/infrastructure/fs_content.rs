use std::fs;
use std::path::{Path, PathBuf};

use crate::app::controllers::collaborators::ContentProvider;

/// In-memory editor text backed by files on disk.
///
/// Stands in for the editor widget: the host edits `text` and tells the
/// controller about it, the controller tells this provider when to load,
/// write or clear.
#[derive(Debug, Default)]
pub struct FsContent {
    text: String,
    editable: bool,
}

impl FsContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Returns false when editing is disabled (no document open).
    pub fn push_line(&mut self, line: &str) -> bool {
        if !self.editable {
            return false;
        }
        self.text.push_str(line);
        self.text.push('\n');
        true
    }

    pub fn set_text(&mut self, text: &str) -> bool {
        if !self.editable {
            return false;
        }
        self.text = text.to_string();
        true
    }
}

/// Write through a sibling temp file and rename over the target, so a failed
/// write never truncates the previous contents.
fn write_atomically(path: &Path, contents: &str) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let temp: PathBuf = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&temp, contents)?;
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(e);
    }
    Ok(())
}

impl ContentProvider for FsContent {
    fn reset(&mut self) {
        self.text.clear();
        self.editable = false;
    }

    fn start_empty(&mut self) {
        self.text.clear();
        self.editable = true;
    }

    fn load(&mut self, path: &str) -> Result<(), String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to open file \"{}\": {}", path, e))?;
        self.text = contents;
        self.editable = true;
        Ok(())
    }

    fn persist(&mut self, path: &str) -> Result<(), String> {
        write_atomically(Path::new(path), &self.text)
            .map_err(|e| format!("Failed to save file \"{}\": {}", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_disables_editing() {
        let mut content = FsContent::new();
        content.start_empty();
        assert!(content.push_line("hello"));
        content.reset();
        assert_eq!(content.text(), "");
        assert!(!content.is_editable());
        assert!(!content.push_line("ignored"));
        assert!(!content.set_text("ignored"));
    }

    #[test]
    fn test_load_missing_file_keeps_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = FsContent::new();
        content.start_empty();
        content.push_line("draft");

        let missing = dir.path().join("missing.txt");
        let err = content.load(&missing.to_string_lossy()).unwrap_err();

        assert!(err.starts_with("Failed to open file"));
        assert_eq!(content.text(), "draft\n");
    }

    #[test]
    fn test_persist_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let path = path.to_string_lossy().to_string();

        let mut writer = FsContent::new();
        writer.start_empty();
        writer.set_text("first line\nsecond line\n");
        writer.persist(&path).unwrap();

        let mut reader = FsContent::new();
        reader.load(&path).unwrap();
        assert_eq!(reader.text(), "first line\nsecond line\n");
        assert!(reader.is_editable());
    }

    #[test]
    fn test_persist_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        let mut content = FsContent::new();
        content.start_empty();
        content.push_line("x");
        content.persist(&path.to_string_lossy()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["note.txt".to_string()]);
    }

    #[test]
    fn test_persist_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("note.txt");
        let mut content = FsContent::new();
        let err = content.persist(&path.to_string_lossy()).unwrap_err();
        assert!(err.starts_with("Failed to save file"));
    }
}
