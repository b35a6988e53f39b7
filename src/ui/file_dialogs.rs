use std::path::Path;

use crate::app::controllers::collaborators::FileChooser;
use crate::ui::console::SharedConsole;

/// Asks for a path on the terminal. Relative answers are taken relative to
/// the directory the dialog was opened in, like a GUI file chooser.
pub struct TerminalFileChooser {
    console: SharedConsole,
}

impl TerminalFileChooser {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    fn ask(&mut self, title: &str, start_dir: Option<&str>) -> Option<String> {
        let prompt = match start_dir {
            Some(dir) => format!("{} (in {}): ", title, dir),
            None => format!("{}: ", title),
        };
        let answer = self.console.borrow_mut().ask(&prompt)?;
        resolve_answer(&answer, start_dir)
    }
}

/// An empty answer dismisses the dialog.
pub fn resolve_answer(answer: &str, start_dir: Option<&str>) -> Option<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }
    match start_dir {
        Some(dir) if Path::new(answer).is_relative() => {
            Some(Path::new(dir).join(answer).to_string_lossy().to_string())
        }
        _ => Some(answer.to_string()),
    }
}

impl FileChooser for TerminalFileChooser {
    fn choose_open(&mut self, start_dir: Option<&str>) -> Option<String> {
        self.ask("Open file...", start_dir)
    }

    fn choose_save(&mut self, start_dir: Option<&str>) -> Option<String> {
        self.ask("Save as...", start_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer_dismisses() {
        assert_eq!(resolve_answer("", Some("/tmp")), None);
        assert_eq!(resolve_answer("   ", None), None);
    }

    #[test]
    fn test_relative_answer_joins_start_dir() {
        assert_eq!(resolve_answer("a.txt", Some("/tmp")), Some("/tmp/a.txt".to_string()));
        assert_eq!(resolve_answer("a.txt", None), Some("a.txt".to_string()));
    }

    #[test]
    fn test_absolute_answer_kept() {
        assert_eq!(resolve_answer("/srv/b.txt", Some("/tmp")), Some("/srv/b.txt".to_string()));
    }
}
