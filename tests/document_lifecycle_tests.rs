//! End-to-end runs of the terminal host against real files.

use std::cell::RefCell;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use std::rc::Rc;

use simple_notepad::app::domain::{AppSettings, DocumentState, Message, OpenOrder};
use simple_notepad::app::state::AppState;
use simple_notepad::ui::console::Console;
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Output(Rc<RefCell<Vec<u8>>>);

impl Output {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn app_with(settings: AppSettings, script: &str) -> (AppState, Output) {
    let output = Output::default();
    let console = Console::new(
        Box::new(Cursor::new(script.as_bytes().to_vec())),
        Box::new(output.clone()),
    );
    (AppState::new(settings, console.shared()), output)
}

fn app(script: &str) -> (AppState, Output) {
    app_with(AppSettings::default(), script)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_new_type_save_prompts_for_name() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a.txt");
    let script = format!("new\ntype hello\nsave\n{}\nquit\n", path_str(&target));

    let (mut state, _) = app(&script);
    state.run();

    assert_eq!(fs::read_to_string(&target).unwrap(), "hello\n");
    assert!(!state.is_running());
    assert_eq!(state.controller.state(), DocumentState::Closed);
}

#[test]
fn test_title_follows_document() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("notes.txt");

    let (mut state, _) = app("");
    assert_eq!(state.controller.title(), "Simple Notepad");
    state.handle_line("new");
    assert_eq!(state.controller.title(), "Untitled - Simple Notepad");
    state.handle_line("type draft");
    assert_eq!(state.controller.title(), "*Untitled - Simple Notepad");
    state.handle_line(&format!("saveas {}", path_str(&target)));
    assert_eq!(state.controller.title(), "notes.txt - Simple Notepad");
}

#[test]
fn test_close_dirty_discard_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a.txt");
    fs::write(&target, "original\n").unwrap();

    let (mut state, output) = app("d\n");
    state.handle_message(Message::FileOpenPath(path_str(&target)));
    state.handle_line("type extra");
    assert_eq!(state.controller.state(), DocumentState::OpenDirty);

    state.handle_line("close");

    assert_eq!(state.controller.state(), DocumentState::Closed);
    assert_eq!(fs::read_to_string(&target).unwrap(), "original\n");
    assert_eq!(state.content.borrow().text(), "");
    assert!(output.text().contains("[s]ave, [d]iscard, [c]ancel"));
}

#[test]
fn test_quit_cancel_then_save() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a.txt");
    fs::write(&target, "one\n").unwrap();
    let script = format!("open {}\ntype two\nquit\nc\nquit\ns\n", path_str(&target));

    let (mut state, _) = app(&script);
    state.run();

    assert!(!state.is_running());
    assert_eq!(fs::read_to_string(&target).unwrap(), "one\ntwo\n");
}

#[test]
fn test_open_missing_file_reports_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing").join("file");

    let (mut state, output) = app("");
    state.handle_line(&format!("open {}", path_str(&missing)));

    assert_eq!(state.controller.state(), DocumentState::Closed);
    assert!(state.controller.last_directory().is_none());
    let text = output.text();
    assert!(text.contains("Simple Notepad - Error!"));
    assert!(text.contains("Failed to open file"));
}

#[test]
fn test_failed_open_keeps_current_document() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a.txt");
    fs::write(&target, "keep\n").unwrap();
    let missing = dir.path().join("gone.txt");

    let (mut state, _) = app("d\n");
    state.handle_line(&format!("open {}", path_str(&target)));
    state.handle_line("type more");
    state.handle_line(&format!("open {}", path_str(&missing)));

    assert_eq!(state.controller.filename(), Some(path_str(&target).as_str()));
    assert_eq!(state.content.borrow().text(), "keep\nmore\n");
    assert!(state.controller.is_dirty());
}

#[test]
fn test_failed_open_closes_first_when_configured() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a.txt");
    fs::write(&target, "keep\n").unwrap();
    let missing = dir.path().join("gone.txt");
    let settings = AppSettings {
        open_order: OpenOrder::CloseThenLoad,
        ..Default::default()
    };

    let (mut state, _) = app_with(settings, "d\n");
    state.handle_line(&format!("open {}", path_str(&target)));
    state.handle_line("type more");
    state.handle_line(&format!("open {}", path_str(&missing)));

    assert_eq!(state.controller.state(), DocumentState::Closed);
    assert_eq!(state.content.borrow().text(), "");
}

#[test]
fn test_relative_save_name_uses_last_directory() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    fs::write(&first, "x\n").unwrap();

    let (mut state, _) = app("second.txt\n");
    state.handle_line(&format!("open {}", path_str(&first)));
    state.handle_line("saveas");

    let second = dir.path().join("second.txt");
    assert_eq!(fs::read_to_string(&second).unwrap(), "x\n");
    assert_eq!(state.controller.filename(), Some(path_str(&second).as_str()));
}

#[test]
fn test_save_disabled_until_edited() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a.txt");

    let (mut state, output) = app("");
    state.handle_line("close");
    assert!(output.text().contains("not available"));

    state.handle_line("new");
    state.handle_line(&format!("saveas {}", path_str(&target)));
    state.handle_line("save");
    assert!(output.text().matches("not available").count() >= 2);
}

#[test]
fn test_typing_without_document_is_refused() {
    let (mut state, output) = app("");
    state.handle_line("type lost");
    assert_eq!(state.controller.state(), DocumentState::Closed);
    assert!(!state.controller.is_dirty());
    assert!(output.text().contains("No document is open"));
}

#[test]
fn test_input_closed_with_unsaved_changes_stops() {
    let (mut state, _) = app("new\ntype unsaved\n");
    state.run();
    assert!(!state.is_running());
    assert_eq!(state.controller.state(), DocumentState::OpenDirty);
}
