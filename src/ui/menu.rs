use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::app::controllers::collaborators::ActionSink;
use crate::app::domain::{Action, Message};

/// What a typed line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    File(Message),
    /// Append a line of text to the document.
    Type(String),
    Clear,
    Show,
    Help,
}

pub const HELP: &str = "\
File:
  new                 start an untitled document
  open [path]         open a file (asks for a path when none is given)
  save                save the document
  saveas [path]       save under another name
  close               close the document
  quit                leave the editor
Edit:
  type <text>         append a line
  clear               empty the document
  show                print the document
  help                this text";

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line.trim_end(), ""),
    };

    let command = match (word, rest.is_empty()) {
        ("new", true) => Command::File(Message::FileNew),
        ("open", true) => Command::File(Message::FileOpen),
        ("open", false) => Command::File(Message::FileOpenPath(rest.to_string())),
        ("save", true) => Command::File(Message::FileSave),
        ("saveas", true) => Command::File(Message::FileSaveAs),
        ("saveas", false) => Command::File(Message::FileSaveAsPath(rest.to_string())),
        ("close", true) => Command::File(Message::FileClose),
        ("quit", true) | ("exit", true) => Command::File(Message::FileQuit),
        // Keep the text exactly as typed after the first space.
        ("type", _) => Command::Type(line.split_once(' ').map(|(_, t)| t).unwrap_or("").to_string()),
        ("clear", true) => Command::Clear,
        ("show", true) => Command::Show,
        ("help", true) | ("?", true) => Command::Help,
        _ => return None,
    };
    Some(command)
}

/// Sensitivity of the document-dependent File commands.
#[derive(Debug, Default)]
pub struct MenuState {
    enabled: HashMap<Action, bool>,
}

impl MenuState {
    pub fn is_enabled(&self, action: Action) -> bool {
        self.enabled.get(&action).copied().unwrap_or(false)
    }

    /// Whether the menu entry behind `message` can be triggered right now.
    pub fn allows(&self, message: &Message) -> bool {
        match message {
            Message::FileSave => self.is_enabled(Action::Save),
            Message::FileSaveAs | Message::FileSaveAsPath(_) => self.is_enabled(Action::SaveAs),
            Message::FileClose => self.is_enabled(Action::Close),
            Message::FileNew
            | Message::FileOpen
            | Message::FileOpenPath(_)
            | Message::FileQuit
            | Message::WindowClose => true,
        }
    }
}

/// Feeds controller action updates into a shared `MenuState`.
pub struct MenuSink(pub Rc<RefCell<MenuState>>);

impl ActionSink for MenuSink {
    fn set_enabled(&mut self, action: Action, enabled: bool) {
        log::trace!("{:?} -> {}", action, enabled);
        self.0.borrow_mut().enabled.insert(action, enabled);
    }
}
