use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::controllers::collaborators::Callbacks;
use super::controllers::document::DocumentController;
use super::domain::{AppSettings, Message};
use super::error::AppError;
use super::infrastructure::FsContent;
use crate::ui::console::SharedConsole;
use crate::ui::dialogs::TerminalPrompter;
use crate::ui::file_dialogs::TerminalFileChooser;
use crate::ui::menu::{Command, HELP, MenuSink, MenuState, parse_command};

/// Main application coordinator: wires the document controller to the
/// terminal and runs the command loop.
pub struct AppState {
    pub controller: DocumentController,
    pub content: Rc<RefCell<FsContent>>,
    pub menu: Rc<RefCell<MenuState>>,
    console: SharedConsole,
    running: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new(settings: AppSettings, console: SharedConsole) -> Self {
        let content = Rc::new(RefCell::new(FsContent::new()));
        let menu = Rc::new(RefCell::new(MenuState::default()));
        let running = Rc::new(Cell::new(true));

        let exit_flag = Rc::clone(&running);
        let callbacks = Callbacks::from_provider(Rc::clone(&content)).on_exit(move || exit_flag.set(false));

        let recents_console = Rc::clone(&console);
        let controller = DocumentController::new(
            callbacks,
            Box::new(TerminalPrompter::new(Rc::clone(&console), &settings.app_name)),
            Box::new(TerminalFileChooser::new(Rc::clone(&console))),
            settings,
        )
        .with_action_sink(Box::new(MenuSink(Rc::clone(&menu))))
        .with_recents(Box::new(move |path: &str| {
            log::debug!("recent file: {}", path);
            recents_console.borrow_mut().say(&format!("[{}]", path));
        }));

        let mut state = Self {
            controller,
            content,
            menu,
            console,
            running,
        };
        state.controller.update_action_status();
        state
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    fn say(&self, text: &str) {
        self.console.borrow_mut().say(text);
    }

    /// Handle one typed line.
    pub fn handle_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        match parse_command(line) {
            Some(command) => self.handle_command(command),
            None => self.say("Unknown command, type 'help' for a list."),
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::File(message) => self.handle_message(message),
            Command::Type(text) => {
                let typed = self.content.borrow_mut().push_line(&text);
                self.after_edit(typed);
            }
            Command::Clear => {
                let cleared = self.content.borrow_mut().set_text("");
                self.after_edit(cleared);
            }
            Command::Show => {
                let text = self.content.borrow().text().to_string();
                self.say(&text);
            }
            Command::Help => self.say(HELP),
        }
    }

    pub fn handle_message(&mut self, message: Message) {
        // Greyed-out menu entries can't be triggered.
        if !self.menu.borrow().allows(&message) {
            self.say("That command is not available right now.");
            return;
        }
        match self.controller.dispatch(message) {
            Ok(()) => {}
            // Already shown to the user (or chosen by them).
            Err(e) if e.is_recoverable() => log::debug!("file command ended: {}", e),
            Err(e @ AppError::Unsupported(_)) => log::debug!("file command refused: {}", e),
            Err(e) => log::error!("file command failed: {}", e),
        }
    }

    fn after_edit(&mut self, applied: bool) {
        if applied {
            self.controller.file_changed(true);
        } else {
            self.say("No document is open. Use 'new' or 'open' first.");
        }
    }

    /// Run until the user quits or input runs out.
    pub fn run(&mut self) {
        while self.is_running() {
            let prompt = format!("{}> ", self.controller.title());
            let line = self.console.borrow_mut().ask(&prompt);
            match line {
                Some(line) => self.handle_line(&line),
                None => {
                    self.handle_message(Message::WindowClose);
                    if self.is_running() {
                        log::warn!("input closed; leaving with unsaved changes");
                        self.running.set(false);
                    }
                }
            }
        }
    }
}
