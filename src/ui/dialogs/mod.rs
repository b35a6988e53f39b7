//! Modal questions and notices on the terminal.

use crate::app::controllers::collaborators::ConfirmationPrompter;
use crate::app::domain::Choice;
use crate::ui::console::SharedConsole;

pub struct TerminalPrompter {
    console: SharedConsole,
    app_name: String,
}

impl TerminalPrompter {
    pub fn new(console: SharedConsole, app_name: &str) -> Self {
        Self {
            console,
            app_name: app_name.to_string(),
        }
    }
}

/// Interpret an answer to the save/discard/cancel question.
/// Save is not accepted when it was not offered.
pub fn parse_choice(answer: &str, offer_save: bool) -> Option<Choice> {
    match answer.trim().to_lowercase().as_str() {
        "s" | "save" | "y" | "yes" if offer_save => Some(Choice::Save),
        "d" | "discard" | "n" | "no" => Some(Choice::Discard),
        "c" | "cancel" => Some(Choice::Cancel),
        _ => None,
    }
}

impl ConfirmationPrompter for TerminalPrompter {
    fn ask_save_discard_cancel(&mut self, message: &str, offer_save: bool) -> Choice {
        let options = if offer_save {
            "[s]ave, [d]iscard, [c]ancel: "
        } else {
            "[d]iscard, [c]ancel: "
        };
        let mut console = self.console.borrow_mut();
        console.say(message);
        loop {
            // Closed input can't answer; keep the document.
            let Some(answer) = console.ask(options) else {
                return Choice::Cancel;
            };
            if let Some(choice) = parse_choice(&answer, offer_save) {
                return choice;
            }
        }
    }

    fn notify_error(&mut self, message: &str) {
        let mut console = self.console.borrow_mut();
        console.say(&format!("{} - Error!", self.app_name));
        console.say(message);
    }

    fn notify_warning(&mut self, message: &str) {
        let mut console = self.console.borrow_mut();
        console.say(&format!("{} - Warning!", self.app_name));
        console.say(message);
    }
}
