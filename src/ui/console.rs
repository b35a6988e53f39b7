use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Line-oriented terminal shared by the command loop and the dialogs.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

pub type SharedConsole = Rc<RefCell<Console>>;

impl Console {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    pub fn stdio() -> Self {
        Self::new(Box::new(std::io::stdin().lock()), Box::new(std::io::stdout()))
    }

    pub fn shared(self) -> SharedConsole {
        Rc::new(RefCell::new(self))
    }

    /// Next line without its line ending; `None` once input is exhausted.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    pub fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            log::warn!("Failed to write output: {}", e);
        }
    }

    /// Print `prompt` without a newline and read the answer.
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}", prompt).and_then(|_| self.output.flush()) {
            log::warn!("Failed to write output: {}", e);
        }
        self.read_line()
    }
}
