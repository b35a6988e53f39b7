use simple_notepad::app::domain::{AppSettings, Message};
use simple_notepad::app::state::AppState;
use simple_notepad::ui::console::Console;

fn main() {
    env_logger::init();

    let settings = AppSettings::load();
    let settings = match settings.validate() {
        Ok(()) => settings,
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            AppSettings::default()
        }
    };

    let mut state = AppState::new(settings, Console::stdio().shared());

    // A file given on the command line is opened like a pick from the recents list.
    if let Some(path) = std::env::args().nth(1) {
        state.handle_message(Message::FileOpenPath(path));
    }

    state.run();
}
