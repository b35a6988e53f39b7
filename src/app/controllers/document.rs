//! Document lifecycle controller.
//!
//! Tracks whether the single open document has unsaved changes and runs the
//! save/discard/cancel negotiation before anything that would throw them away
//! (New, Open, Close, Quit).

use log::{debug, info, warn};

use super::collaborators::{ActionSink, Callbacks, ConfirmationPrompter, FileChooser, RecentsNotifier};
use crate::app::domain::{Action, AppSettings, Choice, Document, DocumentState, Message, OpenOrder, Operation};
use crate::app::error::{AppError, Result};

pub const UNSAVED_CHANGES_MESSAGE: &str =
    "There are unsaved changes.\nDo you want to save them before closing this file?";

/// How a dirty document would be saved if the user picks Save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveStrategy {
    Save,
    SaveAs,
}

pub struct DocumentController {
    document: Document,
    callbacks: Callbacks,
    prompter: Box<dyn ConfirmationPrompter>,
    chooser: Box<dyn FileChooser>,
    actions: Option<Box<dyn ActionSink>>,
    recents: Option<Box<dyn RecentsNotifier>>,
    settings: AppSettings,
}

impl DocumentController {
    pub fn new(
        callbacks: Callbacks,
        prompter: Box<dyn ConfirmationPrompter>,
        chooser: Box<dyn FileChooser>,
        settings: AppSettings,
    ) -> Self {
        Self {
            document: Document::new(),
            callbacks,
            prompter,
            chooser,
            actions: None,
            recents: None,
            settings,
        }
    }

    pub fn with_action_sink(mut self, sink: Box<dyn ActionSink>) -> Self {
        self.actions = Some(sink);
        self
    }

    pub fn with_recents(mut self, recents: Box<dyn RecentsNotifier>) -> Self {
        self.recents = Some(recents);
        self
    }

    // --- Accessors ---

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> DocumentState {
        self.document.state()
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    /// Path of the current file, if it has one.
    pub fn filename(&self) -> Option<&str> {
        self.document.path()
    }

    pub fn last_directory(&self) -> Option<&str> {
        self.document.last_directory()
    }

    pub fn display_name(&self) -> String {
        self.document.display_name(&self.settings.untitled_name)
    }

    /// Window title, e.g. `"*notes.txt - Simple Notepad"`.
    pub fn title(&self) -> String {
        if !self.document.is_open() {
            return self.settings.app_name.clone();
        }
        let prefix = if self.document.is_dirty() { "*" } else { "" };
        format!("{}{} - {}", prefix, self.display_name(), self.settings.app_name)
    }

    // --- Host signals ---

    /// The editor reports that its content changed (or was reverted).
    pub fn file_changed(&mut self, changed: bool) {
        if self.document.set_dirty(changed) {
            self.set_action(Action::Save, changed);
        }
    }

    /// Push the full action state to the sink, e.g. right after the UI is built.
    pub fn update_action_status(&mut self) {
        let open = self.document.is_open();
        let dirty = self.document.is_dirty();
        self.set_action(Action::Save, open && dirty);
        self.set_action(Action::SaveAs, open);
        self.set_action(Action::Close, open);
    }

    pub fn dispatch(&mut self, message: Message) -> Result<()> {
        match message {
            Message::FileNew => self.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileOpenPath(path) => self.open_file(&path),
            Message::FileSave => self.file_save(),
            Message::FileSaveAs => self.file_save_as(),
            Message::FileSaveAsPath(path) => self.save_file_as(&path),
            Message::FileClose => self.file_close(),
            Message::FileQuit | Message::WindowClose => self.file_quit(),
        }
    }

    // --- New ---

    pub fn file_new(&mut self) -> Result<()> {
        self.require(Operation::New)?;
        self.confirm_close()?;

        if let Some(new) = self.callbacks.new.as_mut() {
            new();
        }
        self.document.start_untitled();
        self.set_open_actions(true);
        debug!("new untitled document");
        Ok(())
    }

    // --- Open ---

    /// Ask the user for a file, then open it.
    pub fn file_open(&mut self) -> Result<()> {
        self.require(Operation::Open)?;
        let path = self
            .chooser
            .choose_open(self.document.last_directory())
            .ok_or_else(|| cancelled("open dialog dismissed"))?;
        self.open_file(&path)
    }

    /// Open `path` without a file dialog, e.g. a file picked from a recents list.
    pub fn open_file(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(self.report_io("No file name was given.".to_string()));
        }
        self.require(Operation::Open)?;
        self.confirm_close()?;

        if self.settings.open_order == OpenOrder::CloseThenLoad {
            self.close_document();
        }

        let loaded = match self.callbacks.open.as_mut() {
            Some(open) => open(path),
            None => return Err(AppError::Unsupported(Operation::Open)),
        };
        if let Err(message) = loaded {
            warn!("failed to open {}: {}", path, message);
            return Err(self.report_io(message));
        }

        self.document.bind(path);
        self.set_open_actions(true);
        self.include_in_recents(path);
        info!("opened {}", path);
        Ok(())
    }

    // --- Save ---

    /// Save in place; an untitled document goes through Save As.
    pub fn file_save(&mut self) -> Result<()> {
        if !self.document.is_open() {
            debug!("save ignored: no document open");
            return Ok(());
        }
        if !self.document.is_named() {
            return self.file_save_as();
        }
        self.save_named()
    }

    /// Save a named document without asking anything. Returns whether a save was
    /// attempted; closed and untitled documents are left alone.
    pub fn autosave(&mut self) -> Result<bool> {
        if !self.document.is_named() {
            return Ok(false);
        }
        self.save_named().map(|_| true)
    }

    fn save_named(&mut self) -> Result<()> {
        self.require(Operation::Save)?;
        let Some(path) = self.document.path().map(str::to_string) else {
            return Err(AppError::UserCancelled);
        };

        if self.settings.skip_clean_save && !self.document.is_dirty() {
            debug!("{} is clean, skipping write", path);
            return Ok(());
        }

        let saved = match self.callbacks.save.as_mut() {
            Some(save) => save(&path),
            None => return Err(AppError::Unsupported(Operation::Save)),
        };
        if let Err(message) = saved {
            warn!("failed to save {}: {}", path, message);
            return Err(self.report_io(message));
        }

        self.document.mark_clean();
        self.set_action(Action::Save, false);
        info!("saved {}", path);
        Ok(())
    }

    // --- Save As ---

    /// Ask the user for a destination, then save there.
    pub fn file_save_as(&mut self) -> Result<()> {
        if !self.document.is_open() {
            debug!("save as ignored: no document open");
            return Ok(());
        }
        self.require(Operation::SaveAs)?;
        let path = self
            .chooser
            .choose_save(self.document.last_directory())
            .ok_or_else(|| cancelled("save dialog dismissed"))?;
        self.save_file_as(&path)
    }

    /// Save to `path` and rename the document to it. Saving over the current
    /// file is a plain save.
    pub fn save_file_as(&mut self, path: &str) -> Result<()> {
        if !self.document.is_open() {
            debug!("save as ignored: no document open");
            return Ok(());
        }
        if path.is_empty() {
            return Err(self.report_io("No file name was given.".to_string()));
        }
        if self.document.path() == Some(path) {
            return self.save_named();
        }
        self.require(Operation::SaveAs)?;

        let saved = match self.callbacks.save_as.as_mut() {
            Some(save_as) => save_as(path),
            None => return Err(AppError::Unsupported(Operation::SaveAs)),
        };
        if let Err(message) = saved {
            warn!("failed to save as {}: {}", path, message);
            return Err(self.report_io(message));
        }

        self.document.bind(path);
        self.set_action(Action::Save, false);
        self.include_in_recents(path);
        info!("saved as {}", path);
        Ok(())
    }

    // --- Close / Quit ---

    /// Close the document, asking first if it has unsaved changes.
    /// `Err(UserCancelled)` means the document stays open.
    pub fn file_close(&mut self) -> Result<()> {
        if !self.document.is_open() {
            return Ok(());
        }
        self.require(Operation::Close)?;
        self.confirm_close()?;
        self.close_document();
        Ok(())
    }

    /// Close and then hand over to the host's exit hook. If the close is
    /// cancelled or not permitted the application keeps running.
    pub fn file_quit(&mut self) -> Result<()> {
        self.file_close()?;
        if let Some(exit) = self.callbacks.exit.as_mut() {
            exit();
        }
        info!("quit");
        Ok(())
    }

    fn close_document(&mut self) {
        if !self.document.is_open() {
            return;
        }
        if let Some(close) = self.callbacks.close.as_mut() {
            close();
        }
        self.document.close();
        self.set_open_actions(false);
        debug!("document closed");
    }

    // --- Confirm-close protocol ---

    fn save_strategy(&self) -> Option<SaveStrategy> {
        if self.document.is_named() && self.callbacks.has(Operation::Save) {
            Some(SaveStrategy::Save)
        } else if self.callbacks.has(Operation::SaveAs) {
            Some(SaveStrategy::SaveAs)
        } else {
            None
        }
    }

    /// `Ok(())` means the caller may go ahead and drop the current content.
    fn confirm_close(&mut self) -> Result<()> {
        if !self.document.is_dirty() {
            return Ok(());
        }

        let strategy = self.save_strategy();
        let choice = self
            .prompter
            .ask_save_discard_cancel(UNSAVED_CHANGES_MESSAGE, strategy.is_some());
        debug!("confirm close: {:?} (save strategy {:?})", choice, strategy);

        match (choice, strategy) {
            (Choice::Cancel, _) => Err(cancelled("confirmation cancelled")),
            (Choice::Discard, _) => Ok(()),
            (Choice::Save, Some(SaveStrategy::Save)) => self.save_named(),
            (Choice::Save, Some(SaveStrategy::SaveAs)) => self.file_save_as(),
            // Save was never offered; an answer of Save cannot be honoured.
            (Choice::Save, None) => Err(cancelled("save chosen but not offered")),
        }
    }

    // --- Helpers ---

    fn require(&mut self, operation: Operation) -> Result<()> {
        if self.callbacks.has(operation) {
            return Ok(());
        }
        warn!("{} invoked without capability", operation.describe());
        self.prompter.notify_warning(operation.not_permitted_message());
        Err(AppError::Unsupported(operation))
    }

    fn report_io(&mut self, message: String) -> AppError {
        self.prompter.notify_error(&message);
        AppError::Io(message)
    }

    fn include_in_recents(&mut self, path: &str) {
        if let Some(recents) = self.recents.as_mut() {
            recents.include(path);
        }
    }

    fn set_action(&mut self, action: Action, enabled: bool) {
        if let Some(sink) = self.actions.as_mut() {
            sink.set_enabled(action, enabled);
        }
    }

    fn set_open_actions(&mut self, enabled: bool) {
        self.set_action(Action::Save, enabled);
        self.set_action(Action::SaveAs, enabled);
        self.set_action(Action::Close, enabled);
    }
}

/// The user backed out; nothing is shown for it since they just dismissed a dialog.
fn cancelled(reason: &str) -> AppError {
    debug!("cancelled: {}", reason);
    AppError::UserCancelled
}
