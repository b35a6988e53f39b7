//! Seams between the document controller and the host application.
//!
//! The controller owns the document record; everything it needs from the
//! outside world (editor content, dialogs, menu state) goes through these.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::{Action, Choice, Operation};

/// Editor content the controller can clear, load and write out.
pub trait ContentProvider {
    /// Clear the editable content and disable editing until the next load/new.
    fn reset(&mut self);

    /// Prepare an empty document for New. Editing is enabled again afterwards.
    fn start_empty(&mut self) {
        self.reset();
    }

    /// Replace the content with the file at `path`.
    fn load(&mut self, path: &str) -> Result<(), String>;

    /// Write the current content to `path`.
    fn persist(&mut self, path: &str) -> Result<(), String>;
}

/// Modal questions and notices. Every call blocks until the user answers.
pub trait ConfirmationPrompter {
    /// When `offer_save` is false only Discard and Cancel are presented.
    fn ask_save_discard_cancel(&mut self, message: &str, offer_save: bool) -> Choice;
    fn notify_error(&mut self, message: &str);
    fn notify_warning(&mut self, message: &str);
}

/// File picker dialogs, seeded with the last used directory.
/// `None` means the user dismissed the dialog.
pub trait FileChooser {
    fn choose_open(&mut self, start_dir: Option<&str>) -> Option<String>;
    fn choose_save(&mut self, start_dir: Option<&str>) -> Option<String>;
}

pub trait ActionSink {
    fn set_enabled(&mut self, action: Action, enabled: bool);
}

pub trait RecentsNotifier {
    fn include(&mut self, path: &str);
}

impl<F: FnMut(&str)> RecentsNotifier for F {
    fn include(&mut self, path: &str) {
        self(path)
    }
}

pub type ResetFn = Box<dyn FnMut()>;
pub type PathFn = Box<dyn FnMut(&str) -> Result<(), String>>;

/// The capability set. A `None` entry means the host does not allow that
/// operation; the controller warns and refuses when it is invoked.
#[derive(Default)]
pub struct Callbacks {
    pub new: Option<ResetFn>,
    pub open: Option<PathFn>,
    /// Called with the document's current path.
    pub save: Option<PathFn>,
    pub save_as: Option<PathFn>,
    pub close: Option<ResetFn>,
    /// Invoked after a successful quit; the host terminates here.
    pub exit: Option<ResetFn>,
}

impl Callbacks {
    /// Wire every document capability to one content provider.
    pub fn from_provider<P: ContentProvider + 'static>(provider: Rc<RefCell<P>>) -> Self {
        let new_provider = Rc::clone(&provider);
        let open_provider = Rc::clone(&provider);
        let save_provider = Rc::clone(&provider);
        let save_as_provider = Rc::clone(&provider);
        let close_provider = provider;

        Self {
            new: Some(Box::new(move || new_provider.borrow_mut().start_empty())),
            open: Some(Box::new(move |path| open_provider.borrow_mut().load(path))),
            save: Some(Box::new(move |path| save_provider.borrow_mut().persist(path))),
            save_as: Some(Box::new(move |path| save_as_provider.borrow_mut().persist(path))),
            close: Some(Box::new(move || close_provider.borrow_mut().reset())),
            exit: None,
        }
    }

    /// Drop one capability.
    pub fn without(mut self, operation: Operation) -> Self {
        match operation {
            Operation::New => self.new = None,
            Operation::Open => self.open = None,
            Operation::Save => self.save = None,
            Operation::SaveAs => self.save_as = None,
            Operation::Close => self.close = None,
        }
        self
    }

    pub fn on_exit(mut self, exit: impl FnMut() + 'static) -> Self {
        self.exit = Some(Box::new(exit));
        self
    }

    pub fn has(&self, operation: Operation) -> bool {
        match operation {
            Operation::New => self.new.is_some(),
            Operation::Open => self.open.is_some(),
            Operation::Save => self.save.is_some(),
            Operation::SaveAs => self.save_as.is_some(),
            Operation::Close => self.close.is_some(),
        }
    }
}
