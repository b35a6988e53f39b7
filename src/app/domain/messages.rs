/// All file commands the host can send to the document controller.
/// Each menu entry (or typed command) maps to one of these; the dispatch
/// loop in main hands them to `DocumentController::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FileNew,
    FileOpen,
    /// Open a known path without asking, e.g. picked from a recents list.
    FileOpenPath(String),
    FileSave,
    FileSaveAs,
    /// Save under a known path without asking.
    FileSaveAsPath(String),
    FileClose,
    FileQuit,
    WindowClose,
}

/// Document operations that may be left out of a controller's capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    New,
    Open,
    Save,
    SaveAs,
    Close,
}

impl Operation {
    pub fn describe(self) -> &'static str {
        match self {
            Operation::New => "New",
            Operation::Open => "Open",
            Operation::Save => "Save",
            Operation::SaveAs => "Save As",
            Operation::Close => "Close",
        }
    }

    /// Warning shown when the operation is invoked without its capability.
    pub fn not_permitted_message(self) -> &'static str {
        match self {
            Operation::New => "You aren't allowed to create a new file.",
            Operation::Open => "You aren't allowed to open a file.",
            Operation::Save => "You aren't allowed to save a file.",
            Operation::SaveAs => "You aren't allowed to save as another file.",
            Operation::Close => "You aren't allowed to close the file.",
        }
    }
}

/// UI commands whose sensitivity follows the document state.
/// New and Open are always available, so they are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Save,
    SaveAs,
    Close,
}

/// Answer to the save/discard/cancel question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Save,
    Discard,
    Cancel,
}
