//! Terminal front end: the host side of the controller's collaborator traits.

pub mod console;
pub mod dialogs;
pub mod file_dialogs;
pub mod menu;
