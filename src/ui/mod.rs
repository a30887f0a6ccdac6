//! UI components for Markpane

pub mod dialogs;
pub mod editor;
pub mod file_list;
pub mod preview;
