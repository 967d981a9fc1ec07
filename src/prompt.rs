//! Blocking notices, confirmations and the save dialog.
//!
//! Every call returns only after the user dismisses the dialog, so no
//! other action can run while one is open.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::config::DEFAULT_FILE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

pub trait Prompter {
    fn notify(&mut self, notice: Notice);

    fn confirm(&mut self, title: &str, message: &str) -> Confirmation;

    /// `None` when the user closes the dialog without picking a file.
    fn choose_save_path(&mut self) -> Option<PathBuf>;
}

/// Native dialogs through `rfd`.
#[derive(Debug, Default)]
pub struct NativePrompter;

impl Prompter for NativePrompter {
    fn notify(&mut self, notice: Notice) {
        let level = match notice.level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Error => MessageLevel::Error,
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm(&mut self, title: &str, message: &str) -> Confirmation {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::OkCancel)
            .show();
        match result {
            MessageDialogResult::Ok | MessageDialogResult::Yes => Confirmation::Confirmed,
            _ => Confirmation::Cancelled,
        }
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save file")
            .add_filter("Text Files", &["txt"])
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()
    }
}
