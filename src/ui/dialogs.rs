//! Modal-style dialogs: unsaved changes prompt, new file form, message box

use eframe::egui;

use crate::app::display_name;
use crate::core::SwitchPrompt;

/// Answer to the unsaved changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDecision {
    Save,
    Discard,
    /// Window closed without answering
    Cancel,
}

fn centered<'a>(title: &str) -> egui::Window<'a> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Ask whether to save the current document before switching
pub fn confirm_switch(ctx: &egui::Context, prompt: &SwitchPrompt) -> Option<SwitchDecision> {
    let mut decision = None;
    let mut open = true;

    centered("Unsaved Changes").open(&mut open).show(ctx, |ui| {
        ui.label(format!(
            "You have unsaved changes in {}. Do you want to save before opening {}?",
            display_name(&prompt.current),
            display_name(&prompt.next),
        ));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                decision = Some(SwitchDecision::Save);
            }
            if ui.button("No").clicked() {
                decision = Some(SwitchDecision::Discard);
            }
        });
    });

    if !open {
        return Some(SwitchDecision::Cancel);
    }
    decision
}

/// Dialog for creating a new file
#[derive(Debug, Default)]
pub struct NewFileDialog {
    pub visible: bool,
    pub file_name: String,
}

impl NewFileDialog {
    pub fn open(&mut self) {
        self.visible = true;
        self.file_name.clear();
    }

    /// Returns the entered name once "Create" is pressed
    pub fn show(&mut self, ctx: &egui::Context) -> Option<String> {
        if !self.visible {
            return None;
        }

        let mut result = None;
        centered("New File").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Filename:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.file_name)
                        .hint_text("filename (without .md extension)"),
                );
            });

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    self.visible = false;
                }
                if ui.button("Create").clicked() {
                    // An empty name closes the form without creating anything
                    if !self.file_name.trim().is_empty() {
                        result = Some(self.file_name.clone());
                    }
                    self.visible = false;
                }
            });
        });

        if !self.visible {
            self.file_name.clear();
        }
        result
    }
}

/// Informational or error message shown until dismissed
#[derive(Debug, Clone)]
pub struct MessageBox {
    pub title: String,
    pub body: String,
}

impl MessageBox {
    pub fn error(body: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns true once the user dismisses the message
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let mut dismissed = false;

        centered(&self.title).open(&mut open).show(ctx, |ui| {
            ui.label(&self.body);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        dismissed || !open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_dialog_open_resets_name() {
        let mut dialog = NewFileDialog {
            visible: false,
            file_name: "stale".to_string(),
        };
        dialog.open();
        assert!(dialog.visible);
        assert!(dialog.file_name.is_empty());
    }

    #[test]
    fn test_message_box_constructors() {
        let err = MessageBox::error("boom");
        assert_eq!(err.title, "Error");
        assert_eq!(err.body, "boom");

        let info = MessageBox::info("Saved", "File saved: a.md");
        assert_eq!(info.title, "Saved");
    }
}
