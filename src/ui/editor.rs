//! Plain-text markdown editor panel

use eframe::egui;

use crate::app::MarkpaneApp;

/// Markdown editor panel
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show(ui: &mut egui::Ui, app: &mut MarkpaneApp) {
        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| {
                let response = egui::TextEdit::multiline(&mut app.editor_text)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("Select a markdown file or create a new one...")
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .show(ui);

                // Any change notification marks the session dirty
                if response.response.changed() {
                    app.session.edit(app.editor_text.as_str());
                }
            });
    }
}
