//! Markdown preview panel using egui_commonmark

use eframe::egui;
use egui_commonmark::CommonMarkViewer;

use crate::app::MarkpaneApp;

/// Markdown preview panel
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the preview panel
    pub fn show(ui: &mut egui::Ui, app: &mut MarkpaneApp) {
        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                if app.session.active_document().is_some() || !app.session.content().is_empty() {
                    CommonMarkViewer::new().show(
                        ui,
                        &mut app.commonmark_cache,
                        app.session.content(),
                    );
                } else {
                    Self::show_empty(ui);
                }
            });
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("No document selected");
            ui.label("Open a markdown file to see the preview");
        });
    }
}
