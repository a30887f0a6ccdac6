//! File list panel for the active directory

use eframe::egui;

use crate::app::{display_name, MarkpaneApp};

/// File list panel
pub struct FileListPanel;

impl FileListPanel {
    /// Show the file list panel
    pub fn show(ui: &mut egui::Ui, app: &mut MarkpaneApp) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Files");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+").on_hover_text("New file").clicked() {
                        app.begin_new_file();
                    }
                });
            });

            ui.separator();

            let Some(root) = app.session.active_directory().map(|p| p.to_path_buf()) else {
                ui.label("No directory open");
                ui.add_space(10.0);
                if ui.button("Open Directory...").clicked() {
                    if let Some(path) = rfd::FileDialog::new().pick_folder() {
                        app.open_directory(path);
                    }
                }
                return;
            };

            let mut clicked = None;
            egui::ScrollArea::vertical()
                .id_salt("file_list_scroll")
                .show(ui, |ui| {
                    if app.session.files().is_empty() {
                        ui.label("No markdown files");
                    }

                    for path in app.session.files() {
                        let is_active = app.session.active_document() == Some(path.as_path());
                        let mut label = display_name(path);
                        if is_active && app.session.is_dirty() {
                            label.push('*');
                        }

                        let relative = path.strip_prefix(&root).unwrap_or(path);
                        if ui
                            .selectable_label(is_active, label)
                            .on_hover_text(relative.display().to_string())
                            .clicked()
                        {
                            clicked = Some(path.clone());
                        }
                    }
                });

            if let Some(path) = clicked {
                app.request_document(&path);
            }
        });
    }
}
