//! Main application state and UI coordination

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::config::AppConfig;
use crate::core::{LoadRequest, OpenOutcome, Session, SessionError};
use crate::ui::dialogs::{self, MessageBox, NewFileDialog, SwitchDecision};
use crate::ui::{editor::EditorPanel, file_list::FileListPanel, preview::PreviewPanel};

/// Base window title
pub const WINDOW_TITLE: &str = "Markdown Viewer/Editor";

/// Main application state
pub struct MarkpaneApp {
    /// Directory, file list and active document
    pub session: Session,
    /// Message box currently shown, if any
    pub message: Option<MessageBox>,
    /// "New File" form
    pub new_file_dialog: NewFileDialog,
    /// Commonmark cache for preview
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
    /// Text shown in the editor pane
    pub editor_text: String,
    /// Session revision the editor text was copied from
    editor_revision: u64,
    /// Title last sent to the viewport
    title: String,
}

impl MarkpaneApp {
    /// Create the application, opening the configured start path if any
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self {
            session: Session::new(),
            message: None,
            new_file_dialog: NewFileDialog::default(),
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
            editor_text: String::new(),
            editor_revision: 0,
            title: WINDOW_TITLE.to_string(),
        };

        if let Some(path) = config.initial_path {
            match app.session.open_path(&path) {
                Ok(OpenOutcome::Directory) => app.select_first_document(),
                Ok(_) => {}
                Err(e) => tracing::warn!("Ignoring start path: {}", e),
            }
        }

        app.sync_editor();
        app
    }

    /// Refresh the editor text after the session loaded a document
    pub fn sync_editor(&mut self) {
        if self.session.revision() != self.editor_revision {
            self.editor_text = self.session.content().to_string();
            self.editor_revision = self.session.revision();
        }
    }

    /// Open a directory chosen by the user and show its first document
    pub fn open_directory(&mut self, path: PathBuf) {
        match self.session.load_directory(&path) {
            Ok(_) => self.select_first_document(),
            Err(e) => self.report(e),
        }
    }

    /// Open a file chosen by the user along with its directory
    pub fn open_file(&mut self, path: PathBuf) {
        match self.session.open_path(&path) {
            Ok(OpenOutcome::Directory) => self.select_first_document(),
            Ok(OpenOutcome::NotListed) => self.report_info(
                "Not a Markdown File",
                format!("{} is not a markdown document", display_name(&path)),
            ),
            Ok(OpenOutcome::Document(_)) => {}
            Err(e) => self.report(e),
        }
    }

    fn select_first_document(&mut self) {
        if let Some(first) = self.session.files().first().cloned() {
            self.request_document(&first);
        }
    }

    /// Switch to another document, possibly via the unsaved changes prompt
    pub fn request_document(&mut self, path: &Path) {
        match self.session.request_load_document(path) {
            Ok(LoadRequest::Loaded) => {}
            Ok(LoadRequest::ConfirmSave(prompt)) => {
                tracing::debug!("Asking to save {}", prompt.current.display());
            }
            Err(e) => self.report(e),
        }
    }

    fn resolve_switch(&mut self, decision: SwitchDecision) {
        let result = match decision {
            SwitchDecision::Save => self.session.resolve_switch(true),
            SwitchDecision::Discard => self.session.resolve_switch(false),
            SwitchDecision::Cancel => {
                self.session.cancel_switch();
                Ok(())
            }
        };
        if let Err(e) = result {
            self.report(e);
        }
    }

    /// Save the active document
    pub fn save_active_document(&mut self) {
        match self.session.save() {
            Ok(()) => {
                let name = self
                    .session
                    .active_document()
                    .map(display_name)
                    .unwrap_or_default();
                self.report_info("Saved", format!("File saved: {name}"));
            }
            Err(SessionError::NoActiveDocument) => {
                self.report_info("No File", "Please open or create a file first");
            }
            Err(e) => self.report(e),
        }
    }

    /// Show the "New File" form, which needs an open directory
    pub fn begin_new_file(&mut self) {
        if self.session.active_directory().is_none() {
            self.report(SessionError::NoActiveDirectory);
            return;
        }
        self.new_file_dialog.open();
    }

    fn create_document(&mut self, name: &str) {
        match self.session.create_document(name) {
            Ok(path) => {
                // Only documents present in the refreshed list become active
                if let Some(listed) = self.session.find_document(&path).map(Path::to_path_buf) {
                    self.request_document(&listed);
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: SessionError) {
        tracing::error!("{}", error);
        self.message = Some(MessageBox::error(error.to_string()));
    }

    fn report_info(&mut self, title: &str, body: impl Into<String>) {
        self.message = Some(MessageBox::info(title, body));
    }

    /// Window title for the current session state
    pub fn window_title(&self) -> String {
        match self.session.active_document() {
            Some(path) => {
                let marker = if self.session.is_dirty() { "*" } else { "" };
                format!("{WINDOW_TITLE} - {}{marker}", display_name(path))
            }
            None => WINDOW_TITLE.to_string(),
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.window_title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open File...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Markdown", &["md", "markdown"])
                            .pick_file()
                        {
                            self.open_file(path);
                        }
                        ui.close();
                    }
                    if ui.button("Open Directory...").clicked() {
                        if let Some(path) = rfd::FileDialog::new().pick_folder() {
                            self.open_directory(path);
                        }
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("New File...").clicked() {
                        self.begin_new_file();
                        ui.close();
                    }
                    if ui.button("Save").clicked() {
                        self.save_active_document();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(prompt) = self.session.pending_switch().cloned() {
            if let Some(decision) = dialogs::confirm_switch(ctx, &prompt) {
                self.resolve_switch(decision);
            }
        }

        if let Some(name) = self.new_file_dialog.show(ctx) {
            self.create_document(&name);
        }

        if let Some(message) = &self.message {
            if message.show(ctx) {
                self.message = None;
            }
        }
    }
}

impl eframe::App for MarkpaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_editor();
        self.render_menu_bar(ctx);

        egui::SidePanel::left("file_list")
            .resizable(true)
            .default_width(240.0)
            .min_width(150.0)
            .show(ctx, |ui| {
                FileListPanel::show(ui, self);
            });

        // Editor on the left, preview on the right
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                EditorPanel::show(&mut columns[0], self);
                PreviewPanel::show(&mut columns[1], self);
            });
        });

        self.render_dialogs(ctx);
        self.sync_title(ctx);
    }
}

/// File name of a document for titles and lists
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/notes/todo.md")), "todo.md");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_start_directory_selects_first_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        fs::write(dir.path().join("b.md"), "beta").unwrap();

        let app = MarkpaneApp::new(AppConfig {
            initial_path: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        });
        assert_eq!(app.session.content(), "alpha");
        assert_eq!(app.window_title(), "Markdown Viewer/Editor - a.md");
    }

    #[test]
    fn test_start_path_missing_is_ignored() {
        let app = MarkpaneApp::new(AppConfig {
            initial_path: Some(PathBuf::from("/nonexistent/notes.md")),
            ..AppConfig::default()
        });
        assert!(app.session.active_directory().is_none());
        assert!(app.message.is_none());
        assert_eq!(app.window_title(), WINDOW_TITLE);
    }

    #[test]
    fn test_save_without_document_shows_info() {
        let mut app = MarkpaneApp::new(AppConfig::default());
        app.save_active_document();

        let message = app.message.expect("message shown");
        assert_eq!(message.title, "No File");
    }

    #[test]
    fn test_new_file_requires_directory() {
        let mut app = MarkpaneApp::new(AppConfig::default());
        app.begin_new_file();

        assert!(!app.new_file_dialog.visible);
        assert_eq!(app.message.expect("message shown").title, "Error");
    }

    #[test]
    fn test_created_document_becomes_active() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = MarkpaneApp::new(AppConfig::default());
        app.open_directory(dir.path().to_path_buf());

        app.create_document("todo");
        assert_eq!(
            app.session.active_document(),
            Some(dir.path().join("todo.md").as_path())
        );
        assert_eq!(app.window_title(), "Markdown Viewer/Editor - todo.md");
    }

    #[test]
    fn test_created_document_with_path_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let mut app = MarkpaneApp::new(AppConfig::default());
        app.open_directory(dir.path().to_path_buf());

        let name = elsewhere.path().join("escaped");
        app.create_document(name.to_str().unwrap());
        assert!(app.session.active_document().is_none());
        assert!(!elsewhere.path().join("escaped.md").exists());
        assert_eq!(app.message.expect("message shown").title, "Error");
    }

    #[test]
    fn test_editor_text_follows_loads() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        fs::write(dir.path().join("b.md"), "beta").unwrap();
        let mut app = MarkpaneApp::new(AppConfig {
            initial_path: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        });
        assert_eq!(app.editor_text, "alpha");

        // Typing goes through the editor buffer, not a reload
        app.editor_text.push('!');
        app.session.edit(app.editor_text.clone());
        app.sync_editor();
        assert_eq!(app.editor_text, "alpha!");

        app.request_document(&dir.path().join("b.md"));
        app.resolve_switch(SwitchDecision::Discard);
        app.sync_editor();
        assert_eq!(app.editor_text, "beta");
    }

    #[test]
    fn test_dirty_title_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        let mut app = MarkpaneApp::new(AppConfig::default());
        app.open_directory(dir.path().to_path_buf());

        app.session.edit("alpha!");
        assert_eq!(app.window_title(), "Markdown Viewer/Editor - a.md*");
    }
}
