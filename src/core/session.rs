//! Session state: the open directory, its documents and the active document
//!
//! The session is a plain value owned by the presentation layer. Every
//! operation runs synchronously and reports its outcome as a `Result`; the
//! only interaction it requests from the caller is the save-before-switch
//! decision, returned as [`LoadRequest::ConfirmSave`] and answered through
//! [`Session::resolve_switch`].

use std::path::{Component, Path, PathBuf};

use super::error::{IoOp, Result, SessionError};
use super::{scanner, store};

/// A switch to another document that is waiting on a save decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchPrompt {
    /// Document with unsaved edits
    pub current: PathBuf,
    /// Document the user asked for
    pub next: PathBuf,
}

/// Result of asking the session to load a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    /// The document is now active
    Loaded,
    /// The active document is dirty; ask the user whether to save it first
    ConfirmSave(SwitchPrompt),
}

/// Result of opening an arbitrary path (command line or "Open File...")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The path was a directory and is now the active directory
    Directory,
    /// The path was a listed document and a load was requested
    Document(LoadRequest),
    /// The parent directory was loaded but the path is not a listed document
    NotListed,
}

#[derive(Debug, Default)]
pub struct Session {
    active_directory: Option<PathBuf>,
    active_document: Option<PathBuf>,
    content: String,
    files: Vec<PathBuf>,
    dirty: bool,
    pending_switch: Option<SwitchPrompt>,
    revision: u64,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_directory(&self) -> Option<&Path> {
        self.active_directory.as_deref()
    }

    pub fn active_document(&self) -> Option<&Path> {
        self.active_document.as_deref()
    }

    /// In-memory content of the editor
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Documents discovered by the last successful directory load
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pending_switch(&self) -> Option<&SwitchPrompt> {
        self.pending_switch.as_ref()
    }

    /// Bumped whenever the content is replaced from disk
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Look up a document in the current file list
    pub fn find_document(&self, path: &Path) -> Option<&Path> {
        self.files
            .iter()
            .map(PathBuf::as_path)
            .find(|candidate| *candidate == path)
    }

    /// Scan `dir` and make it the active directory.
    ///
    /// The active document and dirty flag are untouched. On failure nothing
    /// changes.
    pub fn load_directory(&mut self, dir: &Path) -> Result<&[PathBuf]> {
        let dir = std::path::absolute(dir).map_err(|e| SessionError::io(IoOp::Scan, dir, e))?;
        let files = scanner::scan(&dir)?;

        tracing::info!("Loaded directory {} ({} documents)", dir.display(), files.len());
        self.files = files;
        self.active_directory = Some(dir);
        Ok(&self.files)
    }

    /// Ask to make `path` the active document.
    ///
    /// With unsaved edits the load is deferred and a [`SwitchPrompt`] is
    /// returned; a previously pending prompt is replaced.
    pub fn request_load_document(&mut self, path: &Path) -> Result<LoadRequest> {
        if self.dirty {
            if let Some(current) = self.active_document.clone() {
                let prompt = SwitchPrompt {
                    current,
                    next: path.to_path_buf(),
                };
                tracing::debug!(
                    "Deferring switch from {} to {}: unsaved changes",
                    prompt.current.display(),
                    prompt.next.display()
                );
                self.pending_switch = Some(prompt.clone());
                return Ok(LoadRequest::ConfirmSave(prompt));
            }
        }

        self.do_load(path)?;
        Ok(LoadRequest::Loaded)
    }

    /// Answer the pending save prompt.
    ///
    /// `save == true` writes the current document before switching,
    /// `save == false` discards the edits. The next document is loaded
    /// either way; a failed save is still reported after the load.
    pub fn resolve_switch(&mut self, save: bool) -> Result<()> {
        let prompt = self
            .pending_switch
            .take()
            .ok_or(SessionError::NoPendingSwitch)?;

        let saved = if save {
            self.save()
        } else {
            tracing::info!("Discarding unsaved changes to {}", prompt.current.display());
            Ok(())
        };
        if let Err(e) = &saved {
            tracing::warn!("Switching to {} despite failed save: {}", prompt.next.display(), e);
        }

        let loaded = self.do_load(&prompt.next);
        saved.and(loaded)
    }

    /// Drop a pending prompt without switching
    pub fn cancel_switch(&mut self) {
        if let Some(prompt) = self.pending_switch.take() {
            tracing::debug!("Cancelled switch to {}", prompt.next.display());
        }
    }

    fn do_load(&mut self, path: &Path) -> Result<()> {
        let content = store::read(path)?;

        tracing::info!("Opened document: {}", path.display());
        self.active_document = Some(path.to_path_buf());
        self.content = content;
        self.dirty = false;
        self.revision += 1;
        Ok(())
    }

    /// Replace the in-memory content. Always marks the session dirty, even
    /// when the new text equals what is on disk.
    pub fn edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.dirty = true;
    }

    /// Write the in-memory content to the active document
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .active_document
            .as_deref()
            .ok_or(SessionError::NoActiveDocument)?;

        store::write(path, &self.content)?;
        self.dirty = false;
        Ok(())
    }

    /// Create a document named `name` in the active directory and rescan it.
    ///
    /// `.md` is appended unless the name already carries a markdown suffix.
    /// The name must be a single plain file name. The new document is not
    /// made active; the returned path can be passed to
    /// [`Session::request_load_document`].
    pub fn create_document(&mut self, name: &str) -> Result<PathBuf> {
        let dir = self
            .active_directory
            .clone()
            .ok_or(SessionError::NoActiveDirectory)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if !is_plain_file_name(name) {
            return Err(SessionError::InvalidName(name.to_string()));
        }
        let file_name = if scanner::is_markdown_file(name) {
            name.to_string()
        } else {
            format!("{name}.md")
        };

        let path = dir.join(file_name);
        store::create(&path)?;
        self.load_directory(&dir)?;
        Ok(path)
    }

    /// Open a path given on the command line or picked in a file dialog.
    ///
    /// A directory becomes the active directory. A file makes its parent the
    /// active directory and, when it is listed there, is requested as the
    /// active document.
    pub fn open_path(&mut self, path: &Path) -> Result<OpenOutcome> {
        let metadata =
            std::fs::metadata(path).map_err(|e| SessionError::io(IoOp::Inspect, path, e))?;

        if metadata.is_dir() {
            self.load_directory(path)?;
            return Ok(OpenOutcome::Directory);
        }

        let path = std::path::absolute(path).map_err(|e| SessionError::io(IoOp::Inspect, path, e))?;
        let parent = path.parent().unwrap_or(Path::new("/"));
        self.load_directory(parent)?;

        match self.find_document(&path).map(Path::to_path_buf) {
            Some(found) => self.request_load_document(&found).map(OpenOutcome::Document),
            None => {
                tracing::debug!("{} is not a listed document", path.display());
                Ok(OpenOutcome::NotListed)
            }
        }
    }
}

/// True when `name` names an entry directly inside a directory
fn is_plain_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
