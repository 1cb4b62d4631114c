use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Blocks on file-system notifications for a single file.
///
/// The parent directory is watched rather than the file itself so editors that
/// save by rename-and-replace still trigger a change.
pub struct FileWatcher {
    path: PathBuf,
}

impl FileWatcher {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Calls `on_change` after every modification of the watched file until the
    /// callback returns [`ControlFlow::Break`] or the notifier shuts down.
    ///
    /// # Errors
    ///
    /// Returns an error if file watching cannot be initiated.
    pub fn watch<F>(&self, mut on_change: F) -> Result<()>
    where
        F: FnMut(&Path) -> ControlFlow<()>,
    {
        let (notify_tx, notify_rx) = mpsc::channel();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                let _ = notify_tx.send(event);
            }
        })?;

        let dir = self.watch_dir();
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch directory: {}", dir.display()))?;
        tracing::info!(path = %self.path.display(), "watching for changes");

        for event in notify_rx {
            if !self.is_relevant(&event) {
                continue;
            }
            tracing::debug!(kind = ?event.kind, "watched file changed");
            if on_change(&self.path).is_break() {
                break;
            }
        }

        Ok(())
    }

    fn watch_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn is_relevant(&self, event: &Event) -> bool {
        let kind_matches = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
        let file_name = self.path.file_name();
        kind_matches
            && event
                .paths
                .iter()
                .any(|p| p.file_name().is_some() && p.file_name() == file_name)
    }
}
