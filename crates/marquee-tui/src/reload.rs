//! Background reload of the items file
//!
//! The file is polled by modification time; a change is re-read and parsed
//! off the render loop and handed over as a [`ReloadResult`].

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use marquee_core::content::{parse_items, ItemsFormat};
use marquee_core::TickerItem;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::event::ReloadResult;

/// Watches one items file by modification time
#[derive(Debug)]
pub struct ReloadWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl ReloadWatcher {
    /// The file's current contents count as already loaded
    pub async fn new(path: PathBuf) -> Self {
        let last_modified = modified_time(&path).await;
        Self {
            path,
            last_modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file if it changed since the last poll
    ///
    /// A missing file is not a change; the previous items stay.
    pub async fn poll(&mut self) -> Option<ReloadResult> {
        let modified = modified_time(&self.path).await;
        if modified.is_none() || modified == self.last_modified {
            return None;
        }
        self.last_modified = modified;
        debug!(path = %self.path.display(), "items file changed");

        let path = self.path.clone();
        Some(match read_items(&path).await {
            Ok(items) => ReloadResult::Loaded { path, items },
            Err(e) => ReloadResult::Failure {
                path,
                error: e.to_string(),
            },
        })
    }
}

/// Poll `watcher` every `every` and send results until the receiver is gone
pub fn spawn_reloader(
    mut watcher: ReloadWatcher,
    every: Duration,
    tx: mpsc::UnboundedSender<ReloadResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            if let Some(result) = watcher.poll().await {
                if tx.send(result).is_err() {
                    // UI is gone
                    break;
                }
            }
        }
    })
}

async fn read_items(path: &Path) -> marquee_core::Result<Vec<TickerItem>> {
    let format = ItemsFormat::for_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;
    parse_items(&content, format)
}

async fn modified_time(path: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(path).await.ok()?.modified().ok()
}
