//! Watch command: republish on source or template changes.

use anyhow::{Context, Result};
use notify::event::ModifyKind;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use quill_core::Config;
use std::path::Path;
use std::sync::mpsc;

/// Publish once, then keep republishing whenever a watched directory
/// reports a content write.
///
/// All watched directories share one recursive subscription, and events
/// drain on the calling thread, so rebuilds are serialized by
/// construction: a burst of events during a rebuild queues in the channel
/// instead of overlapping with it. The loop runs until the process is
/// killed.
pub fn watch_site(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;

    // A fatal first run (missing destination, broken templates) aborts
    // here; later runs only log.
    super::build::publish(&config)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = tx.send(res);
        },
        notify::Config::default(),
    )
    .context("Failed to initialize watcher")?;

    let mut watched = config.posts_dirs();
    watched.push(config.templates_dir());

    for dir in &watched {
        watcher
            .watch(dir, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {:?}", dir))?;
    }

    tracing::info!("Listening for changes in {} directories...", watched.len());

    for event in rx {
        match event {
            Ok(event) if is_content_write(&event.kind) => {
                tracing::info!("Change detected, republishing");
                if let Err(err) = super::build::publish(&config) {
                    tracing::error!("Republish failed: {:#}", err);
                }
            }
            Ok(_) => {}
            Err(err) => tracing::warn!("Watcher error: {}", err),
        }
    }

    Ok(())
}

/// Only events that can change generated output trigger a republish;
/// metadata-only and access events are ignored.
fn is_content_write(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_)
            | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Any)
    )
}
