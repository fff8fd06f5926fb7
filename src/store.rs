//! Published configuration and reload on change.
//!
//! A load builds the whole tree before it replaces the published
//! configuration. Readers hold an `Arc` to an immutable tree,
//! so a failed or in-flight reload never affects them.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::menu::RadialMenuConfiguration;
use crate::parse::{ParseWarning, parse_report};

/// Contents of a configuration file and its modification time.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub contents: String,
    pub modified: Option<DateTime<Utc>>,
}

/// Where configuration text comes from.
pub trait ConfigSource: Send + Sync {
    fn read(&self, path: &Path) -> Result<SourceFile>;

    fn modified(&self, path: &Path) -> Result<Option<DateTime<Utc>>>;
}

/// Reads configuration files from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl ConfigSource for FsSource {
    fn read(&self, path: &Path) -> Result<SourceFile> {
        let contents = std::fs::read_to_string(path)?;
        Ok(SourceFile {
            contents,
            modified: self.modified(path)?,
        })
    }

    fn modified(&self, path: &Path) -> Result<Option<DateTime<Utc>>> {
        let metadata = std::fs::metadata(path)?;
        Ok(metadata.modified().ok().map(DateTime::<Utc>::from))
    }
}

/// Read a configuration file without blocking the async runtime.
pub async fn read_source_async(path: &Path) -> Result<SourceFile> {
    let contents = tokio::fs::read_to_string(path).await?;
    let metadata = tokio::fs::metadata(path).await?;
    Ok(SourceFile {
        contents,
        modified: metadata.modified().ok().map(DateTime::<Utc>::from),
    })
}

pub(crate) fn filename_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned()
}

/// Holds the currently published configuration.
pub struct ConfigurationStore<S = FsSource> {
    source: S,
    current: RwLock<Option<Arc<RadialMenuConfiguration>>>,
}

impl Default for ConfigurationStore<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationStore<FsSource> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl<S: ConfigSource> ConfigurationStore<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            current: RwLock::new(None),
        }
    }

    /// The published configuration, if any.
    pub fn current(&self) -> Option<Arc<RadialMenuConfiguration>> {
        self.current.read().clone()
    }

    /// Replace the published configuration.
    pub fn publish(&self, config: RadialMenuConfiguration) -> Arc<RadialMenuConfiguration> {
        let config = Arc::new(config);
        *self.current.write() = Some(Arc::clone(&config));
        info!(
            format = %config.format,
            items = config.actions.len(),
            "published menu configuration"
        );
        config
    }

    /// Drop the published configuration.
    pub fn clear(&self) {
        *self.current.write() = None;
    }

    /// Parse already-read text for `path` and publish it.
    ///
    /// On error the previously published configuration is kept.
    pub fn apply(&self, path: &Path, source: &SourceFile) -> Result<Arc<RadialMenuConfiguration>> {
        let report = parse_report(&filename_of(path), &source.contents).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "configuration rejected; keeping previous");
        })?;
        log_warnings(path, &report.warnings);
        Ok(self.publish(report.configuration))
    }

    /// Read the configuration at `path` and publish it.
    pub fn load(&self, path: &Path) -> Result<Arc<RadialMenuConfiguration>> {
        let source = self.source.read(path)?;
        self.apply(path, &source)
    }

    /// Async variant of [`load`](Self::load) reading through `tokio::fs`.
    pub async fn load_async(&self, path: &Path) -> Result<Arc<RadialMenuConfiguration>> {
        let source = read_source_async(path).await?;
        self.apply(path, &source)
    }

    /// Whether `path` changed after the published configuration was built.
    ///
    /// Nothing published, or a source without a modification time, counts
    /// as stale.
    pub fn is_stale(&self, path: &Path) -> Result<bool> {
        let Some(current) = self.current() else {
            return Ok(true);
        };
        let stale = self
            .source
            .modified(path)?
            .is_none_or(|modified| modified > current.updated_at);
        debug!(path = %path.display(), stale, "checked configuration freshness");
        Ok(stale)
    }

    /// Reload `path` if it is stale. Returns the new configuration, if any.
    pub fn reload_if_stale(&self, path: &Path) -> Result<Option<Arc<RadialMenuConfiguration>>> {
        if self.is_stale(path)? {
            self.load(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn log_warnings(path: &Path, warnings: &[ParseWarning]) {
    if !warnings.is_empty() {
        debug!(path = %path.display(), count = warnings.len(), "configuration parsed with warnings");
    }
}
