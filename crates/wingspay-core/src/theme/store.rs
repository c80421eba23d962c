//! Theme store: one owned value kept in step with storage and the root marker.
//!
//! ## Synchronization order
//!
//! ```text
//! toggle():  mode = !mode  ──►  root: remove light, remove dark, add mode  ──►  storage[key] = mode
//! sync():                       root: remove light, remove dark, add mode  ──►  storage[key] = mode
//! ```
//!
//! Both steps run synchronously inside one call, so no paint can observe a
//! marker that disagrees with `mode`.

use crate::config::ThemeConfig;
use crate::error::SiteResult;

use super::ThemeMode;

/// Browser capabilities the theme store needs.
///
/// A non-browser environment is modelled by passing no host at all, not by
/// an implementation that returns empty answers.
pub trait ThemeHost {
    /// Raw persisted value under `key`, if any
    fn read_persisted(&self, key: &str) -> SiteResult<Option<String>>;

    fn write_persisted(&self, key: &str, value: &str) -> SiteResult<()>;

    /// `Some(true)` when the OS reports a dark colour scheme, `Some(false)`
    /// for light, `None` when no signal is available
    fn prefers_dark(&self) -> Option<bool>;

    fn remove_root_marker(&self, marker: &str) -> SiteResult<()>;

    fn add_root_marker(&self, marker: &str) -> SiteResult<()>;
}

/// Resolve the theme shown on first paint.
///
/// Persisted value, then OS preference, then `config.fallback`. Without a
/// host nothing is queried.
pub fn resolve_initial_theme<H: ThemeHost>(host: Option<&H>, config: &ThemeConfig) -> ThemeMode {
    let Some(host) = host else {
        return config.fallback;
    };

    match host.read_persisted(&config.storage_key) {
        Ok(Some(saved)) => match ThemeMode::parse(&saved) {
            Some(mode) => return mode,
            None => tracing::debug!(value = %saved, "Ignoring unrecognised persisted theme"),
        },
        Ok(None) => {}
        Err(e) => tracing::debug!("Theme storage unavailable: {}", e),
    }

    match host.prefers_dark() {
        Some(true) => ThemeMode::Dark,
        Some(false) => ThemeMode::Light,
        None => config.fallback,
    }
}

/// Single source of truth for the active theme
pub struct ThemeStore<H: ThemeHost> {
    mode: ThemeMode,
    host: Option<H>,
    config: ThemeConfig,
}

impl<H: ThemeHost> ThemeStore<H> {
    /// Create the store, resolving the initial mode from `host`
    pub fn new(host: Option<H>, config: ThemeConfig) -> Self {
        let mode = resolve_initial_theme(host.as_ref(), &config);
        tracing::info!(%mode, browser = host.is_some(), "Theme resolved");
        Self { mode, host, config }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Flip the mode, then apply the root marker, then persist.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "Theme toggled");
        self.sync();
        self.mode
    }

    /// Re-apply the root marker and persist the current mode.
    ///
    /// Run once after mount so the marker is authoritative even if something
    /// else (a pre-paint script, for instance) touched it first.
    pub fn sync(&self) {
        let Some(host) = self.host.as_ref() else {
            return;
        };

        apply_marker(host, self.mode);

        if let Err(e) = host.write_persisted(&self.config.storage_key, self.mode.as_str()) {
            tracing::debug!("Theme not persisted: {}", e);
        }
    }
}

/// Every step is attempted; one failing removal must not block the add.
fn apply_marker<H: ThemeHost>(host: &H, mode: ThemeMode) {
    for marker in ThemeMode::ALL {
        if let Err(e) = host.remove_root_marker(marker.as_str()) {
            tracing::warn!(marker = marker.as_str(), "Failed to remove theme marker: {}", e);
        }
    }
    if let Err(e) = host.add_root_marker(mode.as_str()) {
        tracing::warn!(marker = mode.as_str(), "Failed to apply theme marker: {}", e);
    }
}
