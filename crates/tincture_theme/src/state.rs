//! Theme provider state
//!
//! The active theme is held as an `Arc<Theme>` behind a lock and replaced
//! wholesale on every change. Readers clone the `Arc`, so a reader never
//! observes a half-applied switch. Listeners are notified after the swap,
//! outside of any lock.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::theme::{ColorScheme, Theme, ThemeBundle};

/// Global provider instance
static THEME_PROVIDER: OnceLock<ThemeProvider> = OnceLock::new();

/// How the active theme is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the platform color scheme
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Scheme this mode selects, given the current platform scheme
    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeMode::System => system,
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
        }
    }
}

/// Notification sent to subscribers
#[derive(Clone, Debug)]
pub enum ThemeEvent {
    /// The active theme reference was replaced
    ThemeChanged(Arc<Theme>),
    /// `change_mode` was called
    ModeChanged(ThemeMode),
}

/// Handle returned by [`ThemeProvider::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&ThemeEvent) + Send + Sync>;

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Owner of the active theme and mode
pub struct ThemeProvider {
    /// Default light/dark pair used by mode switches
    bundle: ThemeBundle,

    theme: RwLock<Arc<Theme>>,
    mode: RwLock<ThemeMode>,
    system_scheme: RwLock<ColorScheme>,

    /// Keep the current theme when the mode changes
    disable_default_theme_on_mode_change: bool,

    listeners: RwLock<FxHashMap<ListenerId, Listener>>,
    next_listener: AtomicU64,
}

impl ThemeProvider {
    /// Create a provider in `System` mode following `system_scheme`
    pub fn new(bundle: ThemeBundle, system_scheme: ColorScheme) -> Self {
        let theme = bundle.for_scheme(system_scheme);
        Self {
            bundle,
            theme: RwLock::new(theme),
            mode: RwLock::new(ThemeMode::System),
            system_scheme: RwLock::new(system_scheme),
            disable_default_theme_on_mode_change: false,
            listeners: RwLock::new(FxHashMap::default()),
            next_listener: AtomicU64::new(0),
        }
    }

    /// Keep explicitly chosen themes across `Light`/`Dark` mode switches
    pub fn disable_default_theme_on_mode_change(mut self, disable: bool) -> Self {
        self.disable_default_theme_on_mode_change = disable;
        self
    }

    /// Install `provider` as the global instance
    ///
    /// The first call wins. Returns false, and drops `provider`, when a
    /// global provider is already installed.
    pub fn init(provider: ThemeProvider) -> bool {
        match THEME_PROVIDER.set(provider) {
            Ok(()) => true,
            Err(rejected) => {
                tracing::warn!(
                    rejected = %rejected.theme().id,
                    "ThemeProvider::init called twice; keeping the existing provider"
                );
                false
            }
        }
    }

    /// Install the base preset following a dark platform scheme
    pub fn init_default() -> bool {
        Self::init(Self::default())
    }

    /// Get the global provider, installing the default one if needed
    pub fn get() -> &'static ThemeProvider {
        THEME_PROVIDER.get_or_init(Self::default)
    }

    /// Try to get the global provider (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeProvider> {
        THEME_PROVIDER.get()
    }

    // ========== Reads ==========

    /// Current theme
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&read(&self.theme))
    }

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        *read(&self.mode)
    }

    /// Last reported platform scheme
    pub fn system_scheme(&self) -> ColorScheme {
        *read(&self.system_scheme)
    }

    /// Whether the platform currently prefers a dark scheme
    pub fn prefers_dark(&self) -> bool {
        self.system_scheme().is_dark()
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    // ========== Changes ==========

    /// Replace the active theme
    pub fn change_theme(&self, theme: impl Into<Arc<Theme>>) {
        let theme = theme.into();
        tracing::debug!(id = %theme.id, "ThemeProvider::change_theme");
        self.swap_theme(theme);
    }

    /// Switch mode
    ///
    /// Unless default themes are disabled, the bundle theme for the new mode
    /// becomes active. `System` always tracks the platform scheme.
    pub fn change_mode(&self, mode: ThemeMode) {
        let previous = std::mem::replace(&mut *write(&self.mode), mode);
        tracing::debug!(?previous, ?mode, "ThemeProvider::change_mode");

        if mode == ThemeMode::System || !self.disable_default_theme_on_mode_change {
            let scheme = mode.resolve(self.system_scheme());
            self.swap_theme(self.bundle.for_scheme(scheme));
        }

        self.notify(&ThemeEvent::ModeChanged(mode));
    }

    /// Report a platform color scheme change
    pub fn set_system_scheme(&self, scheme: ColorScheme) {
        let previous = std::mem::replace(&mut *write(&self.system_scheme), scheme);
        if previous == scheme {
            return;
        }
        tracing::debug!(?previous, ?scheme, "ThemeProvider::set_system_scheme");

        if self.mode() == ThemeMode::System {
            self.swap_theme(self.bundle.for_scheme(scheme));
        }
    }

    // ========== Listeners ==========

    /// Register a change listener
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ThemeEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        write(&self.listeners).insert(id, Arc::new(listener));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        write(&self.listeners).remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        read(&self.listeners).len()
    }

    fn swap_theme(&self, theme: Arc<Theme>) {
        {
            let mut current = write(&self.theme);
            if Arc::ptr_eq(&current, &theme) {
                return;
            }
            *current = Arc::clone(&theme);
        }
        self.notify(&ThemeEvent::ThemeChanged(theme));
    }

    fn notify(&self, event: &ThemeEvent) {
        // Snapshot so listeners may subscribe or unsubscribe re-entrantly
        let listeners: Vec<Listener> = read(&self.listeners).values().cloned().collect();
        tracing::trace!(count = listeners.len(), "ThemeProvider::notify");
        for listener in listeners {
            listener(event);
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeBundle::default(), ColorScheme::Dark)
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("theme", &self.theme().id)
            .field("mode", &self.mode())
            .field("system_scheme", &self.system_scheme())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
