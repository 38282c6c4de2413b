//! Theme store: the light/dark preference shared by every component.
//!
//! A single owned store with a subscribe/notify contract rather than an
//! ambient global. The preference is persisted through a [`ThemeStorage`]
//! seam; on desktop that is a one-line file under the app's data directory,
//! the local-storage analogue. Storage failures are logged and otherwise
//! ignored: the in-memory value stays authoritative for the session.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use parking_lot::RwLock;

/// The active presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Initial value resolution: explicit stored preference, then the
    /// configured default, then the system preference. First found wins;
    /// dark is the final fallback.
    pub fn resolve(
        stored: Option<Theme>,
        configured_default: Option<Theme>,
        system: Option<Theme>,
    ) -> Theme {
        stored
            .or(configured_default)
            .or(system)
            .unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Where the theme preference lives between sessions.
///
/// Implementations must not fail loudly; a broken backing store degrades to
/// the configured default.
pub trait ThemeStorage: Send + Sync {
    /// Read the stored preference, if any.
    fn load(&self) -> Option<Theme>;
    /// Persist the preference. Failures are swallowed by the caller.
    fn store(&self, theme: Theme) -> std::io::Result<()>;
}

/// File-backed storage: a single `theme` file holding `light` or `dark`.
#[derive(Debug, Clone)]
pub struct FileThemeStorage {
    path: PathBuf,
}

impl FileThemeStorage {
    /// Storage rooted at `data_dir`, e.g. `~/.local/share/portfolio/theme`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join("theme"),
        }
    }
}

impl ThemeStorage for FileThemeStorage {
    fn load(&self) -> Option<Theme> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        raw.parse().ok()
    }

    fn store(&self, theme: Theme) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, theme.as_str())
    }
}

type Subscriber = std::sync::Arc<dyn Fn(Theme) + Send + Sync>;

/// Handle for removing a theme subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct ThemeState {
    theme: Theme,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

/// Process-wide theme state: single writer (the toggle control), many
/// readers, observers notified on every change.
pub struct ThemeStore {
    state: RwLock<ThemeState>,
    storage: Box<dyn ThemeStorage>,
}

impl ThemeStore {
    /// Open the store, resolving the initial theme from the storage seam,
    /// the configured default, and the system preference, in that order.
    pub fn open(
        storage: impl ThemeStorage + 'static,
        configured_default: Option<Theme>,
        system: Option<Theme>,
    ) -> Self {
        let initial = Theme::resolve(storage.load(), configured_default, system);
        tracing::info!(theme = initial.as_str(), "theme store initialized");
        Self {
            state: RwLock::new(ThemeState {
                theme: initial,
                subscribers: Vec::new(),
                next_id: 0,
            }),
            storage: Box::new(storage),
        }
    }

    pub fn get(&self) -> Theme {
        self.state.read().theme
    }

    /// Update the theme, persist it, and notify every subscriber. Persistence
    /// failures are logged and ignored.
    pub fn set(&self, theme: Theme) {
        // Snapshot the subscriber list and release the lock before invoking
        // anything: a callback may re-enter the store (unsubscribe itself,
        // toggle again) and the lock is not reentrant.
        let subscribers: Vec<Subscriber> = {
            let mut state = self.state.write();
            if state.theme == theme {
                return;
            }
            state.theme = theme;
            state.subscribers.iter().map(|(_, s)| s.clone()).collect()
        };

        if let Err(e) = self.storage.store(theme) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }

        for subscriber in subscribers {
            subscriber(theme);
        }
    }

    /// Flip between light and dark, returning the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Register an observer called with the new theme on every change.
    pub fn subscribe(&self, f: impl Fn(Theme) + Send + Sync + 'static) -> SubscriptionId {
        let mut state = self.state.write();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.subscribers.push((id, std::sync::Arc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.write().subscribers.retain(|(sid, _)| *sid != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory storage for tests.
    struct MemoryStorage(RwLock<Option<Theme>>);

    impl MemoryStorage {
        fn empty() -> Self {
            Self(RwLock::new(None))
        }
        fn with(theme: Theme) -> Self {
            Self(RwLock::new(Some(theme)))
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Option<Theme> {
            *self.0.read()
        }
        fn store(&self, theme: Theme) -> std::io::Result<()> {
            *self.0.write() = Some(theme);
            Ok(())
        }
    }

    /// Storage that always fails writes.
    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn load(&self) -> Option<Theme> {
            None
        }
        fn store(&self, _theme: Theme) -> std::io::Result<()> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn stored_preference_wins_over_default_and_system() {
        let store = ThemeStore::open(
            MemoryStorage::with(Theme::Light),
            Some(Theme::Dark),
            Some(Theme::Dark),
        );
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn configured_default_wins_over_system() {
        let store = ThemeStore::open(MemoryStorage::empty(), Some(Theme::Light), Some(Theme::Dark));
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn system_preference_is_last_resort_before_dark() {
        let store = ThemeStore::open(MemoryStorage::empty(), None, Some(Theme::Light));
        assert_eq!(store.get(), Theme::Light);

        let store = ThemeStore::open(MemoryStorage::empty(), None, None);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn double_toggle_is_idempotent() {
        let store = ThemeStore::open(MemoryStorage::with(Theme::Dark), None, None);
        let original = store.get();
        store.toggle();
        store.toggle();
        assert_eq!(store.get(), original);
        assert_eq!(store.storage.load(), Some(original));
    }

    #[test]
    fn subscribers_are_notified_and_can_unsubscribe() {
        let store = ThemeStore::open(MemoryStorage::empty(), None, None);
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        let id = store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        store.set(Theme::Light);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Setting the same value again is not a change
        store.set(Theme::Light);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        store.unsubscribe(id);
        store.set(Theme::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn one_shot_subscriber_can_unsubscribe_itself_during_notification() {
        let store = Arc::new(ThemeStore::open(MemoryStorage::empty(), None, None));
        let count = Arc::new(AtomicUsize::new(0));
        let id_slot = Arc::new(RwLock::new(None::<SubscriptionId>));

        let id = {
            let store = store.clone();
            let count = count.clone();
            let id_slot = id_slot.clone();
            store.clone().subscribe(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
                if let Some(id) = *id_slot.read() {
                    store.unsubscribe(id);
                }
            })
        };
        *id_slot.write() = Some(id);

        // Must not deadlock, and the subscriber fires exactly once
        store.set(Theme::Light);
        store.set(Theme::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscriber_may_toggle_the_store_again() {
        let store = Arc::new(ThemeStore::open(MemoryStorage::empty(), None, None));

        let id = {
            let store = store.clone();
            // Re-enter once: flip Light back to Dark from inside the callback
            store.clone().subscribe(move |theme| {
                if theme == Theme::Light {
                    store.set(Theme::Dark);
                }
            })
        };

        store.set(Theme::Light);
        assert_eq!(store.get(), Theme::Dark);
        store.unsubscribe(id);
    }

    #[test]
    fn storage_failure_keeps_memory_authoritative() {
        let store = ThemeStore::open(BrokenStorage, None, None);
        store.set(Theme::Light);
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileThemeStorage::new(dir.path());

        assert_eq!(storage.load(), None);
        storage.store(Theme::Light).unwrap();
        assert_eq!(storage.load(), Some(Theme::Light));

        // Garbage in the file degrades to "no preference"
        std::fs::write(dir.path().join("theme"), "solarized").unwrap();
        assert_eq!(storage.load(), None);
    }
}
