//! Dark-mode preference: resolution at boot, persistence and change
//! notification.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::common::StorageError;

/// Local-storage key holding `"true"` or `"false"`.
pub const STORAGE_KEY: &str = "darkMode";

/// Runs in `<head>` before first paint so the root element already carries
/// the right class when the server-rendered page shows up.
pub const BOOT_SCRIPT: &str = r#"(function(){try{var s=window.localStorage,v=s.getItem('darkMode');if(v===null){s.setItem('darkMode','true');v='true';}if(v==='false'){document.documentElement.classList.remove('dark');}else{document.documentElement.classList.add('dark');}}catch(e){document.documentElement.classList.add('dark');}})();"#;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("false") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stored string form.
    pub fn as_stored(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Class the root element carries for this theme.
    pub fn root_class(&self) -> Option<&'static str> {
        self.is_dark().then_some("dark")
    }
}

/// Key/value storage the theme is persisted to.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, used during server rendering and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

type Subscriber = Box<dyn Fn(Theme)>;

/// Application-scoped theme state with a single setter.
pub struct ThemeStore<S: PreferenceStore> {
    store: S,
    theme: Theme,
    subscribers: Vec<Subscriber>,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Resolves the initial theme. A missing value means dark, and that
    /// default is written back.
    pub fn boot(store: S) -> Self {
        let theme = match store.get(STORAGE_KEY) {
            Ok(Some(value)) => Theme::from_stored(Some(&value)),
            Ok(None) => {
                let theme = Theme::default();
                if let Err(e) = store.set(STORAGE_KEY, theme.as_stored()) {
                    log::warn!("Failed to persist default theme: {}", e);
                }
                theme
            }
            Err(e) => {
                log::warn!("Failed to read stored theme, using dark: {}", e);
                Theme::default()
            }
        };

        Self {
            store,
            theme,
            subscribers: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        // Storage failures must not take the shell down.
        if let Err(e) = self.store.set(STORAGE_KEY, theme.as_stored()) {
            log::warn!("Failed to persist theme: {}", e);
        }
        for subscriber in &self.subscribers {
            subscriber(theme);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(Theme) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_treats_garbage_as_dark() {
        assert_eq!(Theme::from_stored(Some("yes")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("false")), Theme::Light);
    }

    #[test]
    fn test_root_class() {
        assert_eq!(Theme::Dark.root_class(), Some("dark"));
        assert_eq!(Theme::Light.root_class(), None);
    }
}
