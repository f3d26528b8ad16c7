#[cfg(test)]
pub mod theme_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use portfolio::common::StorageError;
    use portfolio::services::theme::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("quota".into()))
        }
    }

    #[test]
    fn test_boot_defaults_to_dark_and_persists() {
        let storage = MemoryStore::new();

        let store = ThemeStore::boot(&storage);

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(storage.get(STORAGE_KEY), Ok(Some("true".to_string())));
    }

    #[test]
    fn test_boot_reads_stored_light() {
        let storage = MemoryStore::with(STORAGE_KEY, "false");
        assert_eq!(ThemeStore::boot(&storage).theme(), Theme::Light);
    }

    #[test]
    fn test_boot_treats_unexpected_value_as_dark() {
        let storage = MemoryStore::with(STORAGE_KEY, "maybe");
        assert_eq!(ThemeStore::boot(&storage).theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_survives_reload() {
        let storage = MemoryStore::new();

        let mut first_visit = ThemeStore::boot(&storage);
        assert_eq!(first_visit.toggle(), Theme::Light);
        drop(first_visit);

        let reloaded = ThemeStore::boot(&storage);
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(storage.get(STORAGE_KEY), Ok(Some("false".to_string())));
    }

    #[test]
    fn test_toggle_twice_returns_to_dark() {
        let storage = MemoryStore::new();
        let mut store = ThemeStore::boot(&storage);

        store.toggle();
        store.toggle();

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(storage.get(STORAGE_KEY), Ok(Some("true".to_string())));
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::boot(MemoryStore::new());
        let sink = Rc::clone(&seen);
        store.subscribe(move |theme| sink.borrow_mut().push(theme));

        store.toggle();
        store.set(Theme::Light);
        store.toggle();

        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Light, Theme::Dark]);
    }

    #[test]
    fn test_broken_storage_degrades_to_dark() {
        let mut store = ThemeStore::boot(BrokenStore);
        assert_eq!(store.theme(), Theme::Dark);

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }
}
