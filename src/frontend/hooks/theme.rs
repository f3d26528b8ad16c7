use leptos::prelude::*;

use crate::services::theme::{BrowserStore, Theme, ThemeStore};

/// Dark-mode flag shared by the whole tree.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: StoredValue<Option<ThemeStore<BrowserStore>>, LocalStorage>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(Theme::is_dark)
    }

    pub fn toggle(&self) {
        let theme = self.theme;
        self.store.update_value(|store| match store {
            Some(store) => theme.set(store.toggle()),
            // Not booted yet: keep the page responsive, persistence follows on boot.
            None => theme.update(|t| *t = t.toggled()),
        });
    }
}

fn apply_root_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = match theme.root_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1("dark"),
    };
    if let Err(e) = result {
        log::warn!("Failed to update root theme class: {:?}", e);
    }
}

/// Boots the theme store from local storage once the app is live in the
/// browser and shares it through context.
pub fn provide_theme() -> ThemeContext {
    let theme = RwSignal::new(Theme::default());
    let store = StoredValue::new_local(None);

    Effect::new(move |_| {
        let mut booted = ThemeStore::boot(BrowserStore);
        booted.subscribe(apply_root_class);
        apply_root_class(booted.theme());
        theme.set(booted.theme());
        store.set_value(Some(booted));
    });

    let context = ThemeContext { theme, store };
    provide_context(context);
    context
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(provide_theme)
}
