use leptos::ev;
use leptos::prelude::*;

/// Read/write access to an element's inline `overflow` style.
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Holds the page scroll while a dialog is open and puts back the exact
/// previous inline value when dropped.
pub struct BodyScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
}

impl<T: OverflowStyle> BodyScrollLock<T> {
    pub fn lock(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self { target, previous }
    }
}

impl<T: OverflowStyle> Drop for BodyScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

/// `document.body`.
pub struct DocumentBody(web_sys::HtmlElement);

impl DocumentBody {
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(Self)
    }
}

impl OverflowStyle for DocumentBody {
    fn overflow(&self) -> String {
        self.0
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.0.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = result {
            log::warn!("Failed to set body overflow: {:?}", e);
        }
    }
}

/// Dialog closed by its close button, a click on the overlay or Escape.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let lock = StoredValue::new_local(None::<BodyScrollLock<DocumentBody>>);

    Effect::new(move |_| {
        if open.get() {
            if lock.with_value(Option::is_none) {
                lock.set_value(DocumentBody::current().map(BodyScrollLock::lock));
            }
        } else {
            lock.set_value(None);
        }
    });

    Effect::new(move |_| {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    });

    on_cleanup(move || {
        lock.try_update_value(|held| *held = None);
    });

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[100] flex items-center justify-center p-4" role="dialog" aria-modal="true">
                <div
                    class="absolute inset-0 bg-black/60 backdrop-blur-sm animate-fadeIn"
                    on:click=move |_| on_close.run(())
                ></div>
                <div class="relative w-full max-w-md p-8 rounded-2xl bg-white dark:bg-gray-800 shadow-2xl animate-fadeInUp">
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute top-4 right-4 text-gray-400 hover:text-gray-700 dark:hover:text-white transition-colors"
                        on:click=move |_| on_close.run(())
                    >
                        <i class="fas fa-times"></i>
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeBody(RefCell<String>);

    impl OverflowStyle for &FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn test_scroll_lock_restores_previous_value() {
        let body = FakeBody(RefCell::new("scroll".into()));

        let lock = BodyScrollLock::lock(&body);
        assert_eq!(body.0.borrow().as_str(), "hidden");

        drop(lock);
        assert_eq!(body.0.borrow().as_str(), "scroll");
    }

    #[test]
    fn test_scroll_lock_restores_empty_value() {
        let body = FakeBody(RefCell::new(String::new()));

        drop(BodyScrollLock::lock(&body));

        assert_eq!(body.0.borrow().as_str(), "");
    }
}
