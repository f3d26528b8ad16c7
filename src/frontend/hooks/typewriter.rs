use leptos::prelude::*;

use crate::services::typewriter::{Typewriter, TYPING_INTERVAL};

/// Text that grows by one character every tick until `text` is complete.
pub fn use_typewriter(text: &'static str) -> Signal<String> {
    let writer = RwSignal::new(Typewriter::new(text));
    let interval = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        let started = set_interval_with_handle(
            move || {
                // A disposed signal means the page is gone.
                if !writer.try_update(Typewriter::tick).unwrap_or(false) {
                    stop();
                }
            },
            TYPING_INTERVAL,
        );
        match started {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(e) => log::warn!("Typing animation could not start: {:?}", e),
        }
    });

    on_cleanup(stop);

    Signal::derive(move || writer.with(Typewriter::visible))
}
