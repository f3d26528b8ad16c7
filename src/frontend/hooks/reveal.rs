use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::services::reveal::{Reveal, RevealClasses, RevealOptions, RevealTracker};

const REVEAL_ID_ATTR: &str = "data-reveal-id";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct ActiveObserver {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker<u32>>>,
    // Dropping the closure would invalidate the observer callback.
    _callback: ObserverCallback,
}

impl ActiveObserver {
    fn disconnect(self) {
        let pending = self.tracker.borrow_mut().release();
        if !pending.is_empty() {
            log::debug!("Releasing {} unrevealed elements", pending.len());
        }
        self.observer.disconnect();
    }
}

fn reveal_id(element: &Element) -> Option<u32> {
    element.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

fn start(classes: &RevealClasses, options: RevealOptions) -> Result<ActiveObserver, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let visible = classes.visible.clone();
    let callback_tracker = Rc::clone(&tracker);
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = reveal_id(&target) else {
                    continue;
                };

                let outcome = callback_tracker
                    .borrow_mut()
                    .on_intersection(&id, entry.is_intersecting());
                if outcome == Reveal::Show {
                    if let Err(e) = target.class_list().add_1(&visible) {
                        log::warn!("Failed to reveal element: {:?}", e);
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let nodes = document.query_selector_all(&classes.selector())?;
    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        element.set_attribute(REVEAL_ID_ATTR, &index.to_string())?;
        if tracker.borrow_mut().observe(index) {
            observer.observe(&element);
        }
    }

    Ok(ActiveObserver {
        observer,
        tracker,
        _callback: callback,
    })
}

/// Adds `classes.visible` to every `classes.hidden` element the first time
/// it scrolls into view. Re-scans whenever `classes` notifies, so callers
/// that swap content can derive it from their content signal. Disconnects
/// when the owner is cleaned up.
pub fn use_scroll_reveal(classes: Signal<RevealClasses>, options: RevealOptions) {
    let active = StoredValue::new_local(None::<ActiveObserver>);

    let stop = move || {
        if let Some(previous) = active.try_update_value(Option::take).flatten() {
            previous.disconnect();
        }
    };

    Effect::new(move |_| {
        let classes = classes.get();
        stop();
        // Scan once the current render has reached the DOM.
        request_animation_frame(move || match start(&classes, options) {
            Ok(observer) if active.is_disposed() => observer.disconnect(),
            Ok(observer) => {
                if let Some(previous) = active.try_update_value(|slot| slot.replace(observer)).flatten() {
                    previous.disconnect();
                }
            }
            Err(e) => log::warn!("Scroll reveal unavailable: {:?}", e),
        });
    });

    on_cleanup(stop);
}
