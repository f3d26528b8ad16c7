use crate::services::shell::{ScrollBehavior, ScrollRequest};

pub fn scroll_window(request: ScrollRequest) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_top(request.top);
    options.set_left(request.left);
    options.set_behavior(match request.behavior {
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    window.scroll_to_with_scroll_to_options(&options);
}
