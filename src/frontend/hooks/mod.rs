//! Browser glue around the services. Effects only run after hydration, so
//! nothing here touches the DOM during server rendering.

mod reveal;
mod scroll;
mod theme;
mod typewriter;

pub use reveal::use_scroll_reveal;
pub use scroll::scroll_window;
pub use theme::{provide_theme, use_theme, ThemeContext};
pub use typewriter::use_typewriter;
