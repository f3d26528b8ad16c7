pub mod contact;
pub mod relay;
pub mod reveal;
pub mod shell;
pub mod theme;
pub mod typewriter;

pub use contact::{ContactFlow, ContactStatus, ModalContent, ModalKind};
pub use relay::Notifier;
pub use theme::{PreferenceStore, Theme, ThemeStore};
