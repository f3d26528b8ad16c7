//! Reusable UI components

mod alert;
mod button;
mod cards;
mod feature_card;
mod filter_bar;
mod footer;
mod input;
mod layout;
mod modal;
mod nav;
mod splash;

pub use alert::Alert;
pub use button::{Button, ButtonVariant, LinkButton};
pub use cards::{CertificateCard, CertificateImage, ProjectCard, SkillCard, TechTag};
pub use feature_card::FeatureCard;
pub use filter_bar::{filter_href, use_category_filter, FilterBar, FilterOption, NoResults};
pub use footer::{copyright_year, Footer};
pub use input::{TextArea, TextInput};
pub use layout::Layout;
pub use modal::{BodyScrollLock, Modal, OverflowStyle};
pub use nav::Nav;
pub use splash::{Splash, SPLASH_DURATION};
