//! Static content shown on the site.

pub mod certificates;
pub mod profile;
pub mod projects;
pub mod skills;

pub use certificates::CERTIFICATES;
pub use projects::PROJECTS;
pub use skills::{SKILL_GROUPS, tech_icon};
