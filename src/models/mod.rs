pub use certificate::*;
pub use certificate_category::*;
pub use contact::*;
pub use filter::*;
pub use project::*;
pub use project_category::*;
pub use skill::*;

mod certificate;
mod certificate_category;
mod contact;
mod filter;
mod project;
mod project_category;
mod skill;
