//! Routed pages

mod about;
mod certificates;
mod contact;
mod home;
mod not_found;
mod projects;

pub use about::AboutPage;
pub use certificates::CertificatesPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use projects::ProjectsPage;
