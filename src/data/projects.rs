use crate::models::{Project, ProjectCategory, ProjectVisual};

pub static PROJECTS: &[Project] = &[Project {
    id: 1,
    title: "SaleMate E-commerce Platform",
    description: "A comprehensive e-commerce platform with product listings, shopping cart, user authentication, and payment processing. Features a clean, modern UI and responsive design for all devices.",
    short_description: Some("A modern e-commerce platform with full shopping functionality"),
    category: ProjectCategory::Ecommerce,
    featured: true,
    technologies: &["React", "Node.js", "Express", "Firebase", "Stripe", "JWT"],
    visual: ProjectVisual::Image {
        src: "/images/projects/SalematePNG.png",
        emoji: "🛍️",
    },
    demo_url: Some("https://salemate.netlify.app/"),
}];

pub fn featured() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|project| project.featured)
}
