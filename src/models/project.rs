use serde::Serialize;

use super::{Categorized, ProjectCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProjectVisual {
    Image { src: &'static str, emoji: &'static str },
    Emoji(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub short_description: Option<&'static str>,
    pub category: ProjectCategory,
    pub featured: bool,
    pub technologies: &'static [&'static str],
    pub visual: ProjectVisual,
    pub demo_url: Option<&'static str>,
}

impl Project {
    const SUMMARY_LEN: usize = 80;

    /// Overlay text: the short description, or the first 80 characters of
    /// the full one.
    pub fn summary(&self) -> String {
        match self.short_description {
            Some(short) => short.to_string(),
            None => {
                let head: String = self.description.chars().take(Self::SUMMARY_LEN).collect();
                format!("{head}...")
            }
        }
    }
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}
