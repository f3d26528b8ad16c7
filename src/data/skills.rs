use crate::models::{Skill, SkillGroup};

static PROGRAMMING_LANGUAGES: [Skill; 4] = [
    Skill::new("JavaScript", 85, "fab fa-js"),
    Skill::new("HTML", 90, "fab fa-html5"),
    Skill::new("CSS", 85, "fab fa-css3-alt"),
    Skill::new("Python", 60, "fab fa-python"),
];

static FRONTEND: [Skill; 4] = [
    Skill::new("React", 80, "fab fa-react"),
    Skill::new("Tailwind CSS", 85, "fas fa-wind"),
    Skill::new("Responsive Design", 80, "fas fa-mobile-alt"),
    Skill::new("Vite", 75, "fas fa-bolt"),
];

static TOOLS: [Skill; 4] = [
    Skill::new("Git", 75, "fab fa-git-alt"),
    Skill::new("VS Code", 90, "fas fa-code"),
    Skill::new("npm", 80, "fab fa-npm"),
    Skill::new("Figma", 65, "fab fa-figma"),
];

pub static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Programming Languages",
        icon: "fas fa-laptop-code",
        skills: &PROGRAMMING_LANGUAGES,
    },
    SkillGroup {
        title: "Frontend Technologies",
        icon: "fas fa-paint-brush",
        skills: &FRONTEND,
    },
    SkillGroup {
        title: "Tools & Others",
        icon: "fas fa-tools",
        skills: &TOOLS,
    },
];

/// Technologies listed on the home page.
pub static HOME_TECH: [&str; 12] = [
    "React",
    "JavaScript",
    "HTML5",
    "CSS3",
    "Tailwind CSS",
    "Node.js",
    "Firebase",
    "Express",
    "Responsive Design",
    "Git",
    "Stripe",
    "JWT",
];

/// Font Awesome icon for a technology name, `fas fa-code` when unknown.
pub fn tech_icon(name: &str) -> &'static str {
    match name {
        "React" => "fab fa-react",
        "JavaScript" | "TypeScript" => "fab fa-js",
        "HTML5" => "fab fa-html5",
        "CSS3" => "fab fa-css3-alt",
        "Tailwind CSS" => "fab fa-css3",
        "Vite" => "fas fa-bolt",
        "Responsive Design" => "fas fa-mobile-alt",
        "Git" => "fab fa-git-alt",
        "Node.js" | "Express" => "fab fa-node-js",
        "Firebase" => "fas fa-fire",
        "Stripe" => "fab fa-stripe-s",
        "JWT" => "fas fa-key",
        _ => "fas fa-code",
    }
}
