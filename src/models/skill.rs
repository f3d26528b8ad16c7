use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn from_percent(level: u8) -> Self {
        match level {
            0..=39 => Self::Beginner,
            40..=69 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
    pub icon: &'static str,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    /// `level` is a percentage; anything above 100 is clamped.
    pub const fn new(name: &'static str, level: u8, icon: &'static str) -> Self {
        let level = if level > Self::MAX_LEVEL {
            Self::MAX_LEVEL
        } else {
            level
        };
        Self { name, level, icon }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn label(&self) -> SkillLevel {
        SkillLevel::from_percent(self.level)
    }

    /// CSS width of the progress bar.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}
