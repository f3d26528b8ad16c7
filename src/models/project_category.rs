use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Ecommerce,
    Extensible,
}

impl ProjectCategory {
    pub const ALL: [Self; 2] = [Self::Ecommerce, Self::Extensible];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Extensible => "extensible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce",
            Self::Extensible => "Extensible",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Ecommerce => "fas fa-shopping-cart",
            Self::Extensible => "fas fa-puzzle-piece",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for ProjectCategory {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ecommerce" => Ok(Self::Ecommerce),
            "extensible" => Ok(Self::Extensible),
            _ => Err(format!("invalid project category: {}", s)),
        }
    }
}
