use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateCategory {
    Certificate,
    Seminar,
}

impl CertificateCategory {
    pub const ALL: [Self; 2] = [Self::Certificate, Self::Seminar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Seminar => "seminar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Certificate => "Certificate",
            Self::Seminar => "Seminar",
        }
    }

    /// Font Awesome icon for filter buttons and badges.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Certificate => "fas fa-certificate",
            Self::Seminar => "fas fa-users",
        }
    }
}

impl std::fmt::Display for CertificateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for CertificateCategory {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for CertificateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "certificate" => Ok(Self::Certificate),
            "seminar" => Ok(Self::Seminar),
            _ => Err(format!("invalid certificate category: {}", s)),
        }
    }
}
