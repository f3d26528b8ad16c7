use crate::common::ConfigError;

/// Delivery relay settings, supplied by the server environment so the keys
/// never reach the browser bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub endpoint: String,
    pub to_name: String,
    pub to_email: String,
}

impl RelayConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.emailjs.com/api/v1.0/email/send";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let optional = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
            private_key: optional("EMAILJS_PRIVATE_KEY"),
            endpoint: optional("EMAILJS_ENDPOINT")
                .unwrap_or_else(|| Self::DEFAULT_ENDPOINT.to_string()),
            to_name: optional("CONTACT_TO_NAME")
                .unwrap_or_else(|| crate::data::profile::OWNER_NAME.to_string()),
            to_email: optional("CONTACT_TO_EMAIL")
                .unwrap_or_else(|| crate::data::profile::CONTACT_EMAIL.to_string()),
        })
    }
}

/// Set when the server sits behind a reverse proxy whose `X-Forwarded-For`
/// header can be trusted for client addresses.
pub const TRUST_PROXY_VAR: &str = "TRUST_PROXY_HEADERS";

pub fn trust_proxy_headers(lookup: impl Fn(&str) -> Option<String>) -> bool {
    lookup(TRUST_PROXY_VAR)
        .map(|value| value.trim().to_ascii_lowercase())
        .is_some_and(|value| matches!(value.as_str(), "1" | "true" | "yes"))
}
