#[cfg(test)]
pub mod config_tests {
    use std::collections::HashMap;

    use portfolio::common::ConfigError;
    use portfolio::config::{trust_proxy_headers, RelayConfig, TRUST_PROXY_VAR};
    use portfolio::data::profile::{CONTACT_EMAIL, OWNER_NAME};

    fn lookup<'a>(vars: &'a HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|value| value.to_string())
    }

    fn required_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("EMAILJS_SERVICE_ID", "service_portfolio"),
            ("EMAILJS_TEMPLATE_ID", "template_contact"),
            ("EMAILJS_PUBLIC_KEY", "public_key"),
        ])
    }

    #[test]
    fn test_relay_config_applies_defaults() {
        let vars = required_vars();

        let config = RelayConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.service_id, "service_portfolio");
        assert_eq!(config.private_key, None);
        assert_eq!(config.endpoint, RelayConfig::DEFAULT_ENDPOINT);
        assert_eq!(config.to_name, OWNER_NAME);
        assert_eq!(config.to_email, CONTACT_EMAIL);
    }

    #[test]
    fn test_relay_config_missing_required() {
        let mut vars = required_vars();
        vars.remove("EMAILJS_TEMPLATE_ID");

        let result = RelayConfig::from_lookup(lookup(&vars));

        assert_eq!(result, Err(ConfigError::Missing("EMAILJS_TEMPLATE_ID")));
    }

    #[test]
    fn test_relay_config_blank_counts_as_missing() {
        let mut vars = required_vars();
        vars.insert("EMAILJS_PUBLIC_KEY", "   ");

        let result = RelayConfig::from_lookup(lookup(&vars));

        assert_eq!(result, Err(ConfigError::Missing("EMAILJS_PUBLIC_KEY")));
    }

    #[test]
    fn test_relay_config_overrides() {
        let mut vars = required_vars();
        vars.insert("EMAILJS_PRIVATE_KEY", " secret ");
        vars.insert("CONTACT_TO_EMAIL", "inbox@example.com");

        let config = RelayConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.private_key.as_deref(), Some("secret"));
        assert_eq!(config.to_email, "inbox@example.com");
    }

    #[test]
    fn test_trust_proxy_headers_defaults_off() {
        let vars = required_vars();
        assert!(!trust_proxy_headers(lookup(&vars)));

        let mut vars = required_vars();
        vars.insert(TRUST_PROXY_VAR, "no");
        assert!(!trust_proxy_headers(lookup(&vars)));
    }

    #[test]
    fn test_trust_proxy_headers_enabled() {
        let mut vars = required_vars();
        vars.insert(TRUST_PROXY_VAR, " TRUE ");
        assert!(trust_proxy_headers(lookup(&vars)));
    }
}
