use async_trait::async_trait;
use serde::Serialize;

use crate::common::DeliveryError;
use crate::config::RelayConfig;
use crate::models::Notification;

/// Outbound delivery of a contact notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub to_name: &'a str,
    pub to_email: &'a str,
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

/// Request body of the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EmailJsPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: TemplateParams<'a>,
}

impl<'a> EmailJsPayload<'a> {
    pub fn new(config: &'a RelayConfig, notification: &'a Notification) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: TemplateParams {
                to_name: &config.to_name,
                to_email: &config.to_email,
                from_name: &notification.from_name,
                from_email: &notification.from_email,
                subject: &notification.subject,
                message: &notification.message,
            },
        }
    }
}

/// Stands in when no relay is configured. Every send is refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRelay;

#[async_trait]
impl Notifier for DisabledRelay {
    async fn send(&self, _notification: &Notification) -> Result<(), DeliveryError> {
        Err(DeliveryError::Unavailable)
    }
}

#[cfg(feature = "ssr")]
pub use emailjs::{EmailJsRelay, RELAY_TIMEOUT};

#[cfg(feature = "ssr")]
mod emailjs {
    use std::time::Duration;

    use super::*;

    /// Upper bound on one relay round trip, so a stalled relay still ends
    /// in a failure the visitor can see.
    pub const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

    /// Sends notifications through the EmailJS REST API.
    pub struct EmailJsRelay {
        client: reqwest::Client,
        config: RelayConfig,
    }

    impl EmailJsRelay {
        pub fn new(config: RelayConfig) -> Result<Self, DeliveryError> {
            Self::with_timeout(config, RELAY_TIMEOUT)
        }

        pub fn with_timeout(config: RelayConfig, timeout: Duration) -> Result<Self, DeliveryError> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| DeliveryError::Transport(e.to_string()))?;
            Ok(Self { client, config })
        }
    }

    fn transport_error(e: reqwest::Error) -> DeliveryError {
        if e.is_timeout() {
            DeliveryError::Transport("relay did not answer in time".to_string())
        } else {
            DeliveryError::Transport(e.to_string())
        }
    }

    #[async_trait]
    impl Notifier for EmailJsRelay {
        async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
            let payload = EmailJsPayload::new(&self.config, notification);

            let response = self
                .client
                .post(&self.config.endpoint)
                .json(&payload)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            // The relay answers with a plain-text reason, including quota errors.
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RelayConfig {
        RelayConfig {
            service_id: "service_x".into(),
            template_id: "template_y".into(),
            public_key: "pub".into(),
            private_key: None,
            endpoint: RelayConfig::DEFAULT_ENDPOINT.into(),
            to_name: "Owner".into(),
            to_email: "owner@example.com".into(),
        }
    }

    #[test]
    fn test_payload_shape_without_access_token() {
        let config = config();
        let notification = Notification {
            from_name: "Ana".into(),
            from_email: "ana@example.com".into(),
            subject: "[Portfolio Contact] Hi".into(),
            message: "body".into(),
        };

        let json = serde_json::to_value(EmailJsPayload::new(&config, &notification)).unwrap();

        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["template_id"], "template_y");
        assert_eq!(json["user_id"], "pub");
        assert!(json.get("accessToken").is_none());
        assert_eq!(json["template_params"]["to_email"], "owner@example.com");
        assert_eq!(json["template_params"]["from_name"], "Ana");
    }

    #[test]
    fn test_payload_includes_access_token_when_configured() {
        let config = RelayConfig {
            private_key: Some("secret".into()),
            ..config()
        };
        let notification = Notification {
            from_name: "Ana".into(),
            from_email: "ana@example.com".into(),
            subject: "s".into(),
            message: "m".into(),
        };

        let json = serde_json::to_value(EmailJsPayload::new(&config, &notification)).unwrap();

        assert_eq!(json["accessToken"], "secret");
    }

    #[tokio::test]
    async fn test_disabled_relay_refuses() {
        let notification = Notification {
            from_name: "Ana".into(),
            from_email: "ana@example.com".into(),
            subject: "s".into(),
            message: "m".into(),
        };

        let result = DisabledRelay.send(&notification).await;

        assert_eq!(result, Err(DeliveryError::Unavailable));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_stalled_relay_times_out() {
        use std::time::Duration;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept the connection and never answer.
        let stall = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let config = RelayConfig {
            endpoint: format!("http://{}/api/v1.0/email/send", addr),
            ..config()
        };
        let relay = EmailJsRelay::with_timeout(config, Duration::from_millis(200)).unwrap();
        let notification = Notification {
            from_name: "Ana".into(),
            from_email: "ana@example.com".into(),
            subject: "s".into(),
            message: "m".into(),
        };

        let result = relay.send(&notification).await;

        assert_eq!(
            result,
            Err(DeliveryError::Transport("relay did not answer in time".to_string()))
        );
        stall.abort();
    }
}
