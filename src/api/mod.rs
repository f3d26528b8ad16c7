use async_trait::async_trait;
use leptos::prelude::*;

use crate::common::DeliveryError;
use crate::models::Notification;
use crate::services::relay::Notifier;

/// Forwards a composed contact notification to the configured relay.
/// Rate limited per client address.
#[server(DeliverNotification, "/api")]
pub async fn deliver_notification(notification: Notification) -> Result<(), ServerFnError> {
    use crate::web::security::client_key;
    use crate::web::AppState;

    notification
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new(DeliveryError::Unavailable.to_string()))?;

    let req: actix_web::HttpRequest = leptos_actix::extract()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok());
    let client = client_key(req.peer_addr(), forwarded, state.trust_forwarded);

    if !state.rate_limiter.allow_contact(&client) {
        log::warn!("Contact rate limit hit for {}", client);
        return Err(ServerFnError::new(DeliveryError::RateLimited.to_string()));
    }

    match state.notifier.send(&notification).await {
        Ok(()) => {
            log::info!("Contact notification delivered for {}", notification.from_name);
            Ok(())
        }
        Err(e) => {
            log::error!("Contact notification failed: {}", e);
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

/// Browser-side notifier: hands the notification to the server, which owns
/// the relay credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServerRelay;

#[async_trait]
impl Notifier for ServerRelay {
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        deliver_notification(notification.clone())
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))
    }
}
