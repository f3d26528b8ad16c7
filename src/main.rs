#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{web::Data, App, HttpServer};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};

    use portfolio::config::{trust_proxy_headers, RelayConfig};
    use portfolio::frontend::{shell, App as Site};
    use portfolio::services::relay::{DisabledRelay, EmailJsRelay, Notifier};
    use portfolio::web::{middleware::SecurityHeaders, AppState};

    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;

    let notifier: Arc<dyn Notifier> = match RelayConfig::from_env() {
        Ok(config) => {
            let to_email = config.to_email.clone();
            match EmailJsRelay::new(config) {
                Ok(relay) => {
                    log::info!("Contact relay configured for {}", to_email);
                    Arc::new(relay)
                }
                Err(e) => {
                    log::error!("Failed to build the relay client, contact form disabled: {}", e);
                    Arc::new(DisabledRelay)
                }
            }
        }
        Err(e) => {
            log::warn!("Contact form disabled: {}", e);
            Arc::new(DisabledRelay)
        }
    };
    let trust_forwarded = trust_proxy_headers(|key| std::env::var(key).ok());
    if trust_forwarded {
        log::info!("Taking client addresses from X-Forwarded-For");
    }
    let state = AppState::new(notifier, trust_forwarded);

    log::info!("Listening on http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(Site);
        let leptos_options = conf.leptos_options.clone();
        let site_root = leptos_options.site_root.clone().to_string();
        let context = {
            let state = state.clone();
            move || provide_context(state.clone())
        };

        App::new()
            .wrap(SecurityHeaders)
            .route("/api/{tail:.*}", handle_server_fns_with_context(context.clone()))
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/images", format!("{site_root}/images")))
            .leptos_routes_with_context(routes, context, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client-side code is built as a library and started by `hydrate()`.
}
