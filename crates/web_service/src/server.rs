use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use completion_client::{CompletionClient, CompletionClientTrait};
use log::{error, info};

use crate::config::ServiceConfig;
use crate::controllers::{blog_controller, system_controller};
use crate::services::generation::GenerationService;

const DEFAULT_WORKER_COUNT: usize = 4;

/// Shared per-process state. The generation service (and the completion
/// client behind it) is immutable, so handlers can use it concurrently
/// without locking.
pub struct AppState {
    pub generation: GenerationService,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(system_controller::config)
        .configure(blog_controller::config);
}

fn build_client(config: &ServiceConfig) -> Arc<dyn CompletionClientTrait> {
    let mut client = CompletionClient::new(&config.api_key);
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url);
    }
    if let Some(model) = &config.model {
        client = client.with_model(model);
    }
    Arc::new(client)
}

pub async fn run(config: ServiceConfig) -> Result<(), String> {
    info!("Starting blog generation service...");

    let client = build_client(&config);
    let app_state = web::Data::new(AppState {
        generation: GenerationService::new(client),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(("0.0.0.0", config.port))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Listening on http://0.0.0.0:{}", config.port);

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
