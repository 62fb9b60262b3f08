pub mod error;
pub mod routes;

use crate::{config::Config, generation::GenerationClient, upstream::UpstreamServices};
use actix_web::{middleware::DefaultHeaders, web, App, HttpServer};

pub use routes::configure;

#[derive(Clone)]
pub struct AppState {
    pub generator: GenerationClient,
    pub report_degraded: bool,
}

impl AppState {
    pub fn new(services: UpstreamServices, report_degraded: bool) -> Self {
        Self {
            generator: GenerationClient::new(services),
            report_degraded,
        }
    }
}

pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
}

pub async fn run(config: Config, services: UpstreamServices) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(services, config.report_degraded));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .configure(configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
