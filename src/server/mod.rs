//! main file for the server

pub(crate) mod error;
pub(crate) mod logging;
pub(crate) mod model;
mod routes;
mod state;
mod util;

use actix_web::{web, App, HttpServer};
use crate::server::model::config::ServerConfig;
pub(crate) use crate::server::state::AppState;

/// Run the server
pub(crate) async fn run(ServerConfig { addr, workers }: ServerConfig, state: AppState) -> std::io::Result<()> {
    let data = web::Data::new(state);
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }
    server
        .bind(addr)?
        .run()
        .await
}
