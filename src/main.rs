//! Task store HTTP server.
//!
//! Serves CRUD over a single in-memory task collection. State lives for the
//! process lifetime and is shared across all workers through `AppState`.

use actix_web::{App, HttpServer, middleware, web};
use task_store::config::Config;
use task_store::handlers::{AppState, configure_routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;
    let bind = (config.bind_addr.clone(), config.port);
    log::info!(
        "starting HTTP server at http://{}:{}",
        config.bind_addr,
        config.port
    );

    // build the store once, outside `HttpServer::new`, so it is shared across
    // all workers
    let app_data = AppState::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_data.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
