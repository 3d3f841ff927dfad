use crate::app::AppState;
use crate::config::AppConfig;
use crate::responses::error_response;
use crate::router::handle;
use astra::Server;

mod app;
mod config;
mod domain;
mod errors;
mod feed;
mod responses;
mod router;
mod templates;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read settings
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the shared state (the sheet itself loads lazily on first request)
    let state = match AppState::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            log::error!("❌ Feed client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    log::info!("Starting server at http://{}", config.bind);
    let server = Server::bind(config.bind).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
