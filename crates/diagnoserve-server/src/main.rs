use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::LevelFilter;

use diagnoserve_core::config::PipelineConfig;
use diagnoserve_core::dataset::Dataset;
use diagnoserve_core::pipeline;
use diagnoserve_server::handlers;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DIAGNOSERVE_LOG", "error,diagnoserve=info"))
        .init();

    let config = PipelineConfig::default();
    let dataset = Dataset::bundled().context("failed to load bundled dataset")?;

    // Build once, before the listener exists; no request can observe a
    // partially built pipeline.
    let fitted = match pipeline::build(dataset, &config) {
        Ok(fitted) => web::Data::new(fitted),
        Err(e) => {
            log::error!("pipeline build failed: {}", e);
            std::process::exit(1);
        }
    };

    let host = std::env::var("DIAGNOSERVE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("DIAGNOSERVE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    log::info!("serving on http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(fitted.clone())
            .configure(handlers::routes)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {}:{}", host, port))?
    .run()
    .await?;

    Ok(())
}
