use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use astra::Server;
use std::sync::Arc;

mod app;
mod config;
mod content;
mod domain;
mod errors;
mod github;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_logger();

    if let Err(e) = run() {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}

fn run() -> anyhow::Result<()> {
    // 1️⃣ Resolve configuration
    let config = Config::load().context("loading configuration")?;
    let addr = config.addr;
    let workers = config.max_workers;

    // 2️⃣ Load content and build the GitHub client
    let app = Arc::new(App::from_config(config)?);
    tracing::info!(
        projects = app.content.projects.len(),
        github_user = %app.config.github_username,
        "content loaded"
    );

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{addr}");
    Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| router::respond(req, &app))
        .with_context(|| format!("serving on {addr}"))?;

    Ok(())
}
