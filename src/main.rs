#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use dotenvy::dotenv;
use errors::ApplicationError;
use router::setup_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod errors;
mod model;
mod router;
mod state;
mod store;
#[cfg(test)]
mod test;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ApplicationError> {
    setup_tracing();

    let (host, port) = setup_env();

    // All notes live in this one state object; the process starts empty.
    let app_state = AppState::new();
    let app = setup_router(app_state);

    let address = format!("{}:{}", host, port);
    info!("Starting server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(ApplicationError::from)?;

    info!(
        "Listening on: {}",
        listener.local_addr().map_err(ApplicationError::from)?
    );

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ApplicationError::CannotServe)?;
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{crate_name}=debug,tower_http=debug",
                    crate_name = env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn setup_env() -> (String, String) {
    dotenv().ok();

    // The service binds all interfaces on a fixed port unless overridden.
    let host = std::env::var("NOTELET_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("NOTELET_PORT").unwrap_or_else(|_| "5000".to_string());

    (host, port)
}
