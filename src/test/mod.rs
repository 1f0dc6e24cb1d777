#![allow(clippy::unwrap_used)]

use axum_test::TestServer;

use crate::{router::setup_router, state::AppState};

mod health;

/// A full server over a fresh, empty store. Every test gets its own.
pub fn setup_server() -> TestServer {
    let app = setup_router(AppState::new());

    TestServer::new(app).unwrap()
}
