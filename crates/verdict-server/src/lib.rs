//! HTTP application glue
//!
//! Assembles the axum router over the user service and owns the conversion
//! from [`verdict_http::ResponseSpec`] descriptors to real responses. The
//! mapping core stays framework-free; everything axum-specific lives here.

mod respond;
mod routes;
mod service;
mod store;
mod user;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use verdict_config::Config;

pub use respond::render;
pub use routes::ActionRoutes;
pub use service::{EMAIL_ALREADY_EXISTS, UserService};
pub use store::{DuplicateEmail, MemoryUserStore, UserStore};
pub use user::User;

/// Shared handler state: the user service and the named-route table
///
/// The service owns the only shared mutable resource in the system (the
/// store); everything else is created per request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub routes: Arc<ActionRoutes>,
}

/// Assembled server with routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let store = Arc::new(MemoryUserStore::default());
        let state = AppState {
            users: Arc::new(UserService::new(store)),
            routes: Arc::new(ActionRoutes),
        };

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health_handler));
        }

        app = app.merge(users::user_router(state));

        app = app.layer(TraceLayer::new_for_http());

        Self { router: app, listen_address }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

async fn health_handler() -> (http::StatusCode, &'static str) {
    (http::StatusCode::OK, "ok")
}
