//! # HTTP Server
//!
//! Axum router assembly and serving loop: the static index page, the
//! five report endpoints, and the per-table CRUD routes, behind CORS and
//! request tracing layers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::db::Database;

use super::{
    department_routes, dependent_routes, dept_location_routes, employee_routes, project_routes,
    report_routes, works_on_routes,
};

const INDEX_HTML: &str = "<!DOCTYPE html>\n<html>\n<head><title>companydb</title></head>\n<body>\n<h1>companydb</h1>\n<p>Company data-access API. Reports: /high_dept_salary, /dept_details,\n/project_details, /projects_multiple_employees, /employee_manager_details.</p>\n</body>\n</html>\n";

/// HTTP server over a shared [`Database`]
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ServerConfig, db: Arc<Database>) -> Self {
        let router = Self::build_router(&config, db);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, db: Arc<Database>) -> Router {
        // Permissive CORS when no origins are configured (development)
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(index))
            .merge(report_routes::routes())
            .merge(employee_routes::routes())
            .merge(department_routes::routes())
            .merge(dept_location_routes::routes())
            .merge(project_routes::routes())
            .merge(works_on_routes::routes())
            .merge(dependent_routes::routes())
            .with_state(db)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting companydb HTTP server");
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_server() -> HttpServer {
        let db = Arc::new(Database::open_in_memory().unwrap());
        HttpServer::new(ServerConfig::default(), db)
    }

    #[test]
    fn test_server_creation() {
        let server = create_test_server();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = create_test_server();
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
