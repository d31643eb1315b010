//! # HTTP Server
//!
//! Combines the health and company routers with CORS and request tracing.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::companies::{CompanyService, CompanyStore};
use crate::observability::http_trace_layer;

use super::company_routes::company_routes;
use super::config::HttpServerConfig;
use super::health_routes::{health_routes, not_found_fallback};

/// HTTP server for the companies API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new<S: CompanyStore + 'static>(service: Arc<CompanyService<S>>) -> Self {
        Self::with_config(HttpServerConfig::default(), service)
    }

    /// Create a server with custom configuration
    pub fn with_config<S: CompanyStore + 'static>(
        config: HttpServerConfig,
        service: Arc<CompanyService<S>>,
    ) -> Self {
        let router = build_router(&config, service);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        tracing::info!(addr = %listener.local_addr()?, "companies API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router<S: CompanyStore + 'static>(
    config: &HttpServerConfig,
    service: Arc<CompanyService<S>>,
) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/companies", company_routes(service))
        .fallback(not_found_fallback)
        .layer(cors_layer(config))
        .layer(http_trace_layer())
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companies::InMemoryCompanyStore;

    fn test_service() -> Arc<CompanyService<InMemoryCompanyStore>> {
        Arc::new(CompanyService::new(InMemoryCompanyStore::new()))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(test_service());
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, test_service());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config, test_service()).router();
    }
}
