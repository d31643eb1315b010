//! # HTTP Server Module
//!
//! Axum server for the companies API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/companies` - List and create companies
//! - `/companies/:code` - Read, update and delete one company

pub mod company_routes;
pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{build_router, HttpServer};
