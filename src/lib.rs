//! company-registry - REST API for company records
//!
//! `GET/POST /companies` and `GET/PUT/DELETE /companies/:code`, each backed
//! by one parameterized statement against the `companies` table.

pub mod cli;
pub mod companies;
pub mod config;
pub mod http_server;
pub mod observability;
