//! # Companies Resource
//!
//! List, read, create, update and delete over the `companies` table.
//! The service is storage-agnostic; `PgCompanyStore` is the production
//! store and `InMemoryCompanyStore` mirrors its constraints for tests.

pub mod errors;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod response;
pub mod service;
pub mod store;

pub use errors::{CompanyError, CompanyResult, ErrorResponse};
pub use memory::InMemoryCompanyStore;
pub use model::{Company, CompanyChanges, CompanySummary, NewCompany};
pub use postgres::PgCompanyStore;
pub use response::{CompaniesResponse, CompanyResponse, StatusResponse};
pub use service::CompanyService;
pub use store::CompanyStore;
