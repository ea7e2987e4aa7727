//! # HTTP Server
//!
//! Request routing and JSON serialization, a thin pass-through over the
//! store and report layers.

mod department_routes;
mod dependent_routes;
mod dept_location_routes;
mod employee_routes;
mod errors;
mod project_routes;
mod query;
mod report_routes;
mod response;
mod server;
mod works_on_routes;

pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
