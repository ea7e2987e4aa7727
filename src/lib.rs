//! companydb - HTTP/JSON data-access service over the COMPANY schema

pub mod cli;
pub mod config;
pub mod db;
pub mod http_server;
pub mod model;
pub mod reports;
pub mod store;
