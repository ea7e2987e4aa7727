//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::db::Database;
use crate::http_server::HttpServer;

use super::errors::{CliError, CliResult};

/// Write a default config file and create the database it points at.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    let config = ServerConfig::default();
    fs::write(config_path, serde_json::to_string_pretty(&config)?)?;
    Database::open(&config.database_path)?;

    println!(
        "Initialized {} (database at {})",
        config_path.display(),
        config.database_path
    );
    Ok(())
}

/// Load the config, open the database, and serve until shutdown.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    init_tracing();

    let db = Arc::new(Database::open(&config.database_path)?);
    let server = HttpServer::new(config, db);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("companydb=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_existing_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("companydb.json");
        fs::write(&path, "{}").unwrap();

        let result = init(&path);
        assert!(matches!(result, Err(CliError::AlreadyInitialized(_))));
    }

    #[test]
    fn test_default_config_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("companydb.json");
        fs::write(&path, serde_json::to_string_pretty(&ServerConfig::default()).unwrap()).unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.port, ServerConfig::default().port);
        assert_eq!(config.database_path, ServerConfig::default().database_path);
    }
}
