use clap::{Parser, ValueEnum};
use erudite_core::domain::common::{DatabaseBackend, DatabaseConfig, EruditeConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "erudite-api", version, about = "Classroom equipment, lessons and recordings API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 6000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api/erudite`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatabaseBackendArg {
    Mongo,
    Memory,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-backend", env = "DATABASE_BACKEND", value_enum, default_value_t = DatabaseBackendArg::Mongo)]
    pub backend: DatabaseBackendArg,

    #[arg(long = "mongo-db-url", env = "MONGO_DB_URL", default_value = "mongodb://localhost:27017")]
    pub url: String,

    #[arg(long = "mongo-db-name", env = "MONGO_DB_NAME", default_value = "erudite")]
    pub name: String,

    /// Forces the test database name.
    #[arg(long = "testing", env = "TESTING", default_value_t = false)]
    pub testing: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<DatabaseBackendArg> for DatabaseBackend {
    fn from(value: DatabaseBackendArg) -> Self {
        match value {
            DatabaseBackendArg::Mongo => DatabaseBackend::Mongo,
            DatabaseBackendArg::Memory => DatabaseBackend::Memory,
        }
    }
}

impl From<Args> for EruditeConfig {
    fn from(args: Args) -> Self {
        EruditeConfig {
            database: DatabaseConfig::new(
                args.database.backend.into(),
                args.database.url,
                args.database.name,
                args.database.testing,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use erudite_core::domain::common::TEST_DATABASE_NAME;

    use super::*;

    #[test]
    fn defaults_are_usable_without_environment() {
        let args = Args::parse_from(["erudite-api"]);

        assert_eq!(args.server.port, 6000);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.database.backend, DatabaseBackendArg::Mongo);
        assert_eq!(args.log.filter, "info");
    }

    #[test]
    fn testing_flag_switches_database() {
        let args = Args::parse_from([
            "erudite-api",
            "--database-backend",
            "memory",
            "--mongo-db-name",
            "erudite",
            "--testing",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = EruditeConfig::from(args);
        assert_eq!(config.database.backend, DatabaseBackend::Memory);
        assert_eq!(config.database.name, TEST_DATABASE_NAME);
    }
}
