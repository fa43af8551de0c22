pub mod entities;
pub mod services;

/// Database name forced when the service runs in test mode.
pub const TEST_DATABASE_NAME: &str = "testDb";

#[derive(Clone, Debug)]
pub struct EruditeConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseBackend {
    Mongo,
    Memory,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    pub url: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn new(backend: DatabaseBackend, url: String, name: String, testing: bool) -> Self {
        let name = if testing {
            TEST_DATABASE_NAME.to_string()
        } else {
            name
        };

        Self { backend, url, name }
    }
}
