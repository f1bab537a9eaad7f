use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "TODO_HOST";
    pub const PORT: &str = "TODO_PORT";
    /// Path to the SQLite file. `:memory:` keeps everything in memory.
    pub const DATABASE_PATH: &str = "TODO_DATABASE_PATH";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 5000;
    pub const DATABASE_PATH: &str = "./.db/todolist.db";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string());

        let port = lookup(env_vars::PORT)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::PORT);

        let database_path = lookup(env_vars::DATABASE_PATH)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::DATABASE_PATH.to_string());

        Self {
            host,
            port,
            database_path,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
