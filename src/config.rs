use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime settings, resolved from defaults overlaid with environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub loglevel: String,
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: "sqlite:vulnlab.db".to_string(),
            loglevel: "info".to_string(),
            body_limit: 64 * 1024,
        }
    }
}

impl Config {
    /// Reads `PORT`, `DATABASE_URL`, `LOGLEVEL` and `BODY_LIMIT` from the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&[
            "port",
            "database_url",
            "loglevel",
            "body_limit",
        ]))
    }
}
