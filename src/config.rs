use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration, sourced from the environment with serde defaults.
///
/// Recognized variables: `PORT`, `SESSION_SECRET`, `ENVIRONMENT`,
/// `DATABASE_URL`, `LOGLEVEL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub session_secret: String,
    pub environment: String,
    pub database_url: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            // Well-known placeholder; override in any real deployment.
            session_secret: "cyberclash-change-me-in-production".to_string(),
            environment: "development".to_string(),
            database_url: "sqlite:./app.db?mode=rwc".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw())
            .extract()
    }

    /// Production mode turns on the session cookie's `Secure` flag.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("invalid configuration in environment")
});
