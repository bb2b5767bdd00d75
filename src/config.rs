use std::env;

/// Runtime settings, read once at startup. Everything has a default so
/// the server runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// How many of the most recent finished games the history log keeps.
    pub history_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            history_capacity: 1000,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `HISTORY_CAPACITY`, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            history_capacity: env::var("HISTORY_CAPACITY")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.history_capacity),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
