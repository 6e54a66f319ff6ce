use std::env;

/// AppConfig
///
/// Holds the portal's configuration. Immutable once loaded and pulled into
/// handlers through `FromRef`, like every other piece of `AppState`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format.
    pub env: Env,
    // Interface the HTTP listener binds to.
    pub host: String,
    // Port the HTTP listener binds to.
    pub port: u16,
}

/// Env
///
/// Runtime context: `Local` logs human-readable output, `Production` logs JSON.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

impl Default for AppConfig {
    /// default
    ///
    /// Local settings on the standard port. Used by tests to build state
    /// without touching environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads `APP_ENV`, `HOST` and `PORT` from the environment, falling back to
    /// the defaults for anything unset.
    ///
    /// # Panics
    /// Panics if `PORT` is set but is not a valid port number, so a typo never
    /// silently starts the server somewhere unexpected.
    pub fn load() -> Self {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .unwrap_or_else(|_| panic!("FATAL: PORT must be a valid port number, got `{}`", raw)),
            Err(_) => DEFAULT_PORT,
        };

        Self { env, host, port }
    }

    /// The `host:port` string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
