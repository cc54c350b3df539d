use std::env;

pub const DEFAULT_REDIRECT_URL: &str = "https://www.example.com";
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8080",
];

/// Immutable relay configuration, read once at process start (or once per
/// function invocation) and passed into every handler.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub redirect_url: String,
    pub allowed_origins: Vec<String>,
    pub port: u16,
}

impl RelayConfig {
    /// Reads the `REDIRECT_URL`, `ALLOWED_ORIGINS` and `PORT` overrides,
    /// substituting the built-in defaults for any that are absent.
    ///
    /// The redirect target is not validated here; it is checked each time a
    /// redirect is actually produced.
    pub fn from_env() -> Self {
        Self {
            redirect_url: env::var("REDIRECT_URL")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URL.to_owned()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.map(str::to_owned).to_vec()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            redirect_url: DEFAULT_REDIRECT_URL.to_owned(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(str::to_owned).to_vec(),
            port: DEFAULT_PORT,
        }
    }
}

fn split_origins(origins: &str) -> Vec<String> {
    origins.split(',').map(str::to_owned).collect()
}
