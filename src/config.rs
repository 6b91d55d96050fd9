use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

pub const DEFAULT_SEARCH_URL: &str = "https://minsante.cm/site/?q=fr/search/node/ambulance";
pub const DEFAULT_ORIGIN: &str = "https://minsante.cm";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        host: get_env_or_default("HOST", "0.0.0.0"),
        port: get_parsed_or_default("PORT", 8000),
        search_url: get_env_or_default("MINSANTE_SEARCH_URL", DEFAULT_SEARCH_URL),
        origin: get_env_or_default("MINSANTE_ORIGIN", DEFAULT_ORIGIN),
        log_level: get_parsed_or_default("LOG_LEVEL", tracing::Level::INFO),
    }
});

#[derive(Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Search page on the ministry site listing ambulance results.
    pub search_url: String,
    /// Prepended to the relative links found on the search page.
    pub origin: String,
    pub log_level: tracing::Level,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// Runs before the subscriber exists, so warnings go to stderr directly.
fn get_parsed_or_default<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            eprintln!("invalid value {raw:?} for {key}, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_uses_default() {
        let port: u16 = get_parsed_or_default("AMBULANCE_API_TEST_UNSET_PORT", 8000);
        assert_eq!(port, 8000);
        let host = get_env_or_default("AMBULANCE_API_TEST_UNSET_HOST", "0.0.0.0");
        assert_eq!(host, "0.0.0.0");
    }
}
