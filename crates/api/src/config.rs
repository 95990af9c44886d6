use std::fmt::Display;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Process settings read once at startup.
///
/// Every field except the JWT secret falls back to a local-development
/// default, so `JWT_SECRET` and `DATABASE_URL` are the only variables a
/// developer has to set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins the browser frontend is served from.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Grace period for closing the pool after the listener stops.
    pub shutdown_timeout_secs: u64,
    pub jwt: JwtConfig,
}

/// Default origin of the Streamlit frontend.
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8501";

impl ServerConfig {
    /// Read `HOST`, `PORT`, `CORS_ORIGINS`, `REQUEST_TIMEOUT_SECS`,
    /// `SHUTDOWN_TIMEOUT_SECS` and the JWT settings.
    ///
    /// # Panics
    ///
    /// Panics if a variable is set but does not parse.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins: parse_origins(&env_or(
                "CORS_ORIGINS",
                DEFAULT_CORS_ORIGIN.to_string(),
            )),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_or("SHUTDOWN_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Parse `key` from the environment, or return `default` when it is unset.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn unset_variable_uses_default() {
        let port: u16 = env_or("STUDYBUDDY_TEST_SURELY_UNSET_VAR", 4242);
        assert_eq!(port, 4242);
    }
}
