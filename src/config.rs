use actix_web::cookie::Key;
use anyhow::Context;
use tracing::warn;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const LOGIN_PAGE: &str = "/index.jsp";

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_pool_size: Option<u32>,
    pub bind: String,
    pub base_path: BasePath,
    pub session_key: Key,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL").context("DATABASE_URL not found")?;

        let db_pool_size = var("DB_POOL_SIZE")
            .map(|size| size.parse::<u32>())
            .transpose()
            .context("DB_POOL_SIZE is not a number")?;

        let bind = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let base_path = BasePath::new(var("APP_BASE_PATH").unwrap_or_default());

        let session_key = match var("SESSION_KEY").map(|key| Key::try_from(key.as_bytes())) {
            Some(Ok(key)) => key,
            Some(Err(_)) => {
                warn!("SESSION_KEY is shorter than 64 bytes, using a random key");
                Key::generate()
            }
            None => {
                warn!("SESSION_KEY not set, using a random key");
                Key::generate()
            }
        };

        Ok(Self {
            database_url,
            db_pool_size,
            bind,
            base_path,
            session_key,
        })
    }
}

/// The path the application is mounted under, e.g. `/hms`. Empty when the
/// application sits at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new<S: AsRef<str>>(path: S) -> Self {
        let path = path.as_ref().trim().trim_end_matches('/');
        if path.is_empty() || path.starts_with('/') {
            Self(path.to_string())
        } else {
            Self(format!("/{}", path))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn login_page(&self) -> String {
        format!("{}{}", self.0, LOGIN_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn database_url_is_required() {
        assert!(config_from(&[]).is_err());
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("DATABASE_URL", "mysql://localhost/hms")]).unwrap();
        assert_eq!(config.database_url, "mysql://localhost/hms");
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.db_pool_size, None);
        assert_eq!(config.base_path, BasePath::default());
    }

    #[test]
    fn explicit_values_are_read() {
        let key = "k".repeat(64);
        let config = config_from(&[
            ("DATABASE_URL", "mysql://localhost/hms"),
            ("DB_POOL_SIZE", "4"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("APP_BASE_PATH", "/hms/"),
            ("SESSION_KEY", key.as_str()),
        ])
        .unwrap();
        assert_eq!(config.db_pool_size, Some(4));
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.base_path.as_str(), "/hms");
        assert_eq!(config.session_key.master(), key.as_bytes());
    }

    #[test]
    fn bad_pool_size_is_rejected() {
        let res = config_from(&[("DATABASE_URL", "mysql://localhost/hms"), ("DB_POOL_SIZE", "many")]);
        assert!(res.is_err());
    }

    #[test]
    fn login_page_is_relative_to_base_path() {
        assert_eq!(BasePath::new("").login_page(), "/index.jsp");
        assert_eq!(BasePath::new("/").login_page(), "/index.jsp");
        assert_eq!(BasePath::new("/hms").login_page(), "/hms/index.jsp");
        assert_eq!(BasePath::new("hms/").login_page(), "/hms/index.jsp");
    }
}
