//! Backend base URL from environment variables.
//!
//! The wasm bundle has no process environment, so the value is baked in at
//! compile time. Native builds also honour the runtime environment and a
//! `.env` file.
//!
//! A missing base URL is not fatal. It is logged on every request and the
//! request goes out with a bare path, which then fails as a transport error.

/// Environment variable holding the backend base URL.
pub const BASE_URL_VAR: &str = "USERMANAGEMENT_BASE_URL";

/// Backend location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
}

impl ApiConfig {
    /// Config pointing at `base_url`. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url: Some(base_url),
        }
    }

    /// Config with no base URL.
    pub fn unset() -> Self {
        Self { base_url: None }
    }

    /// Resolve the base URL from the environment.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(BASE_URL_VAR) {
                return Self::new(url);
            }
        }

        match option_env!("USERMANAGEMENT_BASE_URL") {
            Some(url) => Self::new(url),
            None => Self::unset(),
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        match self.base_url.as_deref() {
            Some(base) => format!("{base}{path}"),
            None => {
                tracing::error!("{} is not defined", BASE_URL_VAR);
                path.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("https://reqres.in/");
        assert_eq!(config.base_url(), Some("https://reqres.in"));
        assert_eq!(config.endpoint("/api/users/2"), "https://reqres.in/api/users/2");
    }

    #[test]
    fn test_unset_base_keeps_bare_path() {
        let config = ApiConfig::unset();
        assert_eq!(config.endpoint("/api/users"), "/api/users");
    }
}
