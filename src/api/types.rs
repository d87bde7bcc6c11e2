use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection parameters for the listing API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Scheme and host of the marketplace, without trailing path
    pub base_url: String,
    /// Path of the listing-creation route
    pub create_path: String,
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the creation endpoint
    pub fn create_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.create_path.trim_start_matches('/')
        )
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            create_path: "/api/listings".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("listing-form/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_url_joins_without_double_slashes() {
        let settings = ApiSettings::with_base_url("https://buscadis.example/");
        assert_eq!(settings.create_url(), "https://buscadis.example/api/listings");

        let settings = ApiSettings {
            create_path: "v2/listings".to_string(),
            ..ApiSettings::with_base_url("http://127.0.0.1:8080")
        };
        assert_eq!(settings.create_url(), "http://127.0.0.1:8080/v2/listings");
    }
}
