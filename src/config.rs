use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::api::ApiSettings;
use crate::context::{AuthSession, SessionContext};
use crate::i18n::Locale;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
    pub locale: Locale,
    pub auth_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            api_url: env::var("LISTING_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            timeout_secs: env::var("LISTING_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("LISTING_API_TIMEOUT_SECS must be a whole number of seconds")?,
            locale: env::var("LISTING_LOCALE")
                .unwrap_or_else(|_| "es".to_string())
                .parse()
                .context("LISTING_LOCALE must be `es` or `en`")?,
            auth_token: env::var("LISTING_AUTH_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
        })
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            timeout: Duration::from_secs(self.timeout_secs),
            ..ApiSettings::with_base_url(self.api_url.clone())
        }
    }

    pub fn session_context(&self) -> SessionContext {
        let context = SessionContext::new(self.locale);
        match &self.auth_token {
            Some(token) => context.with_session(AuthSession::bearer(token.clone())),
            None => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_api_settings_and_session() {
        let config = Config {
            api_url: "https://buscadis.example".to_string(),
            timeout_secs: 5,
            locale: Locale::En,
            auth_token: Some("secret".to_string()),
        };

        let settings = config.api_settings();
        assert_eq!(settings.create_url(), "https://buscadis.example/api/listings");
        assert_eq!(settings.timeout, Duration::from_secs(5));

        let context = config.session_context();
        assert_eq!(context.locale, Locale::En);
        assert_eq!(context.access_token(), Some("secret"));
    }
}
