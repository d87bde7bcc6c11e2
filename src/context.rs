use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Signed-in user as handed over by the authentication provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: Option<String>,
    pub access_token: String,
}

impl AuthSession {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            user_id: None,
            access_token: access_token.into(),
        }
    }
}

/// Per-request context passed to the form and the listing API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionContext {
    pub locale: Locale,
    pub session: Option<AuthSession>,
}

impl SessionContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            session: None,
        }
    }

    pub fn with_session(mut self, session: AuthSession) -> Self {
        self.session = Some(session);
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}
