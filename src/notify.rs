use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{self, Locale, Notice};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Transient toast shown to the user; never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn from_notice(locale: Locale, notice: Notice, variant: NotificationVariant) -> Self {
        let (title, description) = i18n::notice_text(locale, notice);
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
            created_at: Utc::now(),
        }
    }

    pub fn listing_created(locale: Locale) -> Self {
        Self::from_notice(locale, Notice::ListingCreated, NotificationVariant::Default)
    }

    /// Generic failure; transport, rejection and server errors all look alike
    pub fn listing_failed(locale: Locale) -> Self {
        Self::from_notice(locale, Notice::ListingFailed, NotificationVariant::Destructive)
    }

    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
