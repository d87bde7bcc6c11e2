use crate::api::traits::ListingApi;
use crate::api::types::ApiSettings;
use crate::context::SessionContext;
use crate::error::ApiError;
use crate::models::{CreatedListing, ListingDraft};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Listing API reached over plain HTTP
pub struct HttpListingApi {
    client: Client,
    settings: ApiSettings,
}

impl HttpListingApi {
    /// Create a client for the default local marketplace
    pub fn new() -> Result<Self, ApiError> {
        Self::with_settings(ApiSettings::default())
    }

    /// Create a client with custom connection settings
    pub fn with_settings(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    fn parse_created(body: &str) -> Result<CreatedListing, ApiError> {
        let created: CreatedListing =
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        if created.id.trim().is_empty() {
            return Err(ApiError::Decode("response carries an empty id".to_string()));
        }

        Ok(created)
    }
}

#[async_trait]
impl ListingApi for HttpListingApi {
    async fn create_listing(
        &self,
        draft: &ListingDraft,
        context: &SessionContext,
    ) -> Result<CreatedListing, ApiError> {
        let url = self.settings.create_url();

        debug!("POST {} (category {})", url, draft.category_id);

        let mut request = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(draft);

        if let Some(token) = context.access_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Listing API returned status: {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        debug!("Received {} bytes from listing API", body.len());

        let created = Self::parse_created(&body)?;

        info!("Listing {} created", created.id);
        Ok(created)
    }

    fn endpoint_name(&self) -> String {
        self.settings.create_url()
    }
}
