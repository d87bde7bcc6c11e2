use crate::context::SessionContext;
use crate::error::ApiError;
use crate::models::{CreatedListing, ListingDraft};
use async_trait::async_trait;

/// Listing-creation endpoint the form submits to.
/// The HTTP client implements it; tests swap in a recording fake.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Send one creation request for the draft
    async fn create_listing(
        &self,
        draft: &ListingDraft,
        context: &SessionContext,
    ) -> Result<CreatedListing, ApiError>;

    /// Get a printable name of the endpoint, for logs
    fn endpoint_name(&self) -> String;
}
