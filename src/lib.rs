pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod i18n;
pub mod models;
pub mod notify;
pub mod routes;

pub use api::{ApiSettings, HttpListingApi, ListingApi};
pub use context::{AuthSession, SessionContext};
pub use error::{ApiError, FormError, ParseError};
pub use form::{FormState, ListingForm, SubmitOutcome};
pub use models::{Category, Condition, CreatedListing, ListingDraft};
pub use routes::Route;
