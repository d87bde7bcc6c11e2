pub mod client;
pub mod traits;
pub mod types;

pub use client::HttpListingApi;
pub use traits::ListingApi;
pub use types::ApiSettings;
