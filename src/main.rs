use anyhow::{Context, Result};
use clap::Parser;
use listing_form::config::Config;
use listing_form::form::SubmitOutcome;
use listing_form::i18n::{self, Locale};
use listing_form::{Category, HttpListingApi, ListingDraft, ListingForm};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validate a listing draft and publish it to the marketplace
#[derive(Parser, Debug)]
#[command(name = "listing-form", version)]
struct Args {
    /// JSON array of `{id, name, slug}` categories
    #[arg(long)]
    categories: PathBuf,

    /// JSON listing draft (camelCase keys)
    #[arg(long)]
    draft: PathBuf,

    /// Marketplace base URL (overrides LISTING_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Message language, `es` or `en` (overrides LISTING_LOCALE)
    #[arg(long)]
    locale: Option<Locale>,

    /// Bearer token of the signed-in user (overrides LISTING_AUTH_TOKEN)
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(token) = args.token {
        config.auth_token = Some(token);
    }

    let categories: Vec<Category> = read_json(&args.categories).await?;
    let draft: ListingDraft = read_json(&args.draft).await?;

    info!("Loaded {} categories", categories.len());

    let api = HttpListingApi::with_settings(config.api_settings())
        .context("Failed to set up listing API client")?;
    let context = config.session_context();
    if context.session.is_none() {
        info!("No auth token configured, submitting anonymously");
    }

    let mut form = ListingForm::new(categories, Arc::new(api), context);
    form.set_title(draft.title)?;
    form.set_description(draft.description)?;
    form.set_price(draft.price)?;
    form.set_location(draft.location)?;
    form.select_category(draft.category_id)?;
    form.select_condition(draft.condition)?;
    form.set_offers_shipping(draft.offers_shipping)?;
    form.set_price_negotiable(draft.price_negotiable)?;

    info!("Submitting listing \"{}\"", form.draft().title);

    let outcome = form.submit().await?;

    for notification in form.take_notifications() {
        println!("[{}] {}", notification.title, notification.description);
    }

    match outcome {
        SubmitOutcome::Invalid(report) => {
            let locale = form.context().locale;
            for (field, message) in report.messages(locale) {
                println!("  {}: {}", i18n::field_label(locale, field), message);
            }
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Created { listing_id, route } => {
            println!("Listing {} published: {}", listing_id, route);
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Failed => Ok(ExitCode::FAILURE),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
