//! Headless listing-submission form.
//!
//! Owns one [`ListingDraft`], validates it on submit and posts it through a
//! [`ListingApi`]. Collaborators (API, locale, auth session) come in through
//! the constructor.

pub mod state;
pub mod validation;

pub use state::{FormState, SubmitOutcome, SubmitStep, SubmitTicket};
pub use validation::{validate_draft, ErrorCode, Field, FieldError, ValidationReport};

use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

use crate::api::ListingApi;
use crate::context::SessionContext;
use crate::error::{ApiError, FormError};
use crate::i18n;
use crate::models::{Category, Condition, CreatedListing, ListingDraft};
use crate::notify::Notification;
use crate::routes::Route;

pub struct ListingForm {
    categories: Vec<Category>,
    api: Arc<dyn ListingApi>,
    context: SessionContext,
    draft: ListingDraft,
    state: FormState,
    errors: ValidationReport,
    notifications: Vec<Notification>,
    last_ticket: u64,
    /// Alive while the ticket of the pending submission exists
    pending: Weak<()>,
}

impl ListingForm {
    /// Create a form in `Editing` with an empty draft
    pub fn new(categories: Vec<Category>, api: Arc<dyn ListingApi>, context: SessionContext) -> Self {
        Self {
            categories,
            api,
            context,
            draft: ListingDraft::default(),
            state: FormState::Editing,
            errors: ValidationReport::default(),
            notifications: Vec::new(),
            last_ticket: 0,
            pending: Weak::new(),
        }
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Errors from the last submit attempt, minus fields edited since
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .for_field(field)
            .map(|e| e.message(self.context.locale))
    }

    /// `(id, name)` pairs for the category selection, in supplied order
    pub fn category_options(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect()
    }

    pub fn condition_options(&self) -> Vec<(Condition, &'static str)> {
        Condition::ALL
            .into_iter()
            .map(|c| (c, i18n::condition_label(self.context.locale, c)))
            .collect()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain queued notifications once the host has shown them
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Submit control state; disabled while a request is in flight
    pub fn is_submit_enabled(&self) -> bool {
        if self.state.is_navigated() {
            false
        } else if self.state.is_submitting() {
            self.pending_abandoned()
        } else {
            matches!(self.state, FormState::Editing)
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), FormError> {
        let title = title.into();
        self.edit(Field::Title, |d| d.title = title)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), FormError> {
        let description = description.into();
        self.edit(Field::Description, |d| d.description = description)
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), FormError> {
        self.edit(Field::Price, |d| d.price = price)
    }

    /// Set the price from raw input text. Blank or unparseable text stores
    /// NaN, which validation reports as "not a number".
    pub fn set_price_input(&mut self, input: &str) -> Result<(), FormError> {
        let price = input.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.set_price(price)
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> Result<(), FormError> {
        let location = location.into();
        self.edit(Field::Location, |d| d.location = location)
    }

    pub fn select_category(&mut self, category_id: impl Into<String>) -> Result<(), FormError> {
        let category_id = category_id.into();
        self.edit(Field::CategoryId, |d| d.category_id = category_id)
    }

    pub fn select_condition(&mut self, condition: Condition) -> Result<(), FormError> {
        self.edit(Field::Condition, |d| d.condition = condition)
    }

    pub fn set_offers_shipping(&mut self, offers_shipping: bool) -> Result<(), FormError> {
        self.edit(Field::OffersShipping, |d| d.offers_shipping = offers_shipping)
    }

    /// Flip `offers_shipping` and return the new value
    pub fn toggle_offers_shipping(&mut self) -> Result<bool, FormError> {
        let value = !self.draft.offers_shipping;
        self.set_offers_shipping(value)?;
        Ok(value)
    }

    pub fn set_price_negotiable(&mut self, price_negotiable: bool) -> Result<(), FormError> {
        self.edit(Field::PriceNegotiable, |d| d.price_negotiable = price_negotiable)
    }

    /// Flip `price_negotiable` and return the new value
    pub fn toggle_price_negotiable(&mut self) -> Result<bool, FormError> {
        let value = !self.draft.price_negotiable;
        self.set_price_negotiable(value)?;
        Ok(value)
    }

    /// Check the current draft without touching form state
    pub fn validate(&self) -> ValidationReport {
        validate_draft(&self.draft, &self.categories)
    }

    /// Validate and, if the draft passes, enter `Submitting`.
    ///
    /// The returned ticket holds the draft to send; the caller must hand the
    /// API result back through [`ListingForm::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<SubmitStep, FormError> {
        self.ensure_open()?;
        self.transition(FormState::Validating);

        let report = self.validate();
        if !report.is_valid() {
            info!("Submit blocked: {} invalid field(s)", report.len());
            self.errors = report.clone();
            self.transition(FormState::Editing);
            return Ok(SubmitStep::Invalid(report));
        }

        self.errors = ValidationReport::default();
        self.last_ticket += 1;
        let id = self.last_ticket;
        let live = Arc::new(());
        self.pending = Arc::downgrade(&live);
        self.transition(FormState::Submitting { ticket: id });

        Ok(SubmitStep::Ready(SubmitTicket {
            id,
            draft: self.draft.clone(),
            _live: live,
        }))
    }

    /// Apply the API result of a pending submission
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<CreatedListing, ApiError>,
    ) -> Result<SubmitOutcome, FormError> {
        self.check_ticket(&ticket)?;

        match result {
            Ok(created) => {
                let route = Route::ListingDetail(created.id.clone());
                info!("Listing {} created, navigating to {}", created.id, route);
                self.notifications
                    .push(Notification::listing_created(self.context.locale));
                self.transition(FormState::Navigated {
                    listing_id: created.id.clone(),
                    route: route.clone(),
                });
                Ok(SubmitOutcome::Created {
                    listing_id: created.id,
                    route,
                })
            }
            Err(e) => {
                warn!("Listing submission to {} failed: {}", self.api.endpoint_name(), e);
                self.notifications
                    .push(Notification::listing_failed(self.context.locale));
                self.transition(FormState::Editing);
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Validate, send one creation request and apply its result
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let ticket = match self.begin_submit()? {
            SubmitStep::Invalid(report) => return Ok(SubmitOutcome::Invalid(report)),
            SubmitStep::Ready(ticket) => ticket,
        };

        let result = {
            let mut guard = AbandonGuard {
                state: &mut self.state,
                armed: true,
            };
            let result = self
                .api
                .create_listing(ticket.draft(), &self.context)
                .await;
            guard.armed = false;
            result
        };

        self.finish_submit(ticket, result)
    }

    /// Give up on a pending submission without a result; back to `Editing`
    pub fn abandon_submit(&mut self, ticket: SubmitTicket) -> Result<(), FormError> {
        self.check_ticket(&ticket)?;
        info!("Submission {} abandoned", ticket.id);
        self.transition(FormState::Editing);
        Ok(())
    }

    /// Back to the initial draft; the "try again" action after an error
    pub fn reset(&mut self) -> Result<(), FormError> {
        self.ensure_open()?;
        self.draft = ListingDraft::default();
        self.errors = ValidationReport::default();
        self.notifications.clear();
        debug!("Form reset");
        Ok(())
    }

    fn check_ticket(&self, ticket: &SubmitTicket) -> Result<(), FormError> {
        match &self.state {
            FormState::Submitting { ticket: pending } if *pending == ticket.id => Ok(()),
            FormState::Navigated { .. } => Err(FormError::AlreadyNavigated),
            _ => Err(FormError::StaleTicket),
        }
    }

    /// The pending ticket was dropped without being finished
    fn pending_abandoned(&self) -> bool {
        self.pending.strong_count() == 0
    }

    fn ensure_open(&mut self) -> Result<(), FormError> {
        if self.state.is_submitting() && self.pending_abandoned() {
            warn!("Pending submission ticket was dropped, back to editing");
            self.transition(FormState::Editing);
        }

        match self.state {
            FormState::Submitting { .. } => Err(FormError::SubmitInProgress),
            FormState::Navigated { .. } => Err(FormError::AlreadyNavigated),
            FormState::Editing | FormState::Validating => Ok(()),
        }
    }

    fn edit(&mut self, field: Field, apply: impl FnOnce(&mut ListingDraft)) -> Result<(), FormError> {
        self.ensure_open()?;
        apply(&mut self.draft);
        self.errors.clear_field(field);
        Ok(())
    }

    fn transition(&mut self, next: FormState) {
        debug!("Form state: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}

/// Puts the form back to `Editing` when a `submit` future is dropped
/// before the listing API answers
struct AbandonGuard<'a> {
    state: &'a mut FormState,
    armed: bool,
}

impl Drop for AbandonGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.state.is_submitting() {
            warn!("Submission abandoned before the listing API answered");
            *self.state = FormState::Editing;
        }
    }
}
