use std::sync::Arc;

use crate::form::validation::ValidationReport;
use crate::models::ListingDraft;
use crate::routes::Route;

/// Lifecycle of a listing form.
///
/// `Editing -> Validating -> Editing | Submitting -> Navigated | Editing`.
/// `Navigated` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Validating,
    Submitting { ticket: u64 },
    Navigated { listing_id: String, route: Route },
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting { .. })
    }

    pub fn is_navigated(&self) -> bool {
        matches!(self, FormState::Navigated { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormState::Editing => "editing",
            FormState::Validating => "validating",
            FormState::Submitting { .. } => "submitting",
            FormState::Navigated { .. } => "navigated",
        }
    }
}

/// Pending submission handed out by `ListingForm::begin_submit`.
/// Carries the draft exactly as it was when the submit started.
///
/// Dropping a ticket without finishing or abandoning it releases the form on
/// its next operation.
#[derive(Debug)]
pub struct SubmitTicket {
    pub(crate) id: u64,
    pub(crate) draft: ListingDraft,
    pub(crate) _live: Arc<()>,
}

impl SubmitTicket {
    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }
}

/// First half of a submit
#[derive(Debug)]
pub enum SubmitStep {
    /// Blocked by validation; no request may be sent
    Invalid(ValidationReport),
    /// Send exactly this draft, then call `finish_submit`
    Ready(SubmitTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationReport),
    Created { listing_id: String, route: Route },
    Failed,
}
