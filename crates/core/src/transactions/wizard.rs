//! Three-step "new transaction" wizard
//!
//! Holds the draft, the current step, the visible errors and the donor
//! type-ahead state. Network calls live in [`TransactionService`], which
//! drives [`TransactionWizard::begin_submit`] and
//! [`TransactionWizard::finish_submit`].
//!
//! [`TransactionService`]: super::TransactionService

use baitulmal_common::validation::ValidationError;
use baitulmal_domain::{CreateTransactionRequest, Donor, Result};
use tracing::debug;

use super::draft::{fields, DraftSeed, TransactionDraft, AMOUNTS_REQUIRED};
use super::submission::route_submission_error;

/// Wizard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Basic,
    Donor,
    Notes,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Donor, Self::Notes];

    /// 1-based position
    pub const fn number(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Donor => 2,
            Self::Notes => 3,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic Information",
            Self::Donor => "Donor Information",
            Self::Notes => "Additional Information",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Basic => "Enter transaction basic details",
            Self::Donor => "Enter donor information",
            Self::Notes => "Enter additional transaction details",
        }
    }

    const fn following(self) -> Option<Self> {
        match self {
            Self::Basic => Some(Self::Donor),
            Self::Donor => Some(Self::Notes),
            Self::Notes => None,
        }
    }

    const fn preceding(self) -> Option<Self> {
        match self {
            Self::Basic => None,
            Self::Donor => Some(Self::Basic),
            Self::Notes => Some(Self::Donor),
        }
    }

    /// Inputs checked before leaving this step
    ///
    /// Donor details are only checked when a pledge was entered.
    pub fn fields(self, draft: &TransactionDraft) -> &'static [&'static str] {
        match self {
            Self::Basic => &[fields::CURRENCY_NAME, fields::CURRENCY_CODE],
            Self::Donor if draft.requires_donor_contact() => &[
                fields::DONOR_NAME,
                fields::DONOR_LAST_NAME,
                fields::DONOR_PHONE_NUMBER,
                fields::DONOR_EMAIL,
                fields::DUE_DATE,
            ],
            Self::Donor => &[],
            Self::Notes => &[fields::DONOR_DESCRIPTION, fields::TRANSACTION_CREATORS_NOTE],
        }
    }
}

/// What the secondary button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelAction {
    Closed,
    WentBack,
}

/// Which contact field a donor search ran against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonorSearch {
    Email,
    Phone,
}

#[derive(Debug, Clone, Default)]
struct Matches {
    term: String,
    donors: Vec<Donor>,
}

/// New-transaction wizard state
#[derive(Debug, Clone)]
pub struct TransactionWizard {
    seed: DraftSeed,
    draft: TransactionDraft,
    step: WizardStep,
    errors: ValidationError,
    open: bool,
    submitting: bool,
    selected_donor: Option<Donor>,
    email_matches: Matches,
    phone_matches: Matches,
}

impl Default for TransactionWizard {
    fn default() -> Self {
        Self::new(DraftSeed::default())
    }
}

impl TransactionWizard {
    pub fn new(seed: DraftSeed) -> Self {
        Self {
            draft: TransactionDraft::seeded(&seed),
            seed,
            step: WizardStep::Basic,
            errors: ValidationError::new(),
            open: false,
            submitting: false,
            selected_donor: None,
            email_matches: Matches::default(),
            phone_matches: Matches::default(),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }

    /// Form-level message shown above the buttons
    pub fn root_error(&self) -> Option<&str> {
        self.errors.first_message(fields::ROOT)
    }

    /// Change the draft. Donor identity fields stay as copied while a known
    /// donor is selected.
    pub fn edit(&mut self, change: impl FnOnce(&mut TransactionDraft)) {
        change(&mut self.draft);
        if let Some(donor) = &self.selected_donor {
            self.draft.fill_from_donor(donor);
        }
    }

    /// Whether "Next" is enabled
    pub fn can_advance(&self) -> bool {
        self.draft.has_valid_amounts()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Creating..."
        } else {
            "Create"
        }
    }

    pub fn cancel_label(&self) -> &'static str {
        match self.step {
            WizardStep::Basic => "Cancel",
            _ => "Back",
        }
    }

    /// Validate the current step and move forward
    ///
    /// Returns `false` and leaves the step unchanged when the step has
    /// errors or neither amount is positive. The last step has no "next".
    pub fn next(&mut self) -> bool {
        let Some(following) = self.step.following() else {
            return false;
        };

        let outcome = self.draft.check_fields(self.step.fields(&self.draft));
        self.errors = outcome.clone().err().unwrap_or_default();

        if !self.draft.has_valid_amounts() {
            self.errors.add_field_error(fields::AMOUNT, AMOUNTS_REQUIRED);
            return false;
        }
        self.draft.normalize_project();

        if outcome.is_err() {
            return false;
        }
        debug!(from = self.step.number(), to = following.number(), "wizard advanced");
        self.step = following;
        true
    }

    /// Go one step back without validating
    pub fn back(&mut self) -> bool {
        match self.step.preceding() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// "Cancel" on the first step closes the wizard; later it acts as "Back"
    pub fn cancel(&mut self) -> CancelAction {
        if self.back() {
            CancelAction::WentBack
        } else {
            self.close();
            CancelAction::Closed
        }
    }

    /// Current text of the field a search runs against
    pub fn search_term(&self, search: DonorSearch) -> &str {
        match search {
            DonorSearch::Email => &self.draft.donor_email,
            DonorSearch::Phone => &self.draft.donor_phone_number,
        }
    }

    /// Whether a donor search should run for `search`
    pub fn wants_matches(&self, search: DonorSearch) -> bool {
        self.selected_donor.is_none() && !self.search_term(search).is_empty()
    }

    /// Store results of a donor search for `term`
    ///
    /// Results for text the user has since changed are dropped.
    pub fn set_matches(&mut self, search: DonorSearch, term: &str, donors: Vec<Donor>) {
        if self.search_term(search) != term {
            debug!(?search, "discarding stale donor matches");
            return;
        }
        let matches = Matches { term: term.to_string(), donors };
        match search {
            DonorSearch::Email => self.email_matches = matches,
            DonorSearch::Phone => self.phone_matches = matches,
        }
    }

    /// Suggestions to show under the email or phone input; empty when the
    /// list is closed
    pub fn matches(&self, search: DonorSearch) -> &[Donor] {
        let matches = match search {
            DonorSearch::Email => &self.email_matches,
            DonorSearch::Phone => &self.phone_matches,
        };
        let current = matches.term == self.search_term(search);
        if self.wants_matches(search) && current {
            &matches.donors
        } else {
            &[]
        }
    }

    /// Use a known donor; closes both suggestion lists
    pub fn select_donor(&mut self, donor: Donor) {
        self.draft.fill_from_donor(&donor);
        self.selected_donor = Some(donor);
        self.email_matches = Matches::default();
        self.phone_matches = Matches::default();
    }

    /// Forget the selected donor; the copied contact details stay editable
    pub fn clear_donor(&mut self) {
        self.selected_donor = None;
        self.draft.donor_id = None;
    }

    pub fn selected_donor(&self) -> Option<&Donor> {
        self.selected_donor.as_ref()
    }

    /// Validate the whole draft and produce the request body
    ///
    /// `None` means the errors were updated and nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<CreateTransactionRequest> {
        if !self.draft.has_valid_amounts() {
            self.errors = ValidationError::field(fields::AMOUNT, AMOUNTS_REQUIRED);
            return None;
        }
        self.errors = self.draft.check();
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(self.draft.to_request())
    }

    /// Apply the backend's answer to a submission
    ///
    /// Success resets the wizard to a fresh seeded draft on the first step
    /// and closes it; failure shows one routed message.
    pub fn finish_submit(&mut self, outcome: &Result<()>) {
        self.submitting = false;
        match outcome {
            Ok(()) => *self = Self::new(self.seed.clone()),
            Err(err) => {
                let routed = route_submission_error(err);
                self.errors = ValidationError::field(routed.field, routed.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use baitulmal_domain::{ApiErrorResponse, ApiFailure, BaitulMalError, EntityMeta};

    use super::*;

    fn donor() -> Donor {
        Donor {
            entity: EntityMeta::with_id("d-1"),
            name: "Sara".into(),
            last_name: "Kovač".into(),
            email: "sara@example.org".into(),
            phone_number: "062555111".into(),
            description: String::new(),
        }
    }

    fn opened() -> TransactionWizard {
        let mut wizard = TransactionWizard::default();
        wizard.open();
        wizard
    }

    #[test]
    fn next_is_blocked_without_amounts() {
        let mut wizard = opened();
        assert!(!wizard.can_advance());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Basic);
        assert_eq!(wizard.errors().first_message(fields::AMOUNT), Some(AMOUNTS_REQUIRED));
    }

    #[test]
    fn amount_only_skips_donor_checks() {
        let mut wizard = opened();
        wizard.edit(|draft| draft.amount = Some(100.0));
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Donor);
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Notes);
        assert!(!wizard.next());
    }

    #[test]
    fn pledge_requires_donor_contact_on_second_step() {
        let mut wizard = opened();
        wizard.edit(|draft| draft.promised_amount = Some(50.0));
        assert!(wizard.next());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Donor);
        assert_eq!(
            wizard.errors().first_message(fields::DONOR_EMAIL),
            Some("Email is required when promised amount is set")
        );
    }

    #[test]
    fn sentinel_project_is_cleared_on_next() {
        let mut wizard = opened();
        wizard.edit(|draft| {
            draft.amount = Some(10.0);
            draft.project_id = Some(baitulmal_domain::constants::ZERO_GUID.into());
        });
        assert!(wizard.next());
        assert_eq!(wizard.draft().project_id, None);
    }

    #[test]
    fn cancel_closes_on_first_step_and_goes_back_later() {
        let mut wizard = opened();
        wizard.edit(|draft| draft.amount = Some(10.0));
        wizard.next();
        assert_eq!(wizard.cancel_label(), "Back");
        assert_eq!(wizard.cancel(), CancelAction::WentBack);
        assert_eq!(wizard.step(), WizardStep::Basic);
        assert_eq!(wizard.cancel(), CancelAction::Closed);
        assert!(!wizard.is_open());
    }

    #[test]
    fn suggestions_follow_current_text_and_selection() {
        let mut wizard = opened();
        wizard.edit(|draft| draft.donor_email = "sara".into());
        assert!(wizard.wants_matches(DonorSearch::Email));
        assert!(!wizard.wants_matches(DonorSearch::Phone));

        wizard.set_matches(DonorSearch::Email, "sa", vec![donor()]);
        assert!(wizard.matches(DonorSearch::Email).is_empty());

        wizard.set_matches(DonorSearch::Email, "sara", vec![donor()]);
        assert_eq!(wizard.matches(DonorSearch::Email).len(), 1);

        wizard.select_donor(donor());
        assert!(wizard.matches(DonorSearch::Email).is_empty());
        assert_eq!(wizard.draft().donor_phone_number, "062555111");
        assert_eq!(wizard.draft().donor_id.as_deref(), Some("d-1"));
    }

    #[test]
    fn selected_donor_fields_are_locked_until_cleared() {
        let mut wizard = opened();
        wizard.select_donor(donor());
        wizard.edit(|draft| draft.donor_name = "Other".into());
        assert_eq!(wizard.draft().donor_name, "Sara");

        wizard.clear_donor();
        assert_eq!(wizard.draft().donor_id, None);
        wizard.edit(|draft| draft.donor_name = "Other".into());
        assert_eq!(wizard.draft().donor_name, "Other");
    }

    #[test]
    fn successful_submit_resets_and_closes() {
        let mut wizard = opened();
        wizard.edit(|draft| draft.amount = Some(75.5));
        wizard.next();
        let request = wizard.begin_submit().unwrap();
        assert_eq!(request.amount, Some(75.5));
        assert_eq!(wizard.submit_label(), "Creating...");

        wizard.finish_submit(&Ok(()));
        assert!(!wizard.is_open());
        assert_eq!(wizard.step(), WizardStep::Basic);
        assert_eq!(wizard.draft(), &TransactionDraft::default());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn failed_submit_routes_message() {
        let mut wizard = opened();
        wizard.edit(|draft| draft.amount = Some(75.0));
        wizard.begin_submit().unwrap();
        let err = BaitulMalError::Api(ApiFailure::from_response(
            400,
            Some(ApiErrorResponse {
                message: Some("Project Id is invalid".into()),
                ..ApiErrorResponse::default()
            }),
        ));
        wizard.finish_submit(&Err(err));
        assert!(wizard.errors().has_field(fields::PROJECT_ID));
        assert!(wizard.is_open());
    }
}
