//! Integration tests for the transaction wizard driven by the service
//!
//! **Coverage:**
//! - Amount-only donation walks all three steps and is created
//! - Pledges need donor contact details before leaving the donor step
//! - Donor suggestions: search, stale results, selection
//! - Backend errors are routed to the field they concern

mod support;

use std::sync::Arc;

use baitulmal_core::transactions::{
    fields, DonorSearch, DraftSeed, SubmitOutcome, TransactionService, TransactionWizard,
    WizardStep,
};
use baitulmal_domain::{ApiErrorResponse, ApiFailure, BaitulMalError, Donor, EntityMeta};
use support::gateways::{MockDonorGateway, MockTransactionGateway};
use support::RecordingNotifier;

fn donors() -> Vec<Donor> {
    vec![
        Donor {
            entity: EntityMeta::with_id("d-1"),
            name: "Sara".into(),
            last_name: "Kovač".into(),
            email: "sara@example.org".into(),
            phone_number: "062555111".into(),
            description: "Monthly".into(),
        },
        Donor {
            entity: EntityMeta::with_id("d-2"),
            name: "Emir".into(),
            last_name: "Delić".into(),
            email: "emir@example.org".into(),
            phone_number: "061000999".into(),
            description: String::new(),
        },
    ]
}

struct Fixture {
    service: TransactionService,
    transactions: MockTransactionGateway,
    donors: MockDonorGateway,
    notifier: Arc<RecordingNotifier>,
}

fn fixture() -> Fixture {
    let transactions = MockTransactionGateway::default();
    let donors = MockDonorGateway::new(donors());
    let (query, notifier) = support::query_client();
    let service =
        TransactionService::new(Arc::new(transactions.clone()), Arc::new(donors.clone()), query);
    Fixture { service, transactions, donors, notifier }
}

fn opened() -> TransactionWizard {
    let mut wizard = TransactionWizard::new(DraftSeed::default());
    wizard.open();
    wizard
}

#[tokio::test]
async fn anonymous_donation_is_created() {
    let fx = fixture();
    let mut wizard = opened();
    wizard.edit(|draft| draft.amount = Some(150.5));
    assert!(wizard.next());
    assert!(wizard.next());
    assert_eq!(wizard.step(), WizardStep::Notes);
    wizard.edit(|draft| draft.transaction_creators_note = "cash at the mosque".into());

    let outcome = fx.service.submit(&mut wizard).await;

    assert_eq!(outcome, SubmitOutcome::Created);
    let sent = fx.transactions.created();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].amount, Some(150.5));
    assert_eq!(sent[0].donor_email, None);
    assert_eq!(sent[0].transaction_creators_note.as_deref(), Some("cash at the mosque"));

    assert!(!wizard.is_open());
    assert_eq!(wizard.step(), WizardStep::Basic);
    assert_eq!(wizard.draft().amount, Some(0.0));
    assert_eq!(fx.notifier.titles(), vec!["Transaction created successfully".to_string()]);
}

#[tokio::test]
async fn pledge_without_contact_never_reaches_backend() {
    let fx = fixture();
    let mut wizard = opened();
    wizard.edit(|draft| draft.promised_amount = Some(500.0));

    assert_eq!(fx.service.submit(&mut wizard).await, SubmitOutcome::Invalid);
    assert!(wizard.errors().has_field(fields::DONOR_EMAIL));
    assert!(wizard.errors().has_field(fields::DONOR_PHONE_NUMBER));
    assert!(fx.transactions.created().is_empty());
    assert!(!wizard.is_submitting());
}

#[tokio::test]
async fn donor_suggestions_fill_the_draft() {
    let fx = fixture();
    let mut wizard = opened();
    wizard.edit(|draft| {
        draft.promised_amount = Some(200.0);
        draft.donor_email = "sara@".into();
    });

    fx.service.search_donors(&mut wizard, DonorSearch::Email).await.unwrap();
    let searched = fx.donors.searches();
    assert_eq!(searched[0].search_term.as_deref(), Some("sara@"));
    assert_eq!(searched[0].page_size, Some(5));

    let matches = wizard.matches(DonorSearch::Email).to_vec();
    assert_eq!(matches.len(), 1);
    wizard.select_donor(matches[0].clone());

    assert_eq!(wizard.draft().donor_id.as_deref(), Some("d-1"));
    assert_eq!(wizard.draft().donor_phone_number, "062555111");
    assert!(wizard.matches(DonorSearch::Phone).is_empty());

    fx.service.search_donors(&mut wizard, DonorSearch::Phone).await.unwrap();
    assert_eq!(fx.donors.searches().len(), 1);

    assert_eq!(fx.service.submit(&mut wizard).await, SubmitOutcome::Created);
    assert_eq!(fx.transactions.created()[0].donor_id.as_deref(), Some("d-1"));
}

#[tokio::test]
async fn results_for_edited_term_are_hidden() {
    let fx = fixture();
    let mut wizard = opened();
    wizard.edit(|draft| draft.donor_phone_number = "06".into());
    fx.service.search_donors(&mut wizard, DonorSearch::Phone).await.unwrap();
    assert_eq!(wizard.matches(DonorSearch::Phone).len(), 2);

    wizard.edit(|draft| draft.donor_phone_number = "061".into());
    assert!(wizard.matches(DonorSearch::Phone).is_empty());
}

#[tokio::test]
async fn project_error_is_routed_to_project_field() {
    let fx = fixture();
    fx.transactions.failure.arm(BaitulMalError::Api(ApiFailure::from_response(
        400,
        Some(ApiErrorResponse {
            message: Some("Project Id does not exist".into()),
            ..ApiErrorResponse::default()
        }),
    )));
    let mut wizard = opened();
    wizard.edit(|draft| {
        draft.amount = Some(25.0);
        draft.project_id = Some("p-404".into());
    });

    assert_eq!(fx.service.submit(&mut wizard).await, SubmitOutcome::Rejected);

    assert_eq!(
        wizard.errors().first_message(fields::PROJECT_ID),
        Some("Invalid project selected. Please select a valid project or no project.")
    );
    assert_eq!(wizard.errors().error_count(), 1);
    assert!(wizard.is_open());
    assert_eq!(wizard.draft().amount, Some(25.0));
    let toast = fx.notifier.last().unwrap();
    assert_eq!(toast.description, "Project Id does not exist");
}

#[tokio::test]
async fn unknown_error_lands_on_root() {
    let fx = fixture();
    fx.transactions.failure.arm(BaitulMalError::Network("connection reset".into()));
    let mut wizard = opened();
    wizard.edit(|draft| draft.amount = Some(10.0));

    assert_eq!(fx.service.submit(&mut wizard).await, SubmitOutcome::Rejected);
    assert!(wizard.root_error().is_some());
    assert!(wizard.errors().has_field(fields::ROOT));
}
