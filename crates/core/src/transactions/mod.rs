//! Transactions: listing and the new-transaction wizard

pub mod draft;
pub mod ports;
pub mod service;
pub mod submission;
pub mod wizard;

pub use draft::{fields, DraftSeed, TransactionDraft};
pub use ports::TransactionGateway;
pub use service::{SubmitOutcome, TransactionService};
pub use submission::route_submission_error;
pub use wizard::{CancelAction, DonorSearch, TransactionWizard, WizardStep};
