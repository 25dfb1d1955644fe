//! # Baitul Mal Core
//!
//! Client-side business logic - no HTTP or storage code.
//!
//! This crate contains:
//! - Port interfaces (traits) for the REST backend and local storage
//! - The query client: keyed server-state cache with invalidation
//! - Entity services pairing ports with cache invalidation and toasts
//! - The generic paginated data table and per-entity table controllers
//! - The multi-step transaction wizard
//! - Form schemas, navigation and settings
//!
//! ## Architecture Principles
//! - Only depends on `baitulmal-common` and `baitulmal-domain`
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;
pub mod donors;
pub mod forms;
pub mod navigation;
pub mod notifications;
pub mod organization;
pub mod projects;
pub mod query;
pub mod sectors;
pub mod settings;
pub mod table;
pub mod transactions;
pub mod users;

// Re-export specific items to avoid ambiguity
pub use auth::ports::{AuthGateway, SessionStore};
pub use auth::{AuthOutcome, AuthService};
pub use donors::ports::DonorGateway;
pub use donors::DonorService;
pub use navigation::{NavLink, Route};
pub use notifications::{Notifier, Toast, ToastVariant};
pub use organization::ports::OrganizationGateway;
pub use organization::OrganizationService;
pub use projects::ports::ProjectGateway;
pub use projects::ProjectService;
pub use query::{PageSource, QueryClient};
pub use sectors::ports::SectorGateway;
pub use sectors::SectorService;
pub use settings::ports::SettingsStore;
pub use settings::SettingsService;
pub use table::{ColumnDef, DataTable, RowAction, TableController, TableView};
pub use transactions::ports::TransactionGateway;
pub use transactions::{TransactionDraft, TransactionService, TransactionWizard, WizardStep};
pub use users::ports::UserGateway;
pub use users::UserService;
