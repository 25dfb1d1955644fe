//! Domain types and models
//!
//! Wire names follow the backend: entity payloads are camelCase, query
//! parameters and error bodies are PascalCase.

pub mod coordinator;
pub mod currency;
pub mod donor;
pub mod entity;
pub mod organization;
pub mod pagination;
pub mod project;
pub mod sector;
pub mod settings;
pub mod transaction;
pub mod user;

pub use coordinator::{AddCoordinatorsRequest, Coordinator, CoordinatorChanges};
pub use currency::{Currency, CurrencyCode, CURRENCIES};
pub use donor::Donor;
pub use entity::EntityMeta;
pub use organization::{BudgetAmount, OrganizationInfo};
pub use pagination::{PaginatedResponse, QueryParams, SortOrder};
pub use project::{
    Budget, CreateProjectRequest, EditProjectRequest, EditProjectResponse, Project,
    ProjectOutcomeType,
};
pub use sector::{CreateSectorRequest, CreateSectorResponse, Sector, SectorProject};
pub use settings::{AppSettings, Language, Theme};
pub use transaction::{CreateTransactionRequest, Transaction, TransactionStatus};
pub use user::{
    AuthSession, CreateUserRequest, EditUserRequest, LoginRequest, UpdateUserStatusRequest, User,
    UserRole, UserStatus,
};
