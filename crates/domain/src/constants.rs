//! Application constants
//!
//! Centralized location for domain-level constants: cache operation names,
//! persisted storage keys, pagination defaults and user-facing fallbacks.

// Backend
pub const DEFAULT_API_URL: &str = "https://baitulmal-production.up.railway.app";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

// Pagination defaults for a fresh table
pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [10, 20, 30, 40, 50];
pub const DONOR_SUGGESTION_PAGE_SIZE: u32 = 5;
pub const SECTOR_INFINITE_PAGE_SIZE: u32 = 5;
pub const PROJECT_INFINITE_PAGE_SIZE: u32 = 2;

/// Sentinel the project picker emits for "no project"
pub const ZERO_GUID: &str = "00000000-0000-0000-0000-000000000000";

/// Search debounce in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Shown when the backend gave no usable message
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Operation names used as the first component of cache keys
pub mod query_keys {
    pub const ME: &str = "me";
    pub const USER_GET_ALL: &str = "user_get_all";
    pub const SECTOR_GET_ALL: &str = "sector_get_all";
    pub const SECTOR_GET_BY_ID: &str = "sector_get_by_id";
    pub const PROJECT_GET_ALL: &str = "project_get_all";
    pub const PROJECT_GET_BY_ID: &str = "project_get_by_id";
    pub const GET_ORGANIZATION_INFO: &str = "get_organization_info";
    pub const DONOR_GET_ALL: &str = "donor_get_all";
    pub const TRANSACTION_GET_ALL: &str = "transaction_get_all";

    /// Per-user key, `user_get_{id}`
    pub fn user_get(user_id: &str) -> String {
        format!("user_get_{user_id}")
    }
}

/// Keys in the persisted client key-value store
pub mod storage_keys {
    pub const AUTH: &str = "auth";
    pub const LANGUAGE: &str = "language";
    pub const CURRENCY: &str = "currency";
    pub const THEME: &str = "theme";
}

/// Message keys resolved by the presentation layer's translations
pub mod message_keys {
    pub const NO_DATA_FOUND: &str = "NO_DATA_FOUND";
    pub const ACTIONS: &str = "ACTIONS";

    pub const SECTOR_CREATED_SUCCESS: (&str, &str) =
        ("SECTOR_CREATED_SUCCESS_TITLE", "SECTOR_CREATED_SUCCESS_DESCRIPTION");
    pub const SECTOR_CREATED_ERROR: (&str, &str) =
        ("SECTOR_CREATED_ERROR_TITLE", "SECTOR_CREATED_ERROR_DESCRIPTION");
    pub const PROJECT_CREATED_SUCCESS: (&str, &str) =
        ("PROJECT_CREATED_SUCCESS_TITLE", "PROJECT_CREATED_SUCCESS_DESCRIPTION");
    pub const PROJECT_CREATED_ERROR: (&str, &str) =
        ("PROJECT_CREATED_ERROR_TITLE", "PROJECT_CREATED_ERROR_DESCRIPTION");
    pub const PROJECT_EDITED_SUCCESS: (&str, &str) =
        ("PROJECT_EDITED_SUCCESS_TITLE", "PROJECT_EDITED_SUCCESS_DESCRIPTION");
    pub const PROJECT_EDITED_ERROR: (&str, &str) =
        ("PROJECT_EDITED_ERROR_TITLE", "PROJECT_EDITED_ERROR_DESCRIPTION");
    pub const USER_CREATED_SUCCESS: (&str, &str) =
        ("USER_CREATED_SUCCESS_TITLE", "USER_CREATED_SUCCESS_DESCRIPTION");
    pub const USER_CREATED_ERROR: (&str, &str) =
        ("USER_CREATED_ERROR_TITLE", "USER_CREATED_ERROR_DESCRIPTION");
    pub const PROFILE_UPDATE_SUCCESS: (&str, &str) =
        ("PROFILE_UPDATE_SUCCESS_TITLE", "PROFILE_UPDATE_SUCCESS_DESCRIPTION");
    pub const PROFILE_UPDATE_ERROR: (&str, &str) =
        ("PROFILE_UPDATE_ERROR_TITLE", "PROFILE_UPDATE_ERROR_DESCRIPTION");
    pub const USER_ACTIVATE_SUCCESS: (&str, &str) =
        ("USER_ACTIVATE_SUCCESS_TITLE", "USER_ACTIVATE_SUCCESS_DESCRIPTION");
    pub const USER_ACTIVATE_ERROR: (&str, &str) =
        ("USER_ACTIVATE_ERROR_TITLE", "USER_ACTIVATE_ERROR_DESCRIPTION");
    pub const USER_DEACTIVATE_SUCCESS: (&str, &str) =
        ("USER_DEACTIVATE_SUCCESS_TITLE", "USER_DEACTIVATE_SUCCESS_DESCRIPTION");
    pub const USER_DEACTIVATE_ERROR: (&str, &str) =
        ("USER_DEACTIVATE_ERROR_TITLE", "USER_DEACTIVATE_ERROR_DESCRIPTION");
    pub const COORDINATORS_ADDED_SUCCESS: (&str, &str) =
        ("Coordinator added successfully", "Coordinator has been added successfully");
    pub const TRANSACTION_CREATED_SUCCESS: (&str, &str) =
        ("Transaction created successfully", "Transaction has been created successfully");
}
