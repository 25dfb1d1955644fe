//! Local persistence for the session and preferences

mod local_store;

pub use local_store::LocalStore;
