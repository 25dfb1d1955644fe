//! Configuration loading
//!
//! Reads [`Config`](baitulmal_domain::Config) from a probed file and the
//! environment.

pub mod loader;

pub use loader::{
    apply_env, env_bool, load, load_from_env, load_from_file, probe_config_paths,
};
