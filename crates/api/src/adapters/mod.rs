//! Front-end adapters for core ports

pub mod toast_log;

pub use toast_log::ToastLog;
