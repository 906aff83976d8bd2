//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default origin of the campaign backend
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Default address of the external email validation tool
pub const DEFAULT_VALIDATION_URL: &str = "http://127.0.0.1:8000/";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name of the log file written next to the configured log directory
pub const LOG_FILE_NAME: &str = "mailcamp.log";

/// Application name
pub const APP_NAME: &str = "Email Management";

/// Maximum length (in characters) of a generated campaign name
pub const MAX_DEFAULT_NAME_LEN: usize = 60;

/// Upper bound on sender slots in the campaign wizard
pub const MAX_SENDER_SLOTS: usize = 10;

/// Upper bound on recipient slots in the campaign wizard
pub const MAX_RECIPIENT_SLOTS: usize = 20;
