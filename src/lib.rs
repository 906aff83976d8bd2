//! # Mailcamp TUI
//!
//! A terminal front end for an email-campaign backend.
//!
//! ## Features
//! - Login / signup against the campaign backend
//! - Campaign list, detail view and a three-step create/edit wizard
//! - Named sender and receiver lists built from typed or imported addresses
//! - List manager with view and delete
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod emails;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use models::{AuthMode, Campaign, CampaignDraft, CampaignFields, Credentials, ListKind, NamedList, NamedLists};
pub use error::{GatewayError, ValidationError};
pub use config::Config;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{ApiClient, NetworkActor};
