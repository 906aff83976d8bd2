//! Network layer - the remote data gateway
//!
//! The Network actor receives gateway commands and sends back typed responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;
