//! Messages exchanged between the UI, App and Network actors.
//!
//! UI key presses become `UiEvent`s, the app layer answers with `RenderState`
//! snapshots and drives the gateway through `NetworkCommand`/`NetworkResponse`.

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
