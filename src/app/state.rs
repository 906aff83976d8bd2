//! App state - pure data structure with no I/O logic

use std::collections::HashSet;

use crate::app::campaigns::CampaignBook;
use crate::app::lists::{ListBook, ListEditor, ListManagerView};
use crate::app::wizard::CampaignWizard;
use crate::messages::ui_events::{AuthField, InputMode, Page, View};
use crate::messages::RenderState;
use crate::models::{AuthMode, Credentials, ListKind};

/// Tone of the status line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Single-line message shown under the current view
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage { text: text.into(), kind: StatusKind::Info }
    }

    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage { text: text.into(), kind: StatusKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage { text: text.into(), kind: StatusKind::Error }
    }
}

/// Login / signup form
#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub field: AuthField,
    pub processing: bool,
}

impl AuthForm {
    /// Inputs shown for a mode, in focus order
    pub fn fields(mode: AuthMode) -> &'static [AuthField] {
        match mode {
            AuthMode::Login => &[AuthField::Username, AuthField::Password],
            AuthMode::Signup => &[AuthField::Username, AuthField::Email, AuthField::Password],
        }
    }

    pub fn input_mut(&mut self) -> &mut String {
        match self.field {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Delete waiting for a yes/no answer
#[derive(Clone, Debug, PartialEq)]
pub enum PendingDelete {
    Campaign { id: i64, name: String },
    /// `from_builder` is set when the list builder asked for the delete
    List { kind: ListKind, name: String, from_builder: bool },
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        match self {
            PendingDelete::Campaign { name, .. } => format!("Delete campaign \"{}\"?", name),
            PendingDelete::List { kind, name, .. } => {
                format!("Delete {} list \"{}\"?", kind.label().to_lowercase(), name)
            }
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Navigation
    pub view: View,
    pub session: Option<String>,

    // Auth form
    pub auth: AuthForm,

    // Status line
    pub status: Option<StatusMessage>,

    // Records
    pub campaigns: CampaignBook,
    pub lists: ListBook,

    // List pages
    pub editor: ListEditor,
    pub manager: ListManagerView,

    // Modals
    pub wizard: Option<CampaignWizard>,
    pub confirm: Option<PendingDelete>,
    pub show_help: bool,

    pub input_mode: InputMode,

    // Request tracking
    pub next_request_id: u64,
    pub pending: HashSet<u64>,
    /// List delete issued from the builder; its response resets the editor
    pub editor_delete: Option<u64>,

    pub validation_url: String,
}

impl AppState {
    pub fn new(validation_url: impl Into<String>) -> Self {
        AppState {
            view: View::default(),
            session: None,
            auth: AuthForm::default(),
            status: None,
            campaigns: CampaignBook::new(),
            lists: ListBook::default(),
            editor: ListEditor::new(),
            manager: ListManagerView::default(),
            wizard: None,
            confirm: None,
            show_help: false,
            input_mode: InputMode::Normal,
            next_request_id: 1,
            pending: HashSet::new(),
            editor_delete: None,
            validation_url: validation_url.into(),
        }
    }

    /// Generate a unique request ID and mark it pending
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending.insert(id);
        id
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn page(&self) -> Option<Page> {
        match self.view {
            View::Dashboard(page) => Some(page),
            View::Auth(_) => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            view: self.view,
            username: self.session.clone(),
            status: self.status.clone(),
            auth: self.auth.clone(),
            campaigns: self.campaigns.items().to_vec(),
            selected_campaign: self.campaigns.selected_index(),
            campaigns_loading: self.campaigns.is_loading(),
            detail: self.campaigns.detail().cloned(),
            wizard: self.wizard.clone(),
            confirm: self.confirm.clone(),
            editor: self.editor.clone(),
            lists: self.lists.all().clone(),
            manager: self.manager.clone(),
            input_mode: self.input_mode,
            show_help: self.show_help,
            validation_url: self.validation_url.clone(),
        }
    }
}
