//! Render state - data structure sent from App layer to UI for rendering

use crate::app::lists::{ListEditor, ListManagerView};
use crate::app::state::{AuthForm, PendingDelete, StatusMessage};
use crate::app::wizard::CampaignWizard;
use crate::constants::DEFAULT_VALIDATION_URL;
use crate::messages::ui_events::{InputMode, View};
use crate::models::{Campaign, NamedLists};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub view: View,
    pub username: Option<String>,
    pub status: Option<StatusMessage>,

    // Auth form
    pub auth: AuthForm,

    // Campaigns
    pub campaigns: Vec<Campaign>,
    pub selected_campaign: usize,
    pub campaigns_loading: bool,
    pub detail: Option<Campaign>,

    // Modals
    pub wizard: Option<CampaignWizard>,
    pub confirm: Option<PendingDelete>,

    // Lists
    pub editor: ListEditor,
    pub lists: NamedLists,
    pub manager: ListManagerView,

    pub input_mode: InputMode,
    pub show_help: bool,
    pub validation_url: String,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            view: View::default(),
            username: None,
            status: None,
            auth: AuthForm::default(),
            campaigns: Vec::new(),
            selected_campaign: 0,
            campaigns_loading: false,
            detail: None,
            wizard: None,
            confirm: None,
            editor: ListEditor::new(),
            lists: NamedLists::default(),
            manager: ListManagerView::default(),
            input_mode: InputMode::Normal,
            show_help: false,
            validation_url: String::from(DEFAULT_VALIDATION_URL),
        }
    }
}
