//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::messages::RenderState;
use crate::models::AuthMode;

/// Dashboard pages reachable from the sidebar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Home,
    Campaigns,
    ListBuilder,
    ListManager,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Campaigns, Page::ListBuilder, Page::ListManager];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Campaigns => "Campaigns",
            Page::ListBuilder => "Create List",
            Page::ListManager => "Manage Lists",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Home => 0,
            Page::Campaigns => 1,
            Page::ListBuilder => 2,
            Page::ListManager => 3,
        }
    }
}

/// Top-level view: the auth screens or the signed-in dashboard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Auth(AuthMode),
    Dashboard(Page),
}

impl Default for View {
    fn default() -> Self {
        View::Auth(AuthMode::Login)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Auth form field
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthField {
    #[default]
    Username,
    Email,
    Password,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Auth screens
    AuthChar(char),
    AuthBackspace,
    AuthNextField,
    AuthPrevField,
    ToggleAuthMode,
    SubmitAuth,

    // Navigation
    ShowPage(Page),
    Logout,
    OpenValidationLink,

    // Campaigns
    NextCampaign,
    PrevCampaign,
    NewCampaign,
    EditCampaign,
    ViewCampaign,
    DeleteCampaign,
    CloseDetail,

    // Campaign wizard
    WizardChar(char),
    WizardBackspace,
    WizardNextField,
    WizardPrevField,
    WizardAdvance,
    WizardBack,
    WizardAddSlot,
    WizardRemoveSlot,
    WizardCycleList,
    CloseWizard,

    // List builder
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    NextField,
    PrevField,
    SubmitField,
    SaveList,
    DeleteList,
    ToggleListKind,
    ToggleEmailView,
    CycleExistingList,
    NextEmail,
    PrevEmail,
    RemoveEmail,

    // List manager
    NextList,
    PrevList,
    ViewList,
    CloseListView,
    DeleteManagedList,

    // Delete confirmation
    ConfirmDelete,
    CancelDelete,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// The parts of the render state that decide how a key is interpreted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyContext {
    pub view: View,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub confirm_open: bool,
    pub wizard_open: bool,
    pub detail_open: bool,
    pub email_popup_open: bool,
}

impl From<&RenderState> for KeyContext {
    fn from(state: &RenderState) -> Self {
        let email_popup_open = match state.view {
            View::Dashboard(Page::ListBuilder) => state.editor.show_emails,
            View::Dashboard(Page::ListManager) => state.manager.viewing.is_some(),
            _ => false,
        };
        KeyContext {
            view: state.view,
            input_mode: state.input_mode,
            show_help: state.show_help,
            confirm_open: state.confirm.is_some(),
            wizard_open: state.wizard.is_some(),
            detail_open: state.detail.is_some(),
            email_popup_open,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: &KeyContext) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    let page = match ctx.view {
        View::Auth(_) => return handle_auth_keys(key),
        View::Dashboard(page) => page,
    };

    // Popups first, innermost wins
    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if ctx.confirm_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(UiEvent::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(UiEvent::CancelDelete),
            _ => None,
        };
    }

    if ctx.wizard_open {
        return handle_wizard_keys(key);
    }

    if ctx.detail_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(UiEvent::CloseDetail),
            KeyCode::Char('d') => Some(UiEvent::DeleteCampaign),
            KeyCode::Char('e') => Some(UiEvent::EditCampaign),
            _ => None,
        };
    }

    if ctx.email_popup_open {
        return match page {
            Page::ListBuilder => match key.code {
                KeyCode::Esc | KeyCode::Char('v') => Some(UiEvent::ToggleEmailView),
                KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevEmail),
                KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextEmail),
                KeyCode::Char('x') | KeyCode::Delete => Some(UiEvent::RemoveEmail),
                _ => None,
            },
            _ => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('v') => Some(UiEvent::CloseListView),
                _ => None,
            },
        };
    }

    if ctx.input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SubmitField),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        };
    }

    // Dashboard-wide keys
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => return Some(UiEvent::ShowPage(Page::Home)),
        KeyCode::Char('2') => return Some(UiEvent::ShowPage(Page::Campaigns)),
        KeyCode::Char('3') => return Some(UiEvent::ShowPage(Page::ListBuilder)),
        KeyCode::Char('4') => return Some(UiEvent::ShowPage(Page::ListManager)),
        KeyCode::Char('L') => return Some(UiEvent::Logout),
        KeyCode::Char('o') => return Some(UiEvent::OpenValidationLink),
        _ => {}
    }

    match page {
        Page::Home => match key.code {
            KeyCode::Char('n') => Some(UiEvent::NewCampaign),
            _ => None,
        },
        Page::Campaigns => handle_campaign_keys(key),
        Page::ListBuilder => handle_builder_keys(key),
        Page::ListManager => handle_manager_keys(key),
    }
}

fn handle_auth_keys(key: KeyEvent) -> Option<UiEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('t') => Some(UiEvent::ToggleAuthMode),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Enter => Some(UiEvent::SubmitAuth),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::AuthNextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::AuthPrevField),
        KeyCode::Backspace => Some(UiEvent::AuthBackspace),
        KeyCode::Char(c) => Some(UiEvent::AuthChar(c)),
        _ => None,
    }
}

fn handle_wizard_keys(key: KeyEvent) -> Option<UiEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('b') => Some(UiEvent::WizardBack),
            KeyCode::Char('n') => Some(UiEvent::WizardAddSlot),
            KeyCode::Char('d') => Some(UiEvent::WizardRemoveSlot),
            KeyCode::Char('l') => Some(UiEvent::WizardCycleList),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(UiEvent::CloseWizard),
        KeyCode::Enter => Some(UiEvent::WizardAdvance),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::WizardNextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::WizardPrevField),
        KeyCode::Backspace => Some(UiEvent::WizardBackspace),
        KeyCode::Char(c) => Some(UiEvent::WizardChar(c)),
        _ => None,
    }
}

fn handle_campaign_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevCampaign),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextCampaign),
        KeyCode::Char('n') => Some(UiEvent::NewCampaign),
        KeyCode::Char('e') => Some(UiEvent::EditCampaign),
        KeyCode::Char('d') => Some(UiEvent::DeleteCampaign),
        KeyCode::Enter | KeyCode::Char('v') => Some(UiEvent::ViewCampaign),
        _ => None,
    }
}

fn handle_builder_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
        KeyCode::Char('s') => Some(UiEvent::SaveList),
        KeyCode::Char('d') => Some(UiEvent::DeleteList),
        KeyCode::Char('t') => Some(UiEvent::ToggleListKind),
        KeyCode::Char('v') => Some(UiEvent::ToggleEmailView),
        KeyCode::Char('l') => Some(UiEvent::CycleExistingList),
        _ => None,
    }
}

fn handle_manager_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('t') | KeyCode::Tab => Some(UiEvent::ToggleListKind),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevList),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextList),
        KeyCode::Enter | KeyCode::Char('v') => Some(UiEvent::ViewList),
        KeyCode::Char('d') => Some(UiEvent::DeleteManagedList),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(view: View) -> KeyContext {
        KeyContext {
            view,
            input_mode: InputMode::Normal,
            show_help: false,
            confirm_open: false,
            wizard_open: false,
            detail_open: false,
            email_popup_open: false,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_auth_screen_types_into_fields() {
        let c = ctx(View::Auth(AuthMode::Login));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), &c), Some(UiEvent::AuthChar('q')));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &c), Some(UiEvent::SubmitAuth));
        let toggle = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(toggle, &c), Some(UiEvent::ToggleAuthMode));
    }

    #[test]
    fn test_page_keys() {
        let c = ctx(View::Dashboard(Page::Campaigns));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('n')), &c), Some(UiEvent::NewCampaign));
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('3')), &c),
            Some(UiEvent::ShowPage(Page::ListBuilder))
        );
        let c = ctx(View::Dashboard(Page::ListManager));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('d')), &c), Some(UiEvent::DeleteManagedList));
    }

    #[test]
    fn test_popups_take_precedence() {
        let mut c = ctx(View::Dashboard(Page::Campaigns));
        c.wizard_open = true;
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), &c), Some(UiEvent::WizardChar('q')));
        c.confirm_open = true;
        assert_eq!(key_to_ui_event(press(KeyCode::Char('y')), &c), Some(UiEvent::ConfirmDelete));
        c.show_help = true;
        assert_eq!(key_to_ui_event(press(KeyCode::Char('y')), &c), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_editing_mode_captures_digits() {
        let mut c = ctx(View::Dashboard(Page::ListBuilder));
        c.input_mode = InputMode::Editing;
        assert_eq!(key_to_ui_event(press(KeyCode::Char('1')), &c), Some(UiEvent::CharInput('1')));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), &c), Some(UiEvent::StopEditing));
    }
}
