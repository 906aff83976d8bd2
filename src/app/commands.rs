//! Command handlers - business logic for processing UI events and network responses

use crate::app::state::{AuthForm, PendingDelete, StatusMessage};
use crate::app::wizard::CampaignWizard;
use crate::app::AppState;
use crate::error::{GatewayError, ValidationError};
use crate::messages::ui_events::{InputMode, Page, View};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::AuthMode;

impl AppState {
    // ========================
    // Status line
    // ========================

    fn fail(&mut self, error: impl std::fmt::Display) {
        self.status = Some(StatusMessage::error(error.to_string()));
    }

    fn require_session(&mut self) -> Option<String> {
        match self.session.clone() {
            Some(username) => Some(username),
            None => {
                self.fail(GatewayError::MissingUsername);
                None
            }
        }
    }

    // ========================
    // Auth
    // ========================

    fn auth_mode(&self) -> Option<AuthMode> {
        match self.view {
            View::Auth(mode) => Some(mode),
            View::Dashboard(_) => None,
        }
    }

    pub fn auth_char(&mut self, c: char) {
        if !self.auth.processing {
            self.auth.input_mut().push(c);
        }
    }

    pub fn auth_backspace(&mut self) {
        if !self.auth.processing {
            self.auth.input_mut().pop();
        }
    }

    pub fn auth_next_field(&mut self) {
        self.step_auth_field(1);
    }

    pub fn auth_prev_field(&mut self) {
        self.step_auth_field(-1);
    }

    fn step_auth_field(&mut self, delta: isize) {
        let Some(mode) = self.auth_mode() else { return };
        let fields = AuthForm::fields(mode);
        let current = fields.iter().position(|f| *f == self.auth.field).unwrap_or(0) as isize;
        let len = fields.len() as isize;
        self.auth.field = fields[(current + delta).rem_euclid(len) as usize];
    }

    pub fn toggle_auth_mode(&mut self) {
        if self.auth.processing {
            return;
        }
        if let Some(mode) = self.auth_mode() {
            self.view = View::Auth(mode.toggle());
            self.auth.field = AuthForm::fields(mode.toggle())[0];
            self.status = None;
        }
    }

    /// Build the login/signup call. Ignored while a previous submit is in flight.
    pub fn submit_auth(&mut self) -> Option<NetworkCommand> {
        let mode = self.auth_mode()?;
        if self.auth.processing {
            return None;
        }
        let credentials = self.auth.credentials();
        let missing = if credentials.username.is_empty() {
            Some("Username")
        } else if mode == AuthMode::Signup && credentials.email.is_empty() {
            Some("Email")
        } else if credentials.password.is_empty() {
            Some("Password")
        } else {
            None
        };
        if let Some(field) = missing {
            self.fail(ValidationError::MissingField(field));
            return None;
        }

        self.auth.processing = true;
        self.status = Some(StatusMessage::info("Processing..."));
        Some(NetworkCommand::Authenticate {
            id: self.next_id(),
            mode,
            credentials,
        })
    }

    /// Enter the dashboard as `username`, dropping whatever the previous user had loaded
    fn begin_session(&mut self, username: String) -> Vec<NetworkCommand> {
        let mut commands = self.clear_user_data();
        tracing::info!(%username, "Session started");
        self.session = Some(username.clone());
        self.view = View::Dashboard(Page::Home);
        self.auth = AuthForm::default();

        let load_id = self.next_id();
        self.campaigns.begin_load(load_id);
        commands.push(NetworkCommand::LoadCampaigns {
            id: load_id,
            username: username.clone(),
        });
        commands.push(NetworkCommand::FetchLists {
            id: self.next_id(),
            username,
        });
        commands
    }

    /// Forget every per-user record and in-flight request
    fn clear_user_data(&mut self) -> Vec<NetworkCommand> {
        let mut commands = Vec::new();
        if let Some(in_flight) = self.campaigns.clear() {
            commands.push(NetworkCommand::CancelRequest(in_flight));
        }
        self.lists.clear();
        self.editor = Default::default();
        self.manager = Default::default();
        self.wizard = None;
        self.confirm = None;
        self.show_help = false;
        self.input_mode = InputMode::Normal;
        self.pending.clear();
        self.editor_delete = None;
        commands
    }

    pub fn logout(&mut self) -> Vec<NetworkCommand> {
        let commands = self.clear_user_data();
        if let Some(username) = self.session.take() {
            tracing::info!(%username, "Logged out");
        }
        self.auth = AuthForm::default();
        self.view = View::Auth(AuthMode::Login);
        self.status = Some(StatusMessage::info("You have been logged out."));
        commands
    }

    // ========================
    // Navigation
    // ========================

    pub fn show_page(&mut self, page: Page) {
        if self.session.is_none() {
            return;
        }
        self.view = View::Dashboard(page);
        self.input_mode = InputMode::Normal;
        self.status = None;
        if page == Page::ListManager {
            self.manager.clamp(&self.lists);
        }
    }

    pub fn open_validation_link(&mut self) {
        tracing::info!(url = %self.validation_url, "Email validation link requested");
        self.status = Some(StatusMessage::info(format!(
            "Email validation: {}",
            self.validation_url
        )));
    }

    // ========================
    // Campaigns
    // ========================

    pub fn next_campaign(&mut self) {
        self.campaigns.select_next();
    }

    pub fn prev_campaign(&mut self) {
        self.campaigns.select_prev();
    }

    pub fn view_campaign(&mut self) {
        if let Some(id) = self.campaigns.selected().map(|c| c.id) {
            self.campaigns.open_detail(id);
        }
    }

    pub fn close_detail(&mut self) {
        self.campaigns.close_detail();
    }

    /// Open the wizard for a new campaign and refresh the lists it can load from
    pub fn new_campaign(&mut self) -> Option<NetworkCommand> {
        let username = self.require_session()?;
        self.campaigns.close_detail();
        self.wizard = Some(CampaignWizard::new());
        Some(NetworkCommand::FetchLists {
            id: self.next_id(),
            username,
        })
    }

    /// Edit the campaign open in the detail view, or the selected one
    pub fn edit_campaign(&mut self) -> Option<NetworkCommand> {
        let username = self.require_session()?;
        let campaign = self
            .campaigns
            .detail()
            .or_else(|| self.campaigns.selected())
            .cloned()?;
        self.campaigns.close_detail();
        self.wizard = Some(CampaignWizard::edit(&campaign));
        Some(NetworkCommand::FetchLists {
            id: self.next_id(),
            username,
        })
    }

    /// Ask before deleting the campaign open in the detail view, or the selected one
    pub fn delete_campaign(&mut self) {
        let target = self
            .campaigns
            .detail()
            .or_else(|| self.campaigns.selected())
            .map(|c| PendingDelete::Campaign {
                id: c.id,
                name: c.name.clone(),
            });
        self.confirm = target;
    }

    // ========================
    // Campaign wizard
    // ========================

    pub fn wizard_char(&mut self, c: char) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.push_char(c);
        }
    }

    pub fn wizard_backspace(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.backspace();
        }
    }

    pub fn wizard_next_field(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.next_field();
        }
    }

    pub fn wizard_prev_field(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.prev_field();
        }
    }

    pub fn wizard_add_slot(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.add_slot();
        }
    }

    pub fn wizard_remove_slot(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.remove_slot();
        }
    }

    pub fn wizard_back(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.back();
            self.status = None;
        }
    }

    pub fn wizard_cycle_list(&mut self) {
        let Some(wizard) = self.wizard.as_mut() else { return };
        let Some(kind) = wizard.list_kind() else { return };
        self.status = Some(match wizard.cycle_list(&self.lists) {
            Some(name) => StatusMessage::info(format!("Loaded list \"{}\"", name)),
            None => StatusMessage::error(format!(
                "No saved {} lists",
                kind.label().to_lowercase()
            )),
        });
    }

    pub fn close_wizard(&mut self) {
        self.wizard = None;
        self.status = None;
    }

    /// Move the wizard forward; from the last step, submit create or update
    pub fn wizard_advance(&mut self) -> Option<NetworkCommand> {
        let wizard = self.wizard.as_mut()?;
        let draft = match wizard.advance() {
            Ok(Some(draft)) => draft,
            Ok(None) => {
                self.status = None;
                return None;
            }
            Err(e) => {
                self.fail(e);
                return None;
            }
        };
        let editing = wizard.editing;
        let username = self.require_session()?;
        self.wizard = None;
        self.status = Some(StatusMessage::info("Saving campaign..."));

        let fields = draft.into_fields();
        let id = self.next_id();
        Some(match editing {
            Some(campaign_id) => NetworkCommand::UpdateCampaign {
                id,
                username,
                campaign_id,
                fields,
            },
            None => NetworkCommand::CreateCampaign { id, username, fields },
        })
    }

    // ========================
    // List builder
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        self.editor.input_mut().push(c);
    }

    pub fn delete_char(&mut self) {
        self.editor.input_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.editor.field = self.editor.field.next();
    }

    pub fn prev_field(&mut self) {
        self.editor.field = self.editor.field.prev();
    }

    /// Enter on the focused input: add typed emails, import the file, or finish the name
    pub fn submit_field(&mut self) {
        use crate::app::lists::EditorField;

        match self.editor.field {
            EditorField::Name => self.stop_editing(),
            EditorField::Emails => match self.editor.add_from_input() {
                Ok(0) => {}
                Ok(added) => {
                    self.status = Some(StatusMessage::success(format!("Added {} email(s)", added)))
                }
                Err(e) => self.fail(e),
            },
            EditorField::File => match self.editor.import_path() {
                Ok(found) => {
                    self.status = Some(StatusMessage::success(format!(
                        "Imported {} email(s) from {}",
                        found,
                        self.editor.staged_file().unwrap_or("file")
                    )))
                }
                Err(e) => self.fail(e),
            },
        }
    }

    /// Validate the working set locally, then upsert it
    pub fn save_list(&mut self) -> Option<NetworkCommand> {
        self.stop_editing();
        let list = match self.editor.prepare_save() {
            Ok(list) => list,
            Err(e) => {
                self.fail(e);
                return None;
            }
        };
        let username = self.require_session()?;
        Some(NetworkCommand::UpsertList {
            id: self.next_id(),
            username,
            kind: self.editor.kind,
            list,
        })
    }

    pub fn delete_list(&mut self) {
        self.stop_editing();
        match self.editor.prepare_delete() {
            Ok(name) => {
                self.confirm = Some(PendingDelete::List {
                    kind: self.editor.kind,
                    name,
                    from_builder: true,
                })
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn toggle_list_kind(&mut self) {
        match self.page() {
            Some(Page::ListBuilder) => self.editor.switch_kind(),
            Some(Page::ListManager) => self.manager.switch_kind(),
            _ => {}
        }
    }

    pub fn toggle_email_view(&mut self) {
        self.editor.toggle_view();
    }

    pub fn cycle_existing_list(&mut self) {
        let kind = self.editor.kind;
        self.status = Some(match self.editor.cycle_existing(&self.lists) {
            Some(name) => StatusMessage::info(format!("Editing list \"{}\"", name)),
            None => StatusMessage::error(format!(
                "No saved {} lists",
                kind.label().to_lowercase()
            )),
        });
    }

    pub fn next_email(&mut self) {
        self.editor.next_email();
    }

    pub fn prev_email(&mut self) {
        self.editor.prev_email();
    }

    pub fn remove_email(&mut self) {
        let index = self.editor.selected_email;
        if let Some(email) = self.editor.remove_email(index) {
            self.status = Some(StatusMessage::info(format!("Removed {}", email)));
        }
    }

    // ========================
    // List manager
    // ========================

    pub fn next_list(&mut self) {
        self.manager.next(&self.lists);
    }

    pub fn prev_list(&mut self) {
        self.manager.prev(&self.lists);
    }

    pub fn view_list(&mut self) {
        self.manager.viewing = self.manager.selected_name(&self.lists);
    }

    pub fn close_list_view(&mut self) {
        self.manager.viewing = None;
    }

    pub fn delete_managed_list(&mut self) {
        if let Some(name) = self.manager.selected_name(&self.lists) {
            self.confirm = Some(PendingDelete::List {
                kind: self.manager.kind,
                name,
                from_builder: false,
            });
        }
    }

    // ========================
    // Delete confirmation
    // ========================

    pub fn confirm_delete(&mut self) -> Option<NetworkCommand> {
        let pending = self.confirm.take()?;
        let username = self.require_session()?;
        let id = self.next_id();
        Some(match pending {
            PendingDelete::Campaign { id: campaign_id, .. } => NetworkCommand::DeleteCampaign {
                id,
                username,
                campaign_id,
            },
            PendingDelete::List { kind, name, from_builder } => {
                if from_builder {
                    self.editor_delete = Some(id);
                }
                NetworkCommand::DeleteList {
                    id,
                    username,
                    kind,
                    name,
                }
            }
        })
    }

    pub fn cancel_delete(&mut self) {
        self.confirm = None;
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response. Responses that are no longer pending are discarded.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Vec<NetworkCommand> {
        let response_id = response.id();
        if !self.pending.remove(&response_id) {
            tracing::debug!(id = response_id, "Discarding stale response");
            return Vec::new();
        }
        if response.is_failure() {
            tracing::warn!(id = response_id, "Request failed");
        }

        match response {
            NetworkResponse::Authenticated { mode, username, result, .. } => {
                self.auth.processing = false;
                match (mode, result) {
                    (AuthMode::Login, Ok(message)) => {
                        let commands = self.begin_session(username);
                        self.status = Some(StatusMessage::success(message));
                        return commands;
                    }
                    (AuthMode::Signup, Ok(_)) => {
                        self.auth = AuthForm::default();
                        self.view = View::Auth(AuthMode::Login);
                        self.status =
                            Some(StatusMessage::success("Account created! Please log in."));
                    }
                    (_, Err(e)) => {
                        self.auth.password.clear();
                        self.fail(e);
                    }
                }
            }
            NetworkResponse::CampaignsLoaded { id, result } => match result {
                Ok(campaigns) => {
                    self.campaigns.finish_load(id, campaigns);
                }
                Err(e) => {
                    if self.campaigns.fail_load(id) {
                        self.fail(e);
                    }
                }
            },
            NetworkResponse::CampaignCreated { result, .. } => match result {
                Ok(campaign) => {
                    self.campaigns.insert_created(campaign);
                    self.view = View::Dashboard(Page::Campaigns);
                    self.status = Some(StatusMessage::success("Campaign created"));
                }
                Err(e) => self.fail(e),
            },
            NetworkResponse::CampaignUpdated { campaign_id, fields, result, .. } => match result {
                Ok(()) => {
                    self.campaigns.apply_update(campaign_id, &fields);
                    self.status = Some(StatusMessage::success("Campaign updated"));
                }
                Err(e) => self.fail(e),
            },
            NetworkResponse::CampaignDeleted { campaign_id, result, .. } => match result {
                Ok(()) => {
                    self.campaigns.remove(campaign_id);
                    self.status = Some(StatusMessage::success("Campaign deleted"));
                }
                Err(e) => self.fail(e),
            },
            NetworkResponse::ListsLoaded { result, .. } => match result {
                Ok(lists) => {
                    self.lists.load_all(lists);
                    self.manager.clamp(&self.lists);
                }
                Err(e) => self.fail(e),
            },
            NetworkResponse::ListSaved { kind, list, result, .. } => match result {
                Ok(()) => {
                    self.editor.mark_saved();
                    self.status = Some(StatusMessage::success(format!(
                        "List \"{}\" saved",
                        list.list_name
                    )));
                    self.lists.upsert(kind, list);
                }
                Err(e) => self.fail(e),
            },
            NetworkResponse::ListDeleted { id, kind, name, result } => {
                // The builder forgets the list it deleted whether or not the call went through
                if self.editor_delete == Some(id) {
                    self.editor_delete = None;
                    self.editor.reset();
                    self.input_mode = InputMode::Normal;
                }
                match result {
                    Ok(()) => {
                        self.lists.remove(kind, &name);
                        if self.manager.viewing.as_deref() == Some(name.as_str()) {
                            self.manager.viewing = None;
                        }
                        self.manager.clamp(&self.lists);
                        self.status =
                            Some(StatusMessage::success(format!("List \"{}\" deleted", name)));
                    }
                    Err(e) => self.fail(e),
                }
            }
            NetworkResponse::Cancelled { id } => {
                tracing::debug!(id, "Request cancelled");
                self.campaigns.fail_load(id);
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StatusKind;
    use crate::models::{Campaign, CampaignFields, ListKind, NamedList, NamedLists};

    fn state() -> AppState {
        AppState::new("http://127.0.0.1:8000/")
    }

    fn type_auth(state: &mut AppState, text: &str) {
        text.chars().for_each(|c| state.auth_char(c));
    }

    /// Drive a successful login and return the follow-up commands
    fn login(state: &mut AppState, username: &str) -> Vec<NetworkCommand> {
        state.auth = AuthForm::default();
        type_auth(state, username);
        state.auth_next_field();
        type_auth(state, "secret");
        let cmd = state.submit_auth().expect("auth command");
        let id = cmd.id().expect("request id");
        state.handle_response(NetworkResponse::Authenticated {
            id,
            mode: AuthMode::Login,
            username: username.to_string(),
            result: Ok("Login successful!".into()),
        })
    }

    fn load_id(commands: &[NetworkCommand]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                NetworkCommand::LoadCampaigns { id, .. } => Some(*id),
                _ => None,
            })
            .expect("campaign load")
    }

    fn campaign(id: i64) -> Campaign {
        Campaign {
            id,
            name: format!("c{}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_then_logout() {
        let mut state = state();
        let commands = login(&mut state, "alice");
        assert_eq!(state.view, View::Dashboard(Page::Home));
        assert_eq!(state.username(), Some("alice"));
        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[1], NetworkCommand::FetchLists { username, .. } if username == "alice"));

        state.logout();
        assert_eq!(state.view, View::Auth(AuthMode::Login));
        assert_eq!(state.username(), None);
        assert!(state.campaigns.is_empty());
        assert!(state.pending.is_empty());
        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("You have been logged out."));
    }

    #[test]
    fn test_duplicate_auth_submit_ignored() {
        let mut state = state();
        type_auth(&mut state, "alice");
        state.auth_next_field();
        type_auth(&mut state, "pw");
        assert!(state.submit_auth().is_some());
        assert!(state.auth.processing);
        assert!(state.submit_auth().is_none());
    }

    #[test]
    fn test_auth_requires_fields() {
        let mut state = state();
        assert!(state.submit_auth().is_none());
        assert_eq!(state.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));

        state.toggle_auth_mode();
        assert_eq!(state.view, View::Auth(AuthMode::Signup));
        assert!(state.status.is_none());
        type_auth(&mut state, "bob");
        state.auth_next_field();
        state.auth_next_field();
        type_auth(&mut state, "pw");
        assert!(state.submit_auth().is_none());
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("Email is required")
        );
    }

    #[test]
    fn test_signup_returns_to_login() {
        let mut state = state();
        state.toggle_auth_mode();
        type_auth(&mut state, "bob");
        state.auth_next_field();
        type_auth(&mut state, "bob@x.com");
        state.auth_next_field();
        type_auth(&mut state, "pw");
        let id = state.submit_auth().and_then(|c| c.id()).unwrap();
        let commands = state.handle_response(NetworkResponse::Authenticated {
            id,
            mode: AuthMode::Signup,
            username: "bob".into(),
            result: Ok("User created successfully!".into()),
        });
        assert!(commands.is_empty());
        assert_eq!(state.view, View::Auth(AuthMode::Login));
        assert_eq!(state.session, None);
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("Account created! Please log in.")
        );
    }

    #[test]
    fn test_login_failure_surfaces_message() {
        let mut state = state();
        type_auth(&mut state, "alice");
        state.auth_next_field();
        type_auth(&mut state, "wrong");
        let id = state.submit_auth().and_then(|c| c.id()).unwrap();
        state.handle_response(NetworkResponse::Authenticated {
            id,
            mode: AuthMode::Login,
            username: "alice".into(),
            result: Err(GatewayError::Server {
                status: 401,
                message: "Invalid credentials".into(),
            }),
        });
        assert!(matches!(state.view, View::Auth(_)));
        assert!(!state.auth.processing);
        assert_eq!(state.status, Some(StatusMessage::error("Invalid credentials")));
    }

    #[test]
    fn test_switching_user_clears_previous_data() {
        let mut state = state();
        let commands = login(&mut state, "alice");
        let first_load = load_id(&commands);
        state.handle_response(NetworkResponse::CampaignsLoaded {
            id: first_load,
            result: Ok(vec![campaign(1)]),
        });
        state.lists.load_all(NamedLists {
            senders: vec![NamedList {
                list_name: "Team".into(),
                emails: vec!["a@x.com".into()],
            }],
            receivers: vec![],
        });
        assert_eq!(state.campaigns.len(), 1);

        state.logout();
        let commands = login(&mut state, "bob");
        assert!(state.campaigns.is_empty());
        assert!(state.lists.of(ListKind::Senders).is_empty());
        assert!(state.campaigns.is_loading());
        assert!(matches!(&commands[0], NetworkCommand::LoadCampaigns { username, .. } if username == "bob"));
    }

    #[test]
    fn test_stale_campaign_load_discarded() {
        let mut state = state();
        let alice_load = load_id(&login(&mut state, "alice"));
        state.logout();
        let bob_load = load_id(&login(&mut state, "bob"));

        let discarded = state.handle_response(NetworkResponse::CampaignsLoaded {
            id: alice_load,
            result: Ok(vec![campaign(1)]),
        });
        assert!(discarded.is_empty());
        assert!(state.campaigns.is_empty());

        state.handle_response(NetworkResponse::CampaignsLoaded {
            id: bob_load,
            result: Ok(vec![campaign(2)]),
        });
        assert_eq!(state.campaigns.items()[0].id, 2);
    }

    #[test]
    fn test_logout_cancels_in_flight_load() {
        let mut state = state();
        let load = load_id(&login(&mut state, "alice"));
        let commands = state.logout();
        assert!(matches!(commands.as_slice(), [NetworkCommand::CancelRequest(id)] if *id == load));
    }

    #[test]
    fn test_create_campaign_flow() {
        let mut state = state();
        login(&mut state, "alice");
        assert!(matches!(state.new_campaign(), Some(NetworkCommand::FetchLists { .. })));

        let wizard = state.wizard.as_mut().unwrap();
        wizard.topic = "Q4 Launch".into();
        wizard.subtopic = "New feature".into();
        wizard.senders[0] = "a@x.com".into();
        assert!(state.wizard_advance().is_none());
        state.wizard.as_mut().unwrap().recipients = vec!["b@y.com".into(), "b@y.com".into()];
        assert!(state.wizard_advance().is_none());

        let cmd = state.wizard_advance().expect("create command");
        assert!(state.wizard.is_none());
        let (id, fields) = match cmd {
            NetworkCommand::CreateCampaign { id, fields, .. } => (id, fields),
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(fields.recipient_emails.len(), 2);
        assert_eq!(fields.name, "Q4 Launch - New feature");

        state.handle_response(NetworkResponse::CampaignCreated {
            id,
            result: Ok(Campaign { id: 7, ..Default::default() }),
        });
        assert_eq!(state.view, View::Dashboard(Page::Campaigns));
        assert_eq!(state.campaigns.items()[0].id, 7);
    }

    #[test]
    fn test_wizard_invalid_step_does_not_advance() {
        let mut state = state();
        login(&mut state, "alice");
        state.new_campaign();
        assert!(state.wizard_advance().is_none());
        assert_eq!(state.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
        assert_eq!(state.wizard.as_ref().map(|w| w.step.number()), Some(1));
    }

    #[test]
    fn test_failed_update_leaves_record() {
        let mut state = state();
        let load = load_id(&login(&mut state, "alice"));
        state.handle_response(NetworkResponse::CampaignsLoaded {
            id: load,
            result: Ok(vec![campaign(1)]),
        });
        state.edit_campaign();
        let wizard = state.wizard.as_mut().unwrap();
        wizard.topic = "T".into();
        wizard.subtopic = "S".into();
        wizard.senders[0] = "a@x.com".into();
        wizard.recipients[0] = "b@y.com".into();
        state.wizard_advance();
        state.wizard_advance();
        let id = state.wizard_advance().and_then(|c| c.id()).unwrap();

        state.handle_response(NetworkResponse::CampaignUpdated {
            id,
            campaign_id: 1,
            fields: CampaignFields {
                name: "changed".into(),
                ..Default::default()
            },
            result: Err(GatewayError::Transport("refused".into())),
        });
        assert_eq!(state.campaigns.get(1).map(|c| c.name.as_str()), Some("c1"));
        assert_eq!(state.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn test_delete_campaign_after_confirmation() {
        let mut state = state();
        let load = load_id(&login(&mut state, "alice"));
        state.handle_response(NetworkResponse::CampaignsLoaded {
            id: load,
            result: Ok(vec![campaign(1), campaign(2)]),
        });
        state.view_campaign();
        state.delete_campaign();
        assert!(matches!(state.confirm, Some(PendingDelete::Campaign { id: 1, .. })));

        let id = state.confirm_delete().and_then(|c| c.id()).unwrap();
        assert_eq!(state.campaigns.len(), 2);
        state.handle_response(NetworkResponse::CampaignDeleted {
            id,
            campaign_id: 1,
            result: Ok(()),
        });
        assert_eq!(state.campaigns.len(), 1);
        assert!(state.campaigns.detail().is_none());
    }

    #[test]
    fn test_list_save_validation_stays_local() {
        let mut state = state();
        login(&mut state, "alice");
        assert!(state.save_list().is_none());
        assert_eq!(state.status, Some(StatusMessage::error("List name is required")));

        state.editor.name = "Team".into();
        assert!(state.save_list().is_none());
        assert_eq!(state.status, Some(StatusMessage::error("Add at least one email")));
    }

    #[test]
    fn test_list_save_success_updates_book() {
        let mut state = state();
        login(&mut state, "alice");
        state.editor.name = "Team".into();
        state.editor.add_manual_emails("a@x.com b@x.com a@x.com").unwrap();
        state.editor.import_from_file("more.csv", "c@x.com").unwrap();

        let cmd = state.save_list().expect("upsert");
        let (id, kind, list) = match cmd {
            NetworkCommand::UpsertList { id, kind, list, .. } => (id, kind, list),
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(list.emails, vec!["a@x.com", "b@x.com", "c@x.com"]);

        state.handle_response(NetworkResponse::ListSaved { id, kind, list, result: Ok(()) });
        assert_eq!(state.lists.names(ListKind::Senders), vec!["Team"]);
        assert!(state.editor.staged().is_empty());
        assert_eq!(state.editor.manual().len(), 2);
    }

    #[test]
    fn test_list_delete_failure_still_resets_editor() {
        let mut state = state();
        login(&mut state, "alice");
        let team = NamedList {
            list_name: "Team".into(),
            emails: vec!["a@x.com".into()],
        };
        state.lists.upsert(ListKind::Senders, team.clone());
        state.editor.select_existing(&team);
        state.delete_list();
        let id = state.confirm_delete().and_then(|c| c.id()).unwrap();

        state.handle_response(NetworkResponse::ListDeleted {
            id,
            kind: ListKind::Senders,
            name: "Team".into(),
            result: Err(GatewayError::Server {
                status: 404,
                message: "List not found".into(),
            }),
        });
        assert!(state.editor.name.is_empty());
        assert_eq!(state.editor.email_count(), 0);
        assert!(state.lists.find(ListKind::Senders, "Team").is_some());
        assert_eq!(state.status, Some(StatusMessage::error("List not found")));
    }

    #[test]
    fn test_manager_delete_removes_from_book() {
        let mut state = state();
        login(&mut state, "alice");
        state.lists.upsert(
            ListKind::Receivers,
            NamedList {
                list_name: "Clients".into(),
                emails: vec!["c@y.com".into()],
            },
        );
        state.show_page(Page::ListManager);
        state.toggle_list_kind();
        state.view_list();
        assert_eq!(state.manager.viewing.as_deref(), Some("Clients"));
        state.delete_managed_list();
        let id = state.confirm_delete().and_then(|c| c.id()).unwrap();
        state.handle_response(NetworkResponse::ListDeleted {
            id,
            kind: ListKind::Receivers,
            name: "Clients".into(),
            result: Ok(()),
        });
        assert!(state.lists.of(ListKind::Receivers).is_empty());
        assert!(state.manager.viewing.is_none());
    }

    #[test]
    fn test_builder_delete_resets_after_rename() {
        let mut state = state();
        login(&mut state, "alice");
        let team = NamedList {
            list_name: "Team".into(),
            emails: vec!["a@x.com".into()],
        };
        state.lists.upsert(ListKind::Senders, team.clone());
        state.editor.select_existing(&team);
        state.delete_list();
        let id = state.confirm_delete().and_then(|c| c.id()).unwrap();

        // typed into the name field while the delete was in flight
        state.editor.name.push_str(" 2");
        state.handle_response(NetworkResponse::ListDeleted {
            id,
            kind: ListKind::Senders,
            name: "Team".into(),
            result: Ok(()),
        });
        assert!(state.editor.name.is_empty());
        assert_eq!(state.editor.email_count(), 0);
        assert_eq!(state.editor_delete, None);
        assert!(state.lists.find(ListKind::Senders, "Team").is_none());
    }

    #[test]
    fn test_manager_delete_leaves_builder_alone() {
        let mut state = state();
        login(&mut state, "alice");
        let team = NamedList {
            list_name: "Team".into(),
            emails: vec!["a@x.com".into()],
        };
        state.lists.upsert(ListKind::Senders, team.clone());
        state.editor.select_existing(&team);

        state.show_page(Page::ListManager);
        state.delete_managed_list();
        let id = state.confirm_delete().and_then(|c| c.id()).unwrap();
        assert_eq!(state.editor_delete, None);
        state.handle_response(NetworkResponse::ListDeleted {
            id,
            kind: ListKind::Senders,
            name: "Team".into(),
            result: Ok(()),
        });
        assert_eq!(state.editor.name, "Team");
        assert!(state.lists.find(ListKind::Senders, "Team").is_none());
    }
}
