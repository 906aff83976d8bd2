//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    let commands = self.state.handle_response(response);
                    self.send_all(commands);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    fn send_all(&self, commands: Vec<NetworkCommand>) {
        for cmd in commands {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Auth
            UiEvent::AuthChar(c) => self.state.auth_char(c),
            UiEvent::AuthBackspace => self.state.auth_backspace(),
            UiEvent::AuthNextField => self.state.auth_next_field(),
            UiEvent::AuthPrevField => self.state.auth_prev_field(),
            UiEvent::ToggleAuthMode => self.state.toggle_auth_mode(),
            UiEvent::SubmitAuth => {
                let cmd = self.state.submit_auth();
                self.send(cmd);
            }

            // Navigation
            UiEvent::ShowPage(page) => self.state.show_page(page),
            UiEvent::Logout => {
                let commands = self.state.logout();
                self.send_all(commands);
            }
            UiEvent::OpenValidationLink => self.state.open_validation_link(),

            // Campaigns
            UiEvent::NextCampaign => self.state.next_campaign(),
            UiEvent::PrevCampaign => self.state.prev_campaign(),
            UiEvent::ViewCampaign => self.state.view_campaign(),
            UiEvent::CloseDetail => self.state.close_detail(),
            UiEvent::DeleteCampaign => self.state.delete_campaign(),
            UiEvent::NewCampaign => {
                let cmd = self.state.new_campaign();
                self.send(cmd);
            }
            UiEvent::EditCampaign => {
                let cmd = self.state.edit_campaign();
                self.send(cmd);
            }

            // Campaign wizard
            UiEvent::WizardChar(c) => self.state.wizard_char(c),
            UiEvent::WizardBackspace => self.state.wizard_backspace(),
            UiEvent::WizardNextField => self.state.wizard_next_field(),
            UiEvent::WizardPrevField => self.state.wizard_prev_field(),
            UiEvent::WizardBack => self.state.wizard_back(),
            UiEvent::WizardAddSlot => self.state.wizard_add_slot(),
            UiEvent::WizardRemoveSlot => self.state.wizard_remove_slot(),
            UiEvent::WizardCycleList => self.state.wizard_cycle_list(),
            UiEvent::CloseWizard => self.state.close_wizard(),
            UiEvent::WizardAdvance => {
                let cmd = self.state.wizard_advance();
                self.send(cmd);
            }

            // List builder
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::SubmitField => self.state.submit_field(),
            UiEvent::SaveList => {
                let cmd = self.state.save_list();
                self.send(cmd);
            }
            UiEvent::DeleteList => self.state.delete_list(),
            UiEvent::ToggleListKind => self.state.toggle_list_kind(),
            UiEvent::ToggleEmailView => self.state.toggle_email_view(),
            UiEvent::CycleExistingList => self.state.cycle_existing_list(),
            UiEvent::NextEmail => self.state.next_email(),
            UiEvent::PrevEmail => self.state.prev_email(),
            UiEvent::RemoveEmail => self.state.remove_email(),

            // List manager
            UiEvent::NextList => self.state.next_list(),
            UiEvent::PrevList => self.state.prev_list(),
            UiEvent::ViewList => self.state.view_list(),
            UiEvent::CloseListView => self.state.close_list_view(),
            UiEvent::DeleteManagedList => self.state.delete_managed_list(),

            // Delete confirmation
            UiEvent::ConfirmDelete => {
                let cmd = self.state.confirm_delete();
                self.send(cmd);
            }
            UiEvent::CancelDelete => self.state.cancel_delete(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
