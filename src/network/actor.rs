//! Network actor - runs gateway calls in the Tokio async runtime

use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ApiClient;

/// Network actor that executes one gateway call per command
pub struct NetworkActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::CancelRequest(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling campaign load");
                                let _ = cancel_tx.send(());
                            }
                        }
                        Some(NetworkCommand::Shutdown) | None => {
                            for (_, cancel_tx) in self.cancel_handles.drain() {
                                let _ = cancel_tx.send(());
                            }
                            break;
                        }
                        Some(cmd) => self.dispatch(cmd),
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    self.cancel_handles.retain(|_, tx| !tx.is_closed());
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: NetworkCommand) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        // Campaign loads are the only cancellable calls
        let cancel = match &cmd {
            NetworkCommand::LoadCampaigns { id, .. } => {
                let (cancel_tx, cancel_rx) = oneshot::channel();
                self.cancel_handles.insert(*id, cancel_tx);
                Some((*id, cancel_rx))
            }
            _ => None,
        };

        self.active_requests.spawn(async move {
            let response = match cancel {
                Some((id, cancel_rx)) => tokio::select! {
                    biased;
                    _ = cancel_rx => Some(NetworkResponse::Cancelled { id }),
                    response = execute(&client, cmd) => response,
                },
                None => execute(&client, cmd).await,
            };
            if let Some(response) = response {
                if response.is_failure() {
                    tracing::warn!(id = response.id(), ?response, "Request failed");
                } else {
                    tracing::info!(id = response.id(), "Request completed");
                }
                let _ = response_tx.send(response);
            }
        });
    }
}

/// Execute a single command to completion
pub async fn execute(client: &ApiClient, cmd: NetworkCommand) -> Option<NetworkResponse> {
    let response = match cmd {
        NetworkCommand::Authenticate { id, mode, credentials } => {
            tracing::info!(id, ?mode, username = %credentials.username, "Authenticating");
            let result = client.authenticate(&credentials, mode).await;
            NetworkResponse::Authenticated {
                id,
                mode,
                username: credentials.username,
                result,
            }
        }
        NetworkCommand::LoadCampaigns { id, username } => {
            tracing::info!(id, %username, "Loading campaigns");
            NetworkResponse::CampaignsLoaded {
                id,
                result: client.list_campaigns(&username).await,
            }
        }
        NetworkCommand::CreateCampaign { id, username, fields } => {
            tracing::info!(id, name = %fields.name, "Creating campaign");
            NetworkResponse::CampaignCreated {
                id,
                result: client.create_campaign(&username, &fields).await,
            }
        }
        NetworkCommand::UpdateCampaign { id, username, campaign_id, fields } => {
            tracing::info!(id, campaign_id, "Updating campaign");
            let result = client.update_campaign(campaign_id, &username, &fields).await;
            NetworkResponse::CampaignUpdated { id, campaign_id, fields, result }
        }
        NetworkCommand::DeleteCampaign { id, username, campaign_id } => {
            tracing::info!(id, campaign_id, "Deleting campaign");
            NetworkResponse::CampaignDeleted {
                id,
                campaign_id,
                result: client.delete_campaign(campaign_id, &username).await,
            }
        }
        NetworkCommand::FetchLists { id, username } => NetworkResponse::ListsLoaded {
            id,
            result: client.fetch_lists(&username).await,
        },
        NetworkCommand::UpsertList { id, username, kind, list } => {
            tracing::info!(id, kind = kind.as_str(), list = %list.list_name, emails = list.emails.len(), "Saving list");
            let result = client.upsert_list(&username, kind, &list).await;
            NetworkResponse::ListSaved { id, kind, list, result }
        }
        NetworkCommand::DeleteList { id, username, kind, name } => {
            tracing::info!(id, kind = kind.as_str(), list = %name, "Deleting list");
            let result = client.delete_list(&username, kind, &name).await;
            NetworkResponse::ListDeleted { id, kind, name, result }
        }
        NetworkCommand::CancelRequest(id) => NetworkResponse::Cancelled { id },
        NetworkCommand::Shutdown => return None,
    };
    Some(response)
}
