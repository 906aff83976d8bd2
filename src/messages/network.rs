//! Network messages - communication between App and Network layers

use crate::error::GatewayError;
use crate::models::{AuthMode, Campaign, CampaignFields, Credentials, ListKind, NamedList, NamedLists};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Log in or sign up
    Authenticate {
        id: u64,
        mode: AuthMode,
        credentials: Credentials,
    },
    /// Fetch every campaign of a user (cancellable)
    LoadCampaigns {
        id: u64,
        username: String,
    },
    CreateCampaign {
        id: u64,
        username: String,
        fields: CampaignFields,
    },
    /// Full replacement of an existing campaign
    UpdateCampaign {
        id: u64,
        username: String,
        campaign_id: i64,
        fields: CampaignFields,
    },
    DeleteCampaign {
        id: u64,
        username: String,
        campaign_id: i64,
    },
    /// Fetch both list categories
    FetchLists {
        id: u64,
        username: String,
    },
    /// Save a list under its name, replacing any previous content
    UpsertList {
        id: u64,
        username: String,
        kind: ListKind,
        list: NamedList,
    },
    DeleteList {
        id: u64,
        username: String,
        kind: ListKind,
        name: String,
    },
    /// Cancel a pending campaign load
    CancelRequest(u64),

    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    /// Request id carried by this command, if any
    pub fn id(&self) -> Option<u64> {
        match self {
            NetworkCommand::Authenticate { id, .. }
            | NetworkCommand::LoadCampaigns { id, .. }
            | NetworkCommand::CreateCampaign { id, .. }
            | NetworkCommand::UpdateCampaign { id, .. }
            | NetworkCommand::DeleteCampaign { id, .. }
            | NetworkCommand::FetchLists { id, .. }
            | NetworkCommand::UpsertList { id, .. }
            | NetworkCommand::DeleteList { id, .. } => Some(*id),
            NetworkCommand::CancelRequest(_) | NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Authenticated {
        id: u64,
        mode: AuthMode,
        username: String,
        result: Result<String, GatewayError>,
    },
    CampaignsLoaded {
        id: u64,
        result: Result<Vec<Campaign>, GatewayError>,
    },
    CampaignCreated {
        id: u64,
        result: Result<Campaign, GatewayError>,
    },
    CampaignUpdated {
        id: u64,
        campaign_id: i64,
        fields: CampaignFields,
        result: Result<(), GatewayError>,
    },
    CampaignDeleted {
        id: u64,
        campaign_id: i64,
        result: Result<(), GatewayError>,
    },
    ListsLoaded {
        id: u64,
        result: Result<NamedLists, GatewayError>,
    },
    ListSaved {
        id: u64,
        kind: ListKind,
        list: NamedList,
        result: Result<(), GatewayError>,
    },
    ListDeleted {
        id: u64,
        kind: ListKind,
        name: String,
        result: Result<(), GatewayError>,
    },
    /// Request was cancelled before it settled
    Cancelled {
        id: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Authenticated { id, .. } => *id,
            NetworkResponse::CampaignsLoaded { id, .. } => *id,
            NetworkResponse::CampaignCreated { id, .. } => *id,
            NetworkResponse::CampaignUpdated { id, .. } => *id,
            NetworkResponse::CampaignDeleted { id, .. } => *id,
            NetworkResponse::ListsLoaded { id, .. } => *id,
            NetworkResponse::ListSaved { id, .. } => *id,
            NetworkResponse::ListDeleted { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }

    /// Whether the call behind this response failed
    pub fn is_failure(&self) -> bool {
        match self {
            NetworkResponse::Authenticated { result, .. } => result.is_err(),
            NetworkResponse::CampaignsLoaded { result, .. } => result.is_err(),
            NetworkResponse::CampaignCreated { result, .. } => result.is_err(),
            NetworkResponse::CampaignUpdated { result, .. } => result.is_err(),
            NetworkResponse::CampaignDeleted { result, .. } => result.is_err(),
            NetworkResponse::ListsLoaded { result, .. } => result.is_err(),
            NetworkResponse::ListSaved { result, .. } => result.is_err(),
            NetworkResponse::ListDeleted { result, .. } => result.is_err(),
            NetworkResponse::Cancelled { .. } => true,
        }
    }
}
