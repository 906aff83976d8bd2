use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::MAX_DEFAULT_NAME_LEN;

/// Which endpoint an auth submission goes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn path(&self) -> &'static str {
        match self {
            AuthMode::Login => "/api/login",
            AuthMode::Signup => "/api/signup",
        }
    }

    pub fn toggle(&self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Login/signup form payload
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Named list category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    Senders,
    Receivers,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Senders => "senders",
            ListKind::Receivers => "receivers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Senders => "Sender",
            ListKind::Receivers => "Receiver",
        }
    }

    pub fn toggle(&self) -> ListKind {
        match self {
            ListKind::Senders => ListKind::Receivers,
            ListKind::Receivers => ListKind::Senders,
        }
    }
}

/// A saved campaign as the backend returns it
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Campaign {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub topic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtopic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sender_emails: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub recipient_emails: Vec<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
}

/// Nullable columns come back as `null`; read them as empty
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Campaign {
    /// Editable copy of this record's fields
    pub fn to_draft(&self) -> CampaignDraft {
        CampaignDraft {
            name: self.name.clone(),
            topic: self.topic.clone(),
            subtopic: self.subtopic.clone(),
            sender_emails: self.sender_emails.clone(),
            recipient_emails: self.recipient_emails.clone(),
        }
    }

    /// Overwrite the fields carried by a full-replacement update
    pub fn merge(&mut self, fields: &CampaignFields) {
        self.name = fields.name.clone();
        self.topic = fields.topic.clone();
        self.subtopic = fields.subtopic.clone();
        self.sender_emails = fields.sender_emails.clone();
        self.recipient_emails = fields.recipient_emails.clone();
    }
}

/// Campaign form contents before submission
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CampaignDraft {
    pub name: String,
    pub topic: String,
    pub subtopic: String,
    pub sender_emails: Vec<String>,
    pub recipient_emails: Vec<String>,
}

impl CampaignDraft {
    /// Name to persist: the explicit one, or "topic - subtopic" cut to 60 chars
    pub fn resolved_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        format!("{} - {}", self.topic, self.subtopic)
            .chars()
            .take(MAX_DEFAULT_NAME_LEN)
            .collect()
    }

    /// Fields as sent to the backend. Empty entries are dropped; duplicates are kept.
    pub fn into_fields(self) -> CampaignFields {
        let name = self.resolved_name();
        CampaignFields {
            name,
            topic: self.topic,
            subtopic: self.subtopic,
            sender_emails: non_empty(self.sender_emails),
            recipient_emails: non_empty(self.recipient_emails),
        }
    }
}

fn non_empty(emails: Vec<String>) -> Vec<String> {
    emails
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Persistable campaign fields (create and full-replacement update)
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFields {
    pub name: String,
    pub topic: String,
    pub subtopic: String,
    pub sender_emails: Vec<String>,
    pub recipient_emails: Vec<String>,
}

/// A named email list within one category
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedList {
    pub list_name: String,
    pub emails: Vec<String>,
}

/// Both list categories for a user
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NamedLists {
    pub senders: Vec<NamedList>,
    pub receivers: Vec<NamedList>,
}

impl NamedLists {
    /// Decode an `/api/lists` body, treating any malformed part as empty
    pub fn from_json(value: &serde_json::Value) -> Self {
        NamedLists {
            senders: lenient_lists(value.get("senders")),
            receivers: lenient_lists(value.get("receivers")),
        }
    }

    pub fn of(&self, kind: ListKind) -> &Vec<NamedList> {
        match kind {
            ListKind::Senders => &self.senders,
            ListKind::Receivers => &self.receivers,
        }
    }

    pub fn of_mut(&mut self, kind: ListKind) -> &mut Vec<NamedList> {
        match kind {
            ListKind::Senders => &mut self.senders,
            ListKind::Receivers => &mut self.receivers,
        }
    }
}

fn lenient_lists(value: Option<&serde_json::Value>) -> Vec<NamedList> {
    let Some(items) = value.and_then(|v| v.as_array()) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let list_name = item.get("listName")?.as_str()?.to_string();
            let emails = item
                .get("emails")
                .and_then(|e| e.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|e| e.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            Some(NamedList { list_name, emails })
        })
        .collect()
}
