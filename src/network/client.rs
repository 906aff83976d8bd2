//! HTTP gateway - typed calls against the campaign backend

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::GatewayError;
use crate::models::{AuthMode, Campaign, CampaignFields, Credentials, ListKind, NamedList, NamedLists};

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Body shared by campaign create and update
#[derive(Serialize)]
struct CampaignBody<'a> {
    username: &'a str,
    #[serde(flatten)]
    fields: &'a CampaignFields,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListBody<'a> {
    username: &'a str,
    #[serde(rename = "type")]
    kind: ListKind,
    list_name: &'a str,
    emails: &'a [String],
}

/// Thin wrapper over the backend API. No retry, no caching.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        ApiClient {
            http: create_client(timeout),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn authenticate(&self, credentials: &Credentials, mode: AuthMode) -> GatewayResult<String> {
        let body = match mode {
            AuthMode::Login => json!({
                "username": credentials.username,
                "password": credentials.password,
            }),
            AuthMode::Signup => json!({
                "username": credentials.username,
                "email": credentials.email,
                "password": credentials.password,
            }),
        };
        let resp = self.http.post(self.url(mode.path())).json(&body).send().await?;
        let value: Value = read_json(resp).await?;
        Ok(message_of(&value).unwrap_or_default())
    }

    pub async fn list_campaigns(&self, username: &str) -> GatewayResult<Vec<Campaign>> {
        require_username(username)?;
        let resp = self
            .http
            .get(self.url("/api/campaigns"))
            .query(&[("username", username)])
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn create_campaign(&self, username: &str, fields: &CampaignFields) -> GatewayResult<Campaign> {
        require_username(username)?;
        let resp = self
            .http
            .post(self.url("/api/campaigns"))
            .json(&CampaignBody { username, fields })
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn update_campaign(&self, id: i64, username: &str, fields: &CampaignFields) -> GatewayResult<()> {
        require_username(username)?;
        let resp = self
            .http
            .put(self.url(&format!("/api/campaigns/{}", id)))
            .json(&CampaignBody { username, fields })
            .send()
            .await?;
        expect_success(resp).await
    }

    pub async fn delete_campaign(&self, id: i64, username: &str) -> GatewayResult<()> {
        require_username(username)?;
        let resp = self
            .http
            .delete(self.url(&format!("/api/campaigns/{}", id)))
            .query(&[("username", username)])
            .send()
            .await?;
        expect_success(resp).await
    }

    pub async fn fetch_lists(&self, username: &str) -> GatewayResult<NamedLists> {
        require_username(username)?;
        let resp = self
            .http
            .get(self.url("/api/lists"))
            .query(&[("username", username)])
            .send()
            .await?;
        let value: Value = read_json(resp).await?;
        Ok(NamedLists::from_json(&value))
    }

    pub async fn upsert_list(&self, username: &str, kind: ListKind, list: &NamedList) -> GatewayResult<()> {
        require_username(username)?;
        let body = ListBody {
            username,
            kind,
            list_name: &list.list_name,
            emails: &list.emails,
        };
        let resp = self.http.put(self.url("/api/lists/list")).json(&body).send().await?;
        expect_success(resp).await
    }

    pub async fn delete_list(&self, username: &str, kind: ListKind, name: &str) -> GatewayResult<()> {
        require_username(username)?;
        let resp = self
            .http
            .delete(self.url("/api/lists/list"))
            .query(&[("username", username), ("type", kind.as_str()), ("listName", name)])
            .send()
            .await?;
        expect_success(resp).await
    }
}

fn require_username(username: &str) -> GatewayResult<()> {
    if username.trim().is_empty() {
        return Err(GatewayError::MissingUsername);
    }
    Ok(())
}

fn message_of(value: &Value) -> Option<String> {
    value.get("message").and_then(|m| m.as_str()).map(str::to_string)
}

/// Turn a non-2xx response into a server error carrying its `message` field
async fn check_status(resp: Response) -> GatewayResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    Err(server_error(status, &text))
}

fn server_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(message_of)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    GatewayError::Server {
        status: status.as_u16(),
        message,
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> GatewayResult<T> {
    let resp = check_status(resp).await?;
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
}

async fn expect_success(resp: Response) -> GatewayResult<()> {
    check_status(resp).await.map(|_| ())
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
