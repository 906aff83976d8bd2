//! Gateway calls against a canned local HTTP responder

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use mailcamp_tui::{ApiClient, AuthMode, CampaignDraft, Credentials, GatewayError, ListKind, NamedList};

/// Answer exactly one request with `status` and `body`; the handle yields the raw request
async fn serve_once(status: &'static str, body: &'static str) -> (ApiClient, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).to_string()
    });

    let client = ApiClient::new(format!("http://{}", addr), Duration::from_secs(5));
    (client, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn body_json(request: &str) -> serde_json::Value {
    let body = request.split("\r\n\r\n").nth(1).unwrap_or_default();
    serde_json::from_str(body).unwrap()
}

fn alice() -> Credentials {
    Credentials {
        username: "alice".into(),
        email: String::new(),
        password: "secret".into(),
    }
}

#[tokio::test]
async fn login_success_returns_server_message() {
    let (client, server) = serve_once("200 OK", r#"{"message": "Login successful!"}"#).await;
    let result = client.authenticate(&alice(), AuthMode::Login).await;
    assert_eq!(result, Ok("Login successful!".to_string()));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/login "));
    let body = body_json(&request);
    assert_eq!(body["username"], "alice");
    assert!(body.get("email").is_none());
}

#[tokio::test]
async fn login_failure_surfaces_message() {
    let (client, server) = serve_once("401 Unauthorized", r#"{"message": "Invalid username or password."}"#).await;
    let result = client.authenticate(&alice(), AuthMode::Login).await;
    assert_eq!(
        result,
        Err(GatewayError::Server {
            status: 401,
            message: "Invalid username or password.".into()
        })
    );
    server.await.unwrap();
}

#[tokio::test]
async fn signup_posts_email() {
    let (client, server) = serve_once("201 Created", r#"{"message": "User created successfully!"}"#).await;
    let mut credentials = alice();
    credentials.email = "alice@x.com".into();
    assert!(client.authenticate(&credentials, AuthMode::Signup).await.is_ok());

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/signup "));
    assert_eq!(body_json(&request)["email"], "alice@x.com");
}

#[tokio::test]
async fn campaigns_are_listed_for_user() {
    let (client, server) = serve_once(
        "200 OK",
        r#"[{"id": 2, "name": "Q4", "topic": "Launch", "subtopic": "Feature",
             "senderEmails": ["a@x.com"], "recipientEmails": ["b@y.com", "b@y.com"],
             "createdAt": "2024-05-01T09:30:00.123456"}]"#,
    )
    .await;
    let campaigns = client.list_campaigns("alice").await.unwrap();
    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns[0].id, 2);
    assert_eq!(campaigns[0].recipient_emails.len(), 2);
    assert!(campaigns[0].created_at.is_some());

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/campaigns?username=alice "));
}

#[tokio::test]
async fn create_keeps_duplicate_recipients() {
    let (client, server) = serve_once(
        "201 Created",
        r#"{"id": 9, "name": "Q4 Launch - New feature", "topic": "Q4 Launch", "subtopic": "New feature",
            "senderEmails": ["a@x.com"], "recipientEmails": ["b@y.com", "b@y.com"]}"#,
    )
    .await;
    let fields = CampaignDraft {
        name: String::new(),
        topic: "Q4 Launch".into(),
        subtopic: "New feature".into(),
        sender_emails: vec!["a@x.com".into()],
        recipient_emails: vec!["b@y.com".into(), "b@y.com".into()],
    }
    .into_fields();
    let created = client.create_campaign("alice", &fields).await.unwrap();
    assert_eq!(created.id, 9);

    let body = body_json(&server.await.unwrap());
    assert_eq!(body["username"], "alice");
    assert_eq!(body["name"], "Q4 Launch - New feature");
    assert_eq!(body["recipientEmails"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn lists_response_tolerates_missing_category() {
    let (client, server) = serve_once(
        "200 OK",
        r#"{"senders": [{"listName": "Team", "emails": ["a@x.com"]}]}"#,
    )
    .await;
    let lists = client.fetch_lists("alice").await.unwrap();
    assert_eq!(lists.senders.len(), 1);
    assert_eq!(lists.senders[0].list_name, "Team");
    assert!(lists.receivers.is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn upsert_list_sends_type_and_name() {
    let (client, server) = serve_once("200 OK", r#"{"message": "List saved successfully"}"#).await;
    let list = NamedList {
        list_name: "Clients".into(),
        emails: vec!["c@y.com".into()],
    };
    client.upsert_list("alice", ListKind::Receivers, &list).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("PUT /api/lists/list "));
    let body = body_json(&request);
    assert_eq!(body["type"], "receivers");
    assert_eq!(body["listName"], "Clients");
}

#[tokio::test]
async fn delete_unknown_campaign_reports_server_message() {
    let (client, server) = serve_once("404 Not Found", r#"{"message": "Campaign not found"}"#).await;
    let err = client.delete_campaign(42, "alice").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Campaign not found");

    let request = server.await.unwrap();
    assert!(request.starts_with("DELETE /api/campaigns/42?username=alice "));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{}", addr), Duration::from_secs(2));
    let err = client.list_campaigns("alice").await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
}
