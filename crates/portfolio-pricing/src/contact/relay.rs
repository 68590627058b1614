use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use serde_json::Value;

use super::domain::ContactSubmission;

const FALLBACK_ERROR: &str = "Error sending message";

/// Outbound hook for delivering contact messages (form relay, outbox, ...).
pub trait ContactRelay: Send + Sync {
    fn relay(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), RelayError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay transport unavailable: {0}")]
    Transport(String),
    #[error("relay rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// JSON client for the hosted form relay. The relay accepts any 2xx as
/// delivered and reports problems in an `errors` collection.
#[derive(Debug, Clone)]
pub struct FormRelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FormRelayClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RelayError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactRelay for FormRelayClient {
    fn relay(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), RelayError>> + Send {
        let request = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(submission);

        async move {
            let response = request
                .send()
                .await
                .map_err(|err| RelayError::Transport(err.to_string()))?;

            if response.status().is_success() {
                return Ok(());
            }

            let status = response.status().as_u16();
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            Err(RelayError::Rejected {
                status,
                message: rejection_message(&body),
            })
        }
    }
}

/// First entry of the relay's `errors` field, which is either a list or a map
/// of `{ "message": ... }` objects or plain strings.
pub(crate) fn rejection_message(body: &Value) -> String {
    let first = match body.get("errors") {
        Some(Value::Array(errors)) => errors.first(),
        Some(Value::Object(errors)) => errors.values().next(),
        _ => None,
    };

    first
        .and_then(|entry| match entry {
            Value::String(message) => Some(message.clone()),
            Value::Object(fields) => fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "New site".to_string(),
            message: "Looking for a five page portfolio.".to_string(),
        }
    }

    /// Serves a one-route relay on an ephemeral port that records each request
    /// and answers with the given status and body.
    async fn spawn_relay(status: StatusCode, reply: Value) -> (String, Received) {
        let received: Received = Arc::default();
        let recorder = received.clone();
        let router = Router::new().route(
            "/f/test",
            post(move |headers: HeaderMap, Json(payload): Json<Value>| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    recorder
                        .lock()
                        .expect("recorder mutex poisoned")
                        .push((headers, payload));
                    (status, Json(reply))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener binds");
        let addr = listener.local_addr().expect("listener has address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("relay serves");
        });

        (format!("http://{addr}/f/test"), received)
    }

    #[test]
    fn reads_first_message_from_error_list() {
        let body = json!({
            "error": "Validation errors",
            "errors": [
                { "code": "TYPE_EMAIL", "field": "email", "message": "should be an email" },
                { "code": "REQUIRED", "field": "name", "message": "is required" }
            ]
        });
        assert_eq!(rejection_message(&body), "should be an email");
    }

    #[test]
    fn reads_first_value_from_error_map() {
        let body = json!({ "errors": { "email": "is invalid" } });
        assert_eq!(rejection_message(&body), "is invalid");
    }

    #[test]
    fn falls_back_when_body_has_no_errors() {
        assert_eq!(rejection_message(&Value::Null), FALLBACK_ERROR);
        assert_eq!(rejection_message(&json!({ "errors": [] })), FALLBACK_ERROR);
    }

    #[test]
    fn builds_client_for_endpoint() {
        let client = FormRelayClient::new("https://relay.example/f/abc", Duration::from_secs(5))
            .expect("client builds");
        assert_eq!(client.endpoint(), "https://relay.example/f/abc");
    }

    #[tokio::test]
    async fn posts_submission_as_json_and_accepts_success() {
        let (endpoint, received) = spawn_relay(StatusCode::OK, json!({ "ok": true })).await;
        let client = FormRelayClient::new(endpoint, Duration::from_secs(5)).expect("client builds");

        client.relay(&submission()).await.expect("relay accepts");

        let received = received.lock().expect("recorder mutex poisoned");
        assert_eq!(received.len(), 1);
        let (headers, payload) = &received[0];
        assert_eq!(
            headers.get(ACCEPT).and_then(|value| value.to_str().ok()),
            Some("application/json")
        );
        assert!(headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json")));
        assert_eq!(
            payload,
            &json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "New site",
                "message": "Looking for a five page portfolio."
            })
        );
    }

    #[tokio::test]
    async fn any_2xx_counts_as_delivered() {
        let (endpoint, _received) = spawn_relay(StatusCode::ACCEPTED, Value::Null).await;
        let client = FormRelayClient::new(endpoint, Duration::from_secs(5)).expect("client builds");

        assert!(client.relay(&submission()).await.is_ok());
    }

    #[tokio::test]
    async fn rejection_carries_status_and_first_error() {
        let (endpoint, _received) = spawn_relay(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "errors": [
                    { "field": "email", "message": "should be an email" },
                    { "field": "name", "message": "is required" }
                ]
            }),
        )
        .await;
        let client = FormRelayClient::new(endpoint, Duration::from_secs(5)).expect("client builds");

        let err = client
            .relay(&submission())
            .await
            .expect_err("relay rejects");

        match err {
            RelayError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "should be an email");
            }
            other => panic!("unexpected relay error: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener binds");
        let addr = listener.local_addr().expect("listener has address");
        drop(listener);
        let client = FormRelayClient::new(format!("http://{addr}/f/test"), Duration::from_secs(5))
            .expect("client builds");

        let err = client
            .relay(&submission())
            .await
            .expect_err("nothing listening");

        assert!(matches!(err, RelayError::Transport(_)));
    }
}
