use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::config::Endpoints;
use crate::model::{FeedbackBuffer, RegistrationRequest};

use super::error::SubmitError;
use super::service::SubmissionService;

/// Generic failure text for registration responses without an `error` field.
const REGISTER_FAILED: &str = "Failed to submit registration";
/// Generic failure text for feedback; feedback bodies are never inspected.
const FEEDBACK_FAILED: &str = "Failed to submit feedback";

/// Shape of the backend's error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// How a non-2xx body is turned into a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorExtraction {
    /// Use the body's `error` string when present.
    FromBody,
    /// Always use the generic message.
    Generic,
}

/// [`SubmissionService`] backed by `reqwest`.
///
/// Requests carry a JSON body and no timeout; a hung backend keeps the
/// future pending.
#[derive(Debug, Clone)]
pub struct HttpSubmissionService {
    client: Client,
    endpoints: Endpoints,
}

impl HttpSubmissionService {
    /// Creates a service posting to `endpoints`.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    /// Returns the resolved endpoint URLs.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Probes `GET /api/health`.
    pub async fn health(&self) -> Result<(), SubmitError> {
        let url = self.endpoints.health.clone();
        debug!(%url, "checking backend health");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Http {
                status: status.as_u16(),
                message: format!("health check failed ({status})"),
            })
        }
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &T,
        extraction: ErrorExtraction,
        generic: &str,
    ) -> Result<(), SubmitError> {
        debug!(%url, "posting form");
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(%url, status = status.as_u16(), "submission accepted");
            return Ok(());
        }

        let message = match extraction {
            ErrorExtraction::Generic => generic.to_string(),
            ErrorExtraction::FromBody => match response.text().await {
                Ok(text) => error_message(&text, generic),
                Err(_) => generic.to_string(),
            },
        };
        Err(SubmitError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

impl SubmissionService for HttpSubmissionService {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), SubmitError> {
        self.post(
            self.endpoints.register.clone(),
            request,
            ErrorExtraction::FromBody,
            REGISTER_FAILED,
        )
        .await
    }

    async fn submit_feedback(&self, feedback: &FeedbackBuffer) -> Result<(), SubmitError> {
        self.post(
            self.endpoints.feedback.clone(),
            feedback,
            ErrorExtraction::Generic,
            FEEDBACK_FAILED,
        )
        .await
    }
}

/// Extracts `{"error": "..."}` from a failure body, falling back to `generic`.
fn error_message(body: &str, generic: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| generic.to_string())
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::config::Config;
    use crate::model::{RegistrationBuffer, RegistrationField, UserType};

    mod error_message {
        use super::*;

        #[test]
        fn uses_error_field() {
            assert_eq!(
                error_message(r#"{"error":"Email already registered"}"#, "generic"),
                "Email already registered"
            );
        }

        #[test]
        fn missing_field_falls_back() {
            assert_eq!(error_message(r#"{"message":"nope"}"#, "generic"), "generic");
        }

        #[test]
        fn null_field_falls_back() {
            assert_eq!(error_message(r#"{"error":null}"#, "generic"), "generic");
        }

        #[test]
        fn empty_field_falls_back() {
            assert_eq!(error_message(r#"{"error":""}"#, "generic"), "generic");
        }

        #[test]
        fn non_json_falls_back() {
            assert_eq!(error_message("<html>502</html>", "generic"), "generic");
        }
    }

    /// Serves exactly one request with a canned response, returning the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (Url::parse(&format!("http://{addr}")).unwrap(), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&data);
            if let Some(split) = text.find("\r\n\r\n") {
                let length = text[..split]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if data.len() >= split + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(data).unwrap()
    }

    fn service_for(base: &Url) -> HttpSubmissionService {
        let config = Config {
            api_url: Some(base.to_string()),
            ..Config::default()
        };
        HttpSubmissionService::new(config.endpoints().unwrap())
    }

    fn request() -> RegistrationRequest {
        let mut buffer = RegistrationBuffer::default();
        buffer.set(RegistrationField::Name, "A");
        buffer.set(RegistrationField::Email, "a@b.com");
        buffer.set(RegistrationField::Phone, "123");
        RegistrationRequest::new(&buffer, UserType::Creator)
    }

    #[tokio::test]
    async fn register_posts_json_and_accepts_2xx() {
        let (base, server) = serve_once("201 Created", r#"{"message":"ok"}"#).await;
        let service = service_for(&base);

        assert_eq!(service.register(&request()).await, Ok(()));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /api/register HTTP/1.1"), "{raw}");
        assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(raw.contains(r#""userType":"Creator""#), "{raw}");
    }

    #[tokio::test]
    async fn register_surfaces_body_error() {
        let (base, server) =
            serve_once("400 Bad Request", r#"{"error":"Email already registered"}"#).await;
        let service = service_for(&base);

        assert_eq!(
            service.register(&request()).await,
            Err(SubmitError::Http {
                status: 400,
                message: "Email already registered".into(),
            })
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn feedback_ignores_body_error() {
        let (base, server) =
            serve_once("400 Bad Request", r#"{"error":"Validation failed"}"#).await;
        let service = service_for(&base);

        assert_eq!(
            service.submit_feedback(&FeedbackBuffer::default()).await,
            Err(SubmitError::Http {
                status: 400,
                message: FEEDBACK_FAILED.into(),
            })
        );
        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /api/feedback HTTP/1.1"), "{raw}");
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let service = service_for(&Url::parse(&format!("http://{addr}")).unwrap());

        let result = service.register(&request()).await;
        assert!(matches!(result, Err(SubmitError::Network(_))), "{result:?}");
    }

    #[tokio::test]
    async fn health_checks_status() {
        let (base, server) = serve_once("200 OK", r#"{"status":"healthy"}"#).await;
        let service = service_for(&base);
        assert_eq!(service.health().await, Ok(()));
        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /api/health HTTP/1.1"), "{raw}");
    }
}
