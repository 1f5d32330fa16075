//! Background HTTP request runner
//!
//! Requests run on worker threads and report back over an mpsc channel
//! drained on Tick. Fire-and-forget: no timeout, no retry, no
//! cancellation - overlapping requests race independently and the only
//! serialization is each control's own disabled flag.

use serde_json::Value;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// What to do with a completion; carried through the worker untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    MaterialDownload { id: u32 },
    ProfileUpdate,
}

/// Payload delivered for an HTTP 200 response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Json(Value),
    /// Raw body when the 200 response was not valid JSON
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Any status other than 200; body kept for the log only
    Status { status: u16, body: String },
    Transport(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { status, body } => write!(f, "status {}: {}", status, body),
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
        }
    }
}

pub type ApiResult = Result<ApiPayload, ApiError>;

/// An asynchronous request about to be spawned
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Serialized as the JSON request body when present
    pub body: Option<Value>,
    /// Session cookie value sent as `session=<token>`
    pub session_token: Option<String>,
    pub context: RequestContext,
}

/// A finished request ready to be handled on the UI thread
#[derive(Debug)]
pub struct Completion {
    pub context: RequestContext,
    pub result: ApiResult,
}

/// Spawns request worker threads and collects their completions
pub struct ApiRunner {
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl Default for ApiRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiRunner {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Issue a request on a worker thread; the completion arrives via `poll`
    pub fn request(&self, req: ApiRequest) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let context = req.context.clone();
            let result = execute(&req);
            let _ = tx.send(Completion { context, result });
        });
    }

    /// Drain every completion that has arrived since the last poll
    pub fn poll(&self) -> Vec<Completion> {
        let mut done = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            done.push(completion);
        }
        done
    }
}

/// Run one request to completion on the calling thread
fn execute(req: &ApiRequest) -> ApiResult {
    let client = reqwest::blocking::Client::new();

    let mut builder = match req.method {
        HttpMethod::Get => client.get(&req.url),
        HttpMethod::Post => client.post(&req.url),
    };
    builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
    if let Some(token) = &req.session_token {
        builder = builder.header(reqwest::header::COOKIE, format!("session={}", token));
    }
    if let Some(body) = &req.body {
        builder = builder.json(body);
    }

    let response = builder
        .send()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let text = response
        .text()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    classify_response(status, text)
}

/// Map a finished response to the payload the handler sees.
///
/// Exactly 200 is success; the body is parsed as JSON with a silent
/// raw-text fallback for unparseable bodies. Everything else is an error
/// whose detail never reaches the user.
pub fn classify_response(status: u16, body: String) -> ApiResult {
    if status == 200 {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(ApiPayload::Json(value)),
            Err(_) => Ok(ApiPayload::Text(body)),
        }
    } else {
        Err(ApiError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Duration;

    #[test]
    fn test_classify_200_json() {
        let result = classify_response(200, r#"{"status":"success"}"#.to_string());
        assert_eq!(result, Ok(ApiPayload::Json(json!({"status": "success"}))));
    }

    #[test]
    fn test_classify_200_non_json_falls_back_to_text() {
        let result = classify_response(200, "not json".to_string());
        assert_eq!(result, Ok(ApiPayload::Text("not json".to_string())));
    }

    #[test]
    fn test_classify_non_200_is_error() {
        let result = classify_response(500, "boom".to_string());
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string()
            })
        );
    }

    #[test]
    fn test_runner_delivers_text_fallback_from_live_endpoint() {
        // One-shot local endpoint returning 200 with a non-JSON body
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 8\r\nConnection: close\r\n\r\nnot json",
            );
        });

        let runner = ApiRunner::new();
        runner.request(ApiRequest {
            method: HttpMethod::Get,
            url: format!("http://{}/x", addr),
            body: None,
            session_token: None,
            context: RequestContext::ProfileUpdate,
        });

        let mut completions = Vec::new();
        for _ in 0..100 {
            completions = runner.poll();
            if !completions.is_empty() {
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        server.join().unwrap();

        assert_eq!(completions.len(), 1);
        let completion = completions.remove(0);
        assert_eq!(completion.context, RequestContext::ProfileUpdate);
        assert_eq!(
            completion.result,
            Ok(ApiPayload::Text("not json".to_string()))
        );
    }

    #[test]
    fn test_runner_reports_transport_failure() {
        // Bind-then-drop yields a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let runner = ApiRunner::new();
        runner.request(ApiRequest {
            method: HttpMethod::Post,
            url: format!("http://{}/x", addr),
            body: Some(json!({"k": "v"})),
            session_token: None,
            context: RequestContext::MaterialDownload { id: 42 },
        });

        let mut completions = Vec::new();
        for _ in 0..100 {
            completions = runner.poll();
            if !completions.is_empty() {
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }

        assert_eq!(completions.len(), 1);
        assert!(matches!(
            completions[0].result,
            Err(ApiError::Transport(_))
        ));
    }
}
