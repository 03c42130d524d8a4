//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use uuid::Uuid;

use logship::{
    Log, LoggingSystem, MainContext, MemorySettings, MemorySink, StandardCategory, UploadError,
    Uploader,
};

/// Uploader that records every call and answers from a script.
#[derive(Clone, Default)]
pub struct RecordingUploader {
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Log>>>,
    fail: bool,
    server_id: Uuid,
}

impl RecordingUploader {
    /// Uploader that accepts every log and assigns it a fixed id.
    pub fn accepting() -> Self {
        Self {
            server_id: Uuid::new_v4(),
            ..Self::default()
        }
    }

    /// Uploader that rejects every log.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn server_id(&self) -> Uuid {
        self.server_id
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Log> {
        self.received.lock().unwrap().clone()
    }
}

impl Uploader for RecordingUploader {
    async fn upload(&self, log: Log) -> Result<Uuid, UploadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(log);
        if self.fail {
            Err(UploadError::Status {
                status: 503,
                body: "collector unavailable".to_string(),
            })
        } else {
            Ok(self.server_id)
        }
    }
}

pub type TestSystem = LoggingSystem<StandardCategory, MemorySettings, RecordingUploader>;

/// Build a system over a private sink.
pub fn test_system(
    do_upload_logs: bool,
    uploader: RecordingUploader,
) -> (TestSystem, Arc<MemorySink>, MainContext<MemorySettings>) {
    let sink = Arc::new(MemorySink::new());
    let settings = MainContext::new(MemorySettings::new(do_upload_logs));
    let system = LoggingSystem::with_sink(
        format!("com.example.test.{}", Uuid::new_v4()),
        sink.clone(),
        settings.clone(),
        uploader,
    )
    .unwrap();
    (system, sink, settings)
}

/// Start a mock collector on an ephemeral port.
///
/// Every request body is forwarded on the returned channel and answered with
/// `status` and `body`.
pub async fn start_mock_collector(
    status: u16,
    body: String,
) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let body = Arc::new(body);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let tx = tx.clone();
                    let body = body.clone();
                    tokio::spawn(async move {
                        let request_body = read_request_body(&mut socket).await;
                        let _ = tx.send(request_body);

                        let status_text = match status {
                            200 => "200 OK",
                            201 => "201 Created",
                            401 => "401 Unauthorized",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, rx)
}

/// Read one HTTP/1.1 request and return its body.
async fn read_request_body(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return String::new();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf[header_end..]).into_owned()
}
