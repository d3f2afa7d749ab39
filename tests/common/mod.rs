//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A request captured by [`StubServer`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Request body is not JSON")
    }
}

/// Canned reply for one request
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into(), delay: Duration::ZERO }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into(), delay: Duration::ZERO }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Minimal HTTP/1.1 server on a random local port
///
/// Replies are served in order, one per connection; the last reply repeats
/// once the list is exhausted. Every request is recorded.
pub struct StubServer {
    url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    pub fn start(replies: Vec<StubReply>) -> Self {
        assert!(!replies.is_empty(), "StubServer needs at least one reply");
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let url = format!("http://{}/search", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for (idx, stream) in listener.incoming().enumerate() {
                let Ok(stream) = stream else { break };
                let reply = replies[idx.min(replies.len() - 1)].clone();
                let recorded = Arc::clone(&recorded);
                // Each connection on its own thread so delayed replies overlap
                thread::spawn(move || handle_connection(stream, reply, recorded));
            }
        });

        Self { url, requests }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(
    stream: TcpStream,
    reply: StubReply,
    recorded: Arc<Mutex<Vec<CapturedRequest>>>,
) {
    let mut reader = BufReader::new(stream.try_clone().expect("Failed to clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; content_length];
    let _ = reader.read_exact(&mut body);

    recorded.lock().unwrap().push(CapturedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    if !reply.delay.is_zero() {
        thread::sleep(reply.delay);
    }

    let mut stream = stream;
    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// JSON for one search result
pub fn result_json(event_id: &str, title: &str, date: &str) -> String {
    format!(
        r#"{{"event_id":"{}","text":"Discussion of protected bike lanes on {}","meeting_date":"{}T00:00:00","meeting_title":"{}","speaker":"Councilmember Morales","relevance_score":0.87,"start_time":"00:12:05","end_time":"00:12:41"}}"#,
        event_id, title, date, title
    )
}

/// JSON for a full search response
pub fn response_json(results: &[String], total_results: usize, summary: &str) -> String {
    format!(
        r#"{{"results":[{}],"total_results":{},"processing_time":0.31,"summary":"{}"}}"#,
        results.join(","),
        total_results,
        summary
    )
}

/// Response with `count` results, all counted in `total_results`
pub fn numbered_response(count: usize) -> String {
    let results: Vec<String> = (0..count)
        .map(|i| result_json(&format!("evt-{}", i), &format!("Meeting {}", i), "2023-03-14"))
        .collect();
    response_json(&results, count, "Several meetings covered this topic.")
}
