//! Minimal HTTP/1.1 server standing in for the repository API in integration tests.
//!
//! Serves canned responses keyed by request path; unknown paths get a GitHub-style
//! 404. Every request head is recorded so tests can assert what was (not) sent.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

pub struct ApiServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ApiServer {
    /// Request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// JSON body shaped like `GET /repos/{owner}/{name}`.
pub fn repo_json(full_name: &str, description: Option<&str>) -> String {
    let login = full_name.split('/').next().unwrap_or_default();
    let description = match description {
        Some(d) => format!("\"{d}\""),
        None => "null".to_string(),
    };
    format!(
        r#"{{"id":1,"full_name":"{full_name}","description":{description},"owner":{{"login":"{login}","id":2,"avatar_url":"https://avatars.example.com/{login}.png"}},"stargazers_count":42,"forks_count":7,"open_issues_count":3}}"#
    )
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(routes: Vec<(&str, CannedResponse)>) -> ApiServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, CannedResponse>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, resp)| (path.to_string(), resp))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    {
        let requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let requests = Arc::clone(&requests);
                thread::spawn(move || handle(stream, &routes, &requests));
            }
        });
    }
    ApiServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, CannedResponse>,
    requests: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s.to_string(),
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    requests.lock().unwrap().push(request);

    let resp = routes.get(&path).cloned().unwrap_or(CannedResponse {
        status: 404,
        body: r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#
            .to_string(),
    });
    let reason = match resp.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        resp.status,
        reason,
        resp.body.len(),
        resp.body
    );
    let _ = stream.write_all(response.as_bytes());
}
