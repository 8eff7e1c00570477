//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with a fixed status and body and records what it was
//! asked, so tests can check the request line, headers, and hit count.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Requests seen by the server, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Seen {
    /// Request target (path + query) per request.
    pub targets: Vec<String>,
    /// Raw header lines per request.
    pub headers: Vec<Vec<String>>,
}

pub struct InventoryServer {
    pub base_url: String,
    seen: Arc<Mutex<Seen>>,
}

impl InventoryServer {
    pub fn seen(&self) -> Seen {
        self.seen.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.lock().unwrap().targets.len()
    }

    /// Value of header `name` on the first request, if any.
    pub fn first_header(&self, name: &str) -> Option<String> {
        let seen = self.seen();
        let lines = seen.headers.first()?;
        lines.iter().find_map(|line| {
            let (n, v) = line.split_once(':')?;
            n.trim()
                .eq_ignore_ascii_case(name)
                .then(|| v.trim().to_string())
        })
    }
}

/// Starts a server in a background thread that always replies `status` with `body`.
/// The server runs until the process exits.
pub fn start(status: u16, body: &str) -> InventoryServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Seen::default()));
    let body = Arc::new(body.to_string());
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen_srv);
            thread::spawn(move || handle(stream, status, &body, &seen));
        }
    });
    InventoryServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        seen,
    }
}

fn handle(mut stream: TcpStream, status: u16, body: &str, seen: &Mutex<Seen>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    let mut lines = request.lines();
    let target = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    let headers: Vec<String> = lines
        .take_while(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();
    {
        let mut s = seen.lock().unwrap();
        s.targets.push(target);
        s.headers.push(headers);
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
