//! Minimal HTTP/1.1 server imitating the image bank for integration tests.
//!
//! `POST /banco-imagens//maisfotos?pagina=N…` answers with the N-th page
//! fragment (empty past the end); `GET <path>` answers with the registered
//! image bytes or 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub const GALLERY_PATH: &str = "/banco-imagens//maisfotos";

#[derive(Debug, Default, Clone)]
pub struct GallerySite {
    pub pages: Vec<String>,
    pub images: HashMap<String, Vec<u8>>,
}

pub struct RunningServer {
    /// e.g. "http://127.0.0.1:12345"
    pub origin: String,
    /// Request lines in arrival order ("POST /…?pagina=1 HTTP/1.1").
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl RunningServer {
    pub fn gallery_url(&self) -> String {
        format!("{}{}", self.origin, GALLERY_PATH)
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts the server in a background thread. It runs until the process exits.
pub fn start(site: GallerySite) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let site = Arc::new(site);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let site = Arc::clone(&site);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &site, &log));
        }
    });
    RunningServer {
        origin: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(mut stream: std::net::TcpStream, site: &GallerySite, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]).into_owned();
    let request_line = request.lines().next().unwrap_or("").to_string();
    log.lock().unwrap().push(request_line.clone());

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");

    let (status, body): (&str, Vec<u8>) = if method == "POST" && target.starts_with(GALLERY_PATH) {
        let page = page_number(target).unwrap_or(0);
        let body = page
            .checked_sub(1)
            .and_then(|i| site.pages.get(i))
            .cloned()
            .unwrap_or_default();
        ("200 OK", body.into_bytes())
    } else if method == "GET" {
        match site.images.get(target) {
            Some(bytes) => ("200 OK", bytes.clone()),
            None => ("404 Not Found", Vec::new()),
        }
    } else {
        ("405 Method Not Allowed", Vec::new())
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}

fn page_number(target: &str) -> Option<usize> {
    let rest = target.split("pagina=").nth(1)?;
    rest.split('&').next()?.parse().ok()
}
