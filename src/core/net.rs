// src/core/net.rs
//
// Blocking HTTP GET with a browser-like header set. One attempt, no retry;
// anything but 200 is an error and the caller keeps no partial data.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;

use crate::config::consts::{ACCEPT_ENCODING, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use crate::error::{Error, Result};

fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    h.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE));
    h.insert(header::REFERER, HeaderValue::from_static(REFERER));
    h.insert(header::ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING));
    h.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    h.insert(header::UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    h
}

fn client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .default_headers(browser_headers())
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| Error::Transport { url: s!(), reason: e.to_string() })
}

fn transport(url: &str, e: reqwest::Error) -> Error {
    Error::Transport { url: s!(url), reason: e.to_string() }
}

/// GET `url` and return the raw body bytes.
pub fn fetch_bytes(url: &str, timeout_secs: u64) -> Result<Vec<u8>> {
    let url = url.trim();
    logd!("Net: GET {url}");

    let resp = client(timeout_secs)?
        .get(url)
        .send()
        .map_err(|e| transport(url, e))?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(Error::Status { url: s!(url), code: status.as_u16() });
    }

    let body = resp.bytes().map_err(|e| transport(url, e))?;
    logd!("Net: {url} → {} bytes", body.len());
    Ok(body.to_vec())
}

/// GET `url` and return the page markup. Invalid UTF-8 is replaced, not fatal.
pub fn fetch_page(url: &str, timeout_secs: u64) -> Result<String> {
    let bytes = fetch_bytes(url, timeout_secs)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_set_matches_browser_profile() {
        let h = browser_headers();
        assert_eq!(h.len(), 7);
        assert_eq!(h[header::CONNECTION], "keep-alive");
        assert_eq!(h[header::CACHE_CONTROL], "max-age=0");
        assert_eq!(h[header::UPGRADE_INSECURE_REQUESTS], "1");
        assert!(h[header::USER_AGENT].to_str().unwrap().contains("Chrome/120"));
    }

    /// Serve one canned response on a local port; hand back the raw request.
    fn serve_once(response: &'static str) -> (String, std::thread::JoinHandle<String>) {
        use std::io::{Read, Write};
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/reviews", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 { break; }
                req.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&req).to_lowercase()
        });
        (url, handle)
    }

    #[test]
    fn non_200_is_status_error_and_headers_go_out() {
        let (url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot found",
        );
        let err = fetch_page(&url, 5).unwrap_err();
        assert!(matches!(&err, Error::Status { code: 404, url: u } if *u == url), "{err:?}");

        let req = server.join().unwrap();
        assert!(req.starts_with("get /reviews http/1.1"));
        for line in [
            "user-agent: mozilla/5.0",
            "accept-language: en-us,en;q=0.9",
            "referer: https://www.amazon.com/",
            "accept-encoding: gzip, deflate, br",
            "connection: keep-alive",
            "cache-control: max-age=0",
            "upgrade-insecure-requests: 1",
        ] {
            assert!(req.contains(line), "missing {line:?} in {req}");
        }
        assert!(req.contains("chrome/120"));
    }

    #[test]
    fn ok_body_is_returned() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 11\r\nconnection: close\r\n\r\n<p>page</p>",
        );
        assert_eq!(fetch_page(&url, 5).unwrap(), "<p>page</p>");
        server.join().unwrap();
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        // Port 9 on localhost: nothing listens there in CI containers.
        let err = fetch_page("http://127.0.0.1:9/", 2).unwrap_err();
        assert!(matches!(err, Error::Transport { .. }), "{err:?}");
    }
}
