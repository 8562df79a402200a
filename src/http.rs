//! Minimal blocking HTTP client for simple GET/POST calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RequestOptions;
use crate::error::{HelperError, Result};

/// Supported request methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Prefixes `http://` to URLs without an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

/// Sends a request and returns the body of a `200 OK` response.
///
/// GET parameters are appended to the query string; POST parameters are
/// sent as an urlencoded form. Any other final status is reported as
/// [`HelperError::HttpStatus`].
pub fn request(
    url: &str,
    params: &[(&str, &str)],
    method: Method,
    headers: &[(&str, &str)],
    options: &RequestOptions,
) -> Result<String> {
    let url = normalize_url(url);

    let mut builder = ureq::AgentBuilder::new().timeout(options.timeout());
    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let agent = builder.build();

    let mut req = match method {
        Method::Get => agent.get(&url),
        Method::Post => agent.post(&url),
    };
    for (name, value) in headers {
        req = req.set(name, value);
    }

    log::debug!("{} {} ({} params)", method, url, params.len());

    let response = match method {
        Method::Get => {
            for (key, value) in params {
                req = req.query(key, value);
            }
            req.call()
        }
        Method::Post => req.send_form(params),
    };

    match response {
        Ok(resp) if resp.status() == 200 => resp
            .into_string()
            .map_err(|e| HelperError::Http(e.to_string())),
        Ok(resp) => {
            log::warn!("{} {} returned {}", method, url, resp.status());
            Err(HelperError::HttpStatus(resp.status()))
        }
        Err(ureq::Error::Status(code, _)) => {
            log::warn!("{} {} returned {}", method, url, code);
            Err(HelperError::HttpStatus(code))
        }
        Err(e) => {
            log::warn!("{} {} failed: {}", method, url, e);
            Err(HelperError::Http(e.to_string()))
        }
    }
}

/// GET with no extra headers.
pub fn get(url: &str, params: &[(&str, &str)], options: &RequestOptions) -> Result<String> {
    request(url, params, Method::Get, &[], options)
}

/// POST form with no extra headers.
pub fn post(url: &str, params: &[(&str, &str)], options: &RequestOptions) -> Result<String> {
    request(url, params, Method::Post, &[], options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Serves a single canned response and returns the raw request it saw.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut seen = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
                seen.push_str(&line);
            }

            let mut body_bytes = vec![0u8; content_length];
            reader.read_exact(&mut body_bytes).unwrap();
            seen.push_str(&String::from_utf8(body_bytes).unwrap());

            let response = format!(
                "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            seen
        });

        (addr, handle)
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com/a"), "http://example.com/a");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("HTTP://example.com"), "HTTP://example.com");
        assert_eq!(normalize_url("httpbin.org/get"), "http://httpbin.org/get");
    }

    #[test]
    fn test_get_sends_query_and_headers() {
        let (addr, server) = serve_once("HTTP/1.1 200 OK", "pong");
        let options = RequestOptions {
            user_agent: Some("helpers-test".to_string()),
            ..Default::default()
        };

        let body = request(
            &format!("{}/echo", addr),
            &[("q", "rust"), ("page", "2")],
            Method::Get,
            &[("X-Token", "abc")],
            &options,
        )
        .unwrap();
        assert_eq!(body, "pong");

        let seen = server.join().unwrap().to_ascii_lowercase();
        assert!(seen.starts_with("get /echo?q=rust&page=2 "), "{}", seen);
        assert!(seen.contains("x-token: abc"));
        assert!(seen.contains("user-agent: helpers-test"));
    }

    #[test]
    fn test_post_sends_form() {
        let (addr, server) = serve_once("HTTP/1.1 200 OK", "{\"ok\":true}");

        let body = post(
            &format!("http://{}/submit", addr),
            &[("name", "alice"), ("age", "3")],
            &RequestOptions::default(),
        )
        .unwrap();
        assert_eq!(body, "{\"ok\":true}");

        let seen = server.join().unwrap();
        assert!(seen.starts_with("POST /submit "));
        assert!(seen.ends_with("name=alice&age=3"), "{}", seen);
    }

    #[test]
    fn test_non_200_is_an_error() {
        let (addr, server) = serve_once("HTTP/1.1 404 Not Found", "missing");

        let result = get(&addr, &[], &RequestOptions::default());
        assert!(matches!(result, Err(HelperError::HttpStatus(404))));
        server.join().unwrap();
    }

    #[test]
    fn test_connection_failure() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let result = get(&addr.to_string(), &[], &RequestOptions::default());
        assert!(matches!(result, Err(HelperError::Http(_))));
    }
}
