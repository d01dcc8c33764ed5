// tests/names.rs
//
// Response rules, plus the HTTP client against a one-shot server on
// 127.0.0.1. Nothing leaves the machine.
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use scout_viewer::config::consts::{NO_TEAM_FOUND, UNKNOWN_NAME};
use scout_viewer::config::options::NameSource;
use scout_viewer::core::net::{name_from_response, resolver_for, team_query, FtcScout, Offline};
use scout_viewer::core::NameResolver;

/// Serve one HTTP response, or hold the connection for `stall` without
/// answering. The request body comes back through the channel.
fn serve_once(status: &'static str, body: &'static str, stall: Option<Duration>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/graphql", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else { return };
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                break;
            }
            let lower = line.to_ascii_lowercase();
            if let Some(v) = lower.strip_prefix("content-length:") {
                content_length = v.trim().parse().unwrap_or(0);
            }
        }
        let mut req_body = vec![0u8; content_length];
        let _ = reader.read_exact(&mut req_body);
        let _ = tx.send(String::from_utf8_lossy(&req_body).into_owned());

        if let Some(wait) = stall {
            thread::sleep(wait);
            return;
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(resp.as_bytes());
        let _ = stream.flush();
    });

    (url, rx)
}

fn client(url: &str, timeout: Duration) -> FtcScout {
    FtcScout::new(url, timeout).unwrap()
}

#[test]
fn query_names_the_team() {
    assert_eq!(team_query(16236), "{ teamByNumber(number: 16236) { name } }");
}

#[test]
fn name_found() {
    let body = r#"{"data":{"teamByNumber":{"name":"Robo Raccoons"}}}"#;
    assert_eq!(name_from_response(200, body), "Robo Raccoons");
}

#[test]
fn non_200_is_unknown() {
    let body = r#"{"data":{"teamByNumber":{"name":"Robo Raccoons"}}}"#;
    assert_eq!(name_from_response(500, body), UNKNOWN_NAME);
    assert_eq!(name_from_response(404, ""), UNKNOWN_NAME);
}

#[test]
fn bad_json_is_unknown() {
    assert_eq!(name_from_response(200, "<html>busy</html>"), UNKNOWN_NAME);
    assert_eq!(name_from_response(200, "[1,2]"), UNKNOWN_NAME);
}

#[test]
fn null_team_is_unknown() {
    assert_eq!(name_from_response(200, r#"{"data":{"teamByNumber":null}}"#), UNKNOWN_NAME);
    assert_eq!(name_from_response(200, r#"{"data":null,"errors":[]}"#), UNKNOWN_NAME);
}

#[test]
fn missing_key_is_no_team_found() {
    assert_eq!(name_from_response(200, r#"{"errors":[{"message":"x"}]}"#), NO_TEAM_FOUND);
    assert_eq!(name_from_response(200, r#"{"data":{}}"#), NO_TEAM_FOUND);
    assert_eq!(name_from_response(200, r#"{"data":{"teamByNumber":{}}}"#), NO_TEAM_FOUND);
}

#[test]
fn offline_resolvers() {
    assert_eq!(Offline.resolve(1), UNKNOWN_NAME);
    assert_eq!(resolver_for(&NameSource::Offline).resolve(7), UNKNOWN_NAME);

    let fixed = |team: u32| format!("#{team}");
    assert_eq!(fixed.resolve(3), "#3");
}

#[test]
fn http_name_found() {
    let (url, rx) = serve_once("200 OK", r#"{"data":{"teamByNumber":{"name":"Robots"}}}"#, None);
    assert_eq!(client(&url, Duration::from_secs(5)).resolve(16236), "Robots");

    let sent = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&sent).unwrap();
    assert_eq!(json["query"], team_query(16236));
}

#[test]
fn http_server_error_is_unknown() {
    let (url, _rx) = serve_once("500 Internal Server Error", r#"{"data":{"teamByNumber":{"name":"Robots"}}}"#, None);
    assert_eq!(client(&url, Duration::from_secs(5)).resolve(1), UNKNOWN_NAME);
}

#[test]
fn http_missing_team_is_no_team_found() {
    let (url, _rx) = serve_once("200 OK", r#"{"data":{}}"#, None);
    assert_eq!(client(&url, Duration::from_secs(5)).resolve(1), NO_TEAM_FOUND);
}

#[test]
fn http_refused_connection_is_unknown() {
    // Bind to learn a free port, then close it before connecting
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/graphql", listener.local_addr().unwrap());
    drop(listener);

    assert_eq!(client(&url, Duration::from_secs(5)).resolve(1), UNKNOWN_NAME);
}

#[test]
fn http_timeout_is_unknown() {
    let (url, _rx) = serve_once("200 OK", "", Some(Duration::from_secs(3)));
    assert_eq!(client(&url, Duration::from_millis(300)).resolve(1), UNKNOWN_NAME);
}
