use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;

use matchday_predictor::api::{ApiFootballClient, FootballApi};
use matchday_predictor::config::{API_KEY_VAR, ApiConfig, BASE_URL_VAR};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn client_for(base_url: &str) -> ApiFootballClient {
    let base_url = base_url.to_string();
    let config = ApiConfig::from_lookup(|key| match key {
        k if k == API_KEY_VAR => Some("test-key".to_string()),
        k if k == BASE_URL_VAR => Some(base_url.clone()),
        _ => None,
    })
    .expect("config should build");
    ApiFootballClient::new(config).expect("client should build")
}

/// Serves a single request with `status` and `body`, handing back the raw
/// request head it received.
fn serve_once(status: &str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    let status = status.to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let reply = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(reply.as_bytes()).expect("write reply");
        String::from_utf8_lossy(&head).into_owned()
    });
    (format!("http://{addr}/v3"), handle)
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/v3")
}

#[test]
fn fixtures_request_carries_query_and_key() {
    let (base, server) = serve_once("200 OK", read_fixture("fixtures.json"));
    let client = client_for(&base);
    let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();

    let fixtures = client.fixtures(39, 2023, date);
    let head = server.join().expect("server thread");

    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0].home.name, "Arsenal");
    let request_line = head.lines().next().unwrap_or_default();
    assert_eq!(
        request_line,
        "GET /v3/fixtures?league=39&season=2023&date=2023-06-15 HTTP/1.1"
    );
    let lower = head.to_ascii_lowercase();
    assert!(lower.contains("\r\nx-rapidapi-key: test-key\r\n"), "{head}");
    let host = base.trim_start_matches("http://").trim_end_matches("/v3");
    assert!(lower.contains(&format!("\r\nx-rapidapi-host: {host}\r\n")), "{head}");
}

#[test]
fn server_error_gives_empty_leagues() {
    let (base, server) = serve_once("500 Internal Server Error", read_fixture("leagues.json"));
    let client = client_for(&base);

    assert!(client.leagues().is_empty());
    let head = server.join().expect("server thread");
    assert!(head.starts_with("GET /v3/leagues HTTP/1.1"));
}

#[test]
fn invalid_body_gives_no_team_statistics() {
    let (base, server) = serve_once("200 OK", "<html>upstream timeout</html>".to_string());
    let client = client_for(&base);

    assert_eq!(client.team_statistics(42, 39, 2023), None);
    let head = server.join().expect("server thread");
    assert!(head.starts_with("GET /v3/teams/statistics?team=42&league=39&season=2023 HTTP/1.1"));
}

#[test]
fn unreachable_server_gives_empty_results() {
    let client = client_for(&closed_port_url());

    assert_eq!(client.team_statistics(42, 39, 2023), None);
    assert!(client.leagues().is_empty());
    assert!(client.fixture_statistics(1035037).is_empty());
    let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    assert!(client.fixtures(39, 2023, date).is_empty());
}
