//! One-shot local HTTP server standing in for the Web API in tests.

use crate::client::SpotifyClient;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tiny_http::{Header, Response, Server};

/// What the server saw of the request it answered.
#[derive(Debug)]
pub(crate) struct RecordedRequest {
    pub method: String,
    /// Path and query, e.g. `/v1/me/tracks?limit=2`.
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Answer the next request with `status` and `body`, returning a client
/// pointed at the server and a channel yielding the recorded request.
pub(crate) fn serve(status: u16, body: &str) -> (SpotifyClient, Receiver<RecordedRequest>) {
    let server = Server::http("127.0.0.1:0").expect("bind fixture server");
    let addr = server
        .server_addr()
        .to_ip()
        .expect("fixture server listens on TCP");
    let body = body.to_owned();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok(mut request) = server.recv() else {
            return;
        };
        let mut request_body = String::new();
        let _ = request.as_reader().read_to_string(&mut request_body);
        let authorization = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Authorization"))
            .map(|h| h.value.as_str().to_owned());
        let _ = tx.send(RecordedRequest {
            method: request.method().to_string(),
            url: request.url().to_owned(),
            authorization,
            body: request_body,
        });

        let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
            .expect("static header");
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(content_type);
        let _ = request.respond(response);
    });

    let client = SpotifyClient::builder()
        .base_url(format!("http://{addr}/v1"))
        .access_token("test-token")
        .build()
        .expect("build client");
    (client, rx)
}

/// Accept one connection, read the request head, write `raw` verbatim and
/// hang up. For responses `tiny_http` refuses to produce, such as a body
/// shorter than its `Content-Length`.
pub(crate) fn serve_raw(raw: &'static [u8]) -> (SpotifyClient, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind raw fixture");
    let addr = listener.local_addr().expect("raw fixture address");

    let handle = thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        while reader.read_line(&mut line).is_ok_and(|n| n > 0) {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let mut stream = reader.into_inner();
        let _ = stream.write_all(raw);
        let _ = stream.flush();
    });

    let client = SpotifyClient::builder()
        .base_url(format!("http://{addr}/v1"))
        .access_token("test-token")
        .build()
        .expect("build client");
    (client, handle)
}
