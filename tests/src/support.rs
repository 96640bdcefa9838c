use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use kiva_common::error::FetchError;
use kiva_core::screen::{DisplaySink, LoanList};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: String::new() }
    }
}

/// Serves the given responses in order, one per connection. The last one
/// repeats once the list is exhausted. With no responses the server accepts
/// connections and never answers.
pub struct MockServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(responses: Vec<CannedResponse>) -> anyhow::Result<Self> {
        let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let hits: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
        let hits_ref = hits.clone();

        let handle = tokio::spawn(async move {
            let mut held: Vec<TcpStream> = Vec::new();
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let n: usize = hits_ref.fetch_add(1, Ordering::SeqCst);
                let response = match responses.get(n).or(responses.last()) {
                    Some(r) => r.clone(),
                    None => {
                        held.push(stream);
                        continue;
                    }
                };
                let _ = read_request_head(&mut stream).await;
                let _ = stream.write_all(render(&response).as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Ok(Self { addr, hits, handle })
    }

    pub fn url(&self) -> String {
        format!("http://{}/v1/loans/newest.json", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn read_request_head(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut head: Vec<u8> = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n: usize = stream.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    Ok(())
}

fn render(response: &CannedResponse) -> String {
    let reason: &str = match response.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    )
}

pub fn loan_json(name: &str, amount: i64, purpose: &str, country: &str) -> String {
    format!(
        r#"{{"id":1,"name":"{name}","loan_amount":{amount},"use":"{purpose}","location":{{"country":"{country}","town":"Town"}},"status":"fundraising"}}"#
    )
}

pub fn newest_body(loans: &[String]) -> String {
    format!(
        r#"{{"paging":{{"page":1,"total":2}},"loans":[{}]}}"#,
        loans.join(",")
    )
}

#[derive(Default)]
pub struct CountingDisplay {
    pub changes: usize,
    pub failures: usize,
    pub last_count: usize,
}

impl DisplaySink for CountingDisplay {
    fn data_changed(&mut self, loans: &LoanList) {
        self.changes += 1;
        self.last_count = loans.record_count();
    }

    fn fetch_failed(&mut self, _err: &FetchError) {
        self.failures += 1;
    }
}
