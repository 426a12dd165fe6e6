use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Minimal HTTP/1.1 server answering fixed routes on 127.0.0.1
///
/// Routes match on the request target including the query string. Unknown
/// targets get a 404 with an empty body.
pub struct TestServer {
    base_url: String,
}

#[derive(Clone)]
pub struct Route {
    pub target: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn new(target: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            target,
            status,
            body: body.into(),
        }
    }
}

impl TestServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(handle(stream, routes));
            }
        });

        Self { base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn handle(mut stream: TcpStream, routes: Vec<Route>) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        request.extend_from_slice(&chunk[..n]);
    }

    let request = String::from_utf8_lossy(&request);
    let target = request.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = routes
        .iter()
        .find(|r| r.target == target)
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, String::new()));

    let reason = if status < 400 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
