use std::sync::{Arc, Mutex};

use pricesweep::domain::PriceFilter;
use rust_decimal::Decimal;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use url::Url;

type Respond = dyn Fn(&str) -> (u16, String) + Send + Sync;

/// A one-route HTTP server answering every request with a canned response.
///
/// Each request target (path and query) is recorded in arrival order.
pub struct CatalogServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl CatalogServer {
    /// Serve `respond(target)` for every request.
    pub async fn start<R>(respond: R) -> Self
    where
        R: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond: Arc<Respond> = Arc::new(respond);

        let recorded = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    return;
                };
                let recorded = Arc::clone(&recorded);
                let respond = Arc::clone(&respond);
                tokio::spawn(async move {
                    serve(socket, recorded, respond).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    /// Always answer with `status` and `body`.
    pub async fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::start(move |_| (status, body.clone())).await
    }

    /// A page-capped catalog over `prices` honoring `minPrice`/`maxPrice`.
    ///
    /// Item `i` gets `id = i` and the `i`-th price.
    pub async fn catalog(prices: Vec<Decimal>, page_cap: usize) -> Self {
        Self::start(move |target| (200, catalog_page(&prices, page_cap, target))).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> Url {
        Url::parse(&format!("{}/products", self.base_url)).unwrap()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for CatalogServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(mut socket: TcpStream, recorded: Arc<Mutex<Vec<String>>>, respond: Arc<Respond>) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    recorded.lock().unwrap().push(target.clone());

    let (status, body) = respond(&target);
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn catalog_page(prices: &[Decimal], page_cap: usize, target: &str) -> String {
    let url = Url::parse(&format!("http://localhost{target}")).unwrap();
    let mut filter = PriceFilter::unbounded();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "minPrice" => filter.min = value.parse().ok(),
            "maxPrice" => filter.max = value.parse().ok(),
            _ => {}
        }
    }

    let matching: Vec<serde_json::Value> = prices
        .iter()
        .enumerate()
        .filter(|(_, price)| filter.matches(**price))
        .map(|(id, price)| json!({ "id": id, "price": price.to_string() }))
        .collect();
    let products: Vec<serde_json::Value> = matching.iter().take(page_cap).cloned().collect();

    json!({
        "total": matching.len(),
        "count": products.len(),
        "products": products,
    })
    .to_string()
}
