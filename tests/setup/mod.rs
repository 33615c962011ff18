use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use salvo::{listener::TcpListener, Server};
use url::Url;

use parser_server::domain::service::IngredientExtractor;
use parser_server::infra::{router, service::RuleBasedExtractor};

/// Serve the app router on a local port and wait until it accepts requests.
pub async fn start_server(port: u16) -> (Client, Url) {
    let extractor: Arc<dyn IngredientExtractor> = Arc::new(RuleBasedExtractor::new());
    let app = router::app(extractor);

    tokio::spawn(async move {
        let listener = TcpListener::bind(&format!("127.0.0.1:{port}"));
        Server::new(listener).serve(app).await;
    });

    let client = create_client();
    let url = test_url(port);
    wait_ready(&client, &url).await;
    (client, url)
}

pub fn test_url(port: u16) -> Url {
    Url::parse(format!("http://127.0.0.1:{port}").as_str()).expect("Expect a valid test url")
}

async fn wait_ready(client: &Client, url: &Url) {
    for _ in 0..50 {
        let health = url.join("/health").unwrap();
        if client.get(health).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server did not become ready on {url}");
}

fn create_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.append("accept", HeaderValue::from_static("application/json"));

    let connect_timeout = 1000 * 5; // 5 sec
    let timeout = 1000 * 10; // 10 sec

    Client::builder()
        .connect_timeout(Duration::from_millis(connect_timeout))
        .timeout(Duration::from_millis(timeout))
        .default_headers(headers)
        .build()
        .expect("Expect to create a http client")
}
