use salvo::{listener::TcpListener, Server};

use parser_server::config::env_var;
use parser_server::infra::{router, service};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let extractor = service::extractor_from_env();
    let address = format!("{}:{}", env_var::get().host, env_var::get().port);
    tracing::info!("parser server listening on {address}");
    let listener = TcpListener::bind(&address);
    Server::new(listener).serve(router::app(extractor)).await;
}
