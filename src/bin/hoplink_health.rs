use hoplink::{config::RelayConfig, relay::HealthPayload};
use lambda_http::{run, service_fn, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .init();

    run(service_fn(health_handler)).await
}

async fn health_handler(_request: Request) -> Result<Response<Body>, Error> {
    let config = RelayConfig::from_env();

    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(&HealthPayload::new(
            &config,
        ))?))
        .map_err(Box::new)?)
}
