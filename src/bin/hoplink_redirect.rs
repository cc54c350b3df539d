use hoplink::{
    config::RelayConfig,
    relay::{redirect_response, RelayRequest, RelayResponse},
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .init();

    run(service_fn(redirect_handler)).await
}

async fn redirect_handler(request: Request) -> Result<Response<Body>, Error> {
    // No cross-invocation state; the configuration is re-read every time.
    let config = RelayConfig::from_env();

    let origin = request
        .headers()
        .get("origin")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    tracing::info!(
        "{} {} - Origin: {}",
        request.method(),
        request.uri().path(),
        origin.as_deref().unwrap_or("N/A")
    );

    let relayed = redirect_response(
        &config,
        &RelayRequest {
            method: request.method().clone(),
            origin,
        },
    );

    match relayed {
        Ok(response) => platform_response(response),
        Err(e) => {
            tracing::error!("internal error: {:#}", e);
            generic_failure()
        }
    }
}

fn platform_response(relayed: RelayResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(relayed.status);

    for (name, value) in &relayed.headers {
        builder = builder.header(name, value);
    }

    let body = if relayed.body.is_empty() {
        Body::Empty
    } else {
        Body::Text(relayed.body)
    };

    Ok(builder.body(body).map_err(Box::new)?)
}

fn generic_failure() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(500)
        .header("Content-Type", "application/json")
        .body(Body::Text(
            r#"{"error":"Internal server error","message":"An unexpected error occurred"}"#
                .to_owned(),
        ))
        .map_err(Box::new)?)
}
