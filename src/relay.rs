use anyhow::Result;
use chrono::Utc;
use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::{config::RelayConfig, cors};

/// The request shape both front-ends reduce to. Only the method and the
/// `Origin` value matter for the redirect decision.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub method: Method,
    pub origin: Option<String>,
}

/// A finished response, ready for either front-end to translate back into
/// its platform's shape. An empty `body` means no body at all.
#[derive(Debug)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RelayResponse {
    fn empty(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            headers,
            body: String::new(),
        }
    }

    fn json(status: StatusCode, mut headers: HeaderMap, body: &impl Serialize) -> Result<Self> {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok(Self {
            status,
            headers,
            body: serde_json::to_string(body)?,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("redirect target is not a valid absolute URL: {0}")]
    InvalidRedirectUrl(#[from] url::ParseError),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CorsRejection<'a> {
    error: &'static str,
    message: &'static str,
    allowed_origins: &'a [String],
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPayload<'a> {
    status: &'static str,
    timestamp: String,
    redirect_url: &'a str,
    allowed_origins: &'a [String],
}

impl<'a> HealthPayload<'a> {
    pub fn new(config: &'a RelayConfig) -> Self {
        Self {
            status: "ok",
            timestamp: Utc::now().to_rfc3339(),
            redirect_url: &config.redirect_url,
            allowed_origins: &config.allowed_origins,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload<'a> {
    redirect_url: &'a str,
    allowed_origins: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
}

impl<'a> ConfigPayload<'a> {
    pub fn new(config: &'a RelayConfig) -> Self {
        Self {
            redirect_url: &config.redirect_url,
            allowed_origins: &config.allowed_origins,
            port: Some(config.port),
        }
    }

    /// The function front-end's config surface historically omits the port,
    /// since the hosting platform owns it there.
    pub fn without_port(config: &'a RelayConfig) -> Self {
        Self {
            port: None,
            ..Self::new(config)
        }
    }
}

/// Runs the redirect decision for one request.
///
/// The decision order is load-bearing: OPTIONS short-circuits into the
/// preflight path, then the origin gate runs, and only then does method
/// dispatch happen. A forbidden origin never receives a redirect, even for
/// a well-formed GET. The `Result` covers body serialization only; every
/// outcome of the taxonomy (403/200/302/500/405) is a value.
pub fn redirect_response(config: &RelayConfig, request: &RelayRequest) -> Result<RelayResponse> {
    let origin = request.origin.as_deref();
    let admitted = cors::origin_allowed(origin, &config.allowed_origins);
    let headers = cors::cors_headers(origin, &config.allowed_origins);

    if request.method == Method::OPTIONS {
        if !admitted {
            return cors_rejection(config, headers);
        }

        return Ok(RelayResponse::empty(StatusCode::OK, headers));
    }

    if !admitted {
        return cors_rejection(config, headers);
    }

    match request.method {
        Method::GET | Method::POST => match Url::parse(&config.redirect_url) {
            Ok(_) => {
                let mut headers = headers;
                headers.insert(
                    header::LOCATION,
                    HeaderValue::from_str(&config.redirect_url)?,
                );

                Ok(RelayResponse::empty(StatusCode::FOUND, headers))
            }
            Err(e) => RelayResponse::json(
                StatusCode::INTERNAL_SERVER_ERROR,
                headers,
                &ErrorBody {
                    error: "Invalid redirect URL configuration",
                    message: ConfigError::InvalidRedirectUrl(e).to_string(),
                },
            ),
        },
        _ => RelayResponse::json(
            StatusCode::METHOD_NOT_ALLOWED,
            headers,
            &ErrorBody {
                error: "Method not allowed",
                message: format!("The {} method is not supported", request.method),
            },
        ),
    }
}

fn cors_rejection(config: &RelayConfig, headers: HeaderMap) -> Result<RelayResponse> {
    RelayResponse::json(
        StatusCode::FORBIDDEN,
        headers,
        &CorsRejection {
            error: "CORS origin rejected",
            message: "This origin is not in the allow list",
            allowed_origins: &config.allowed_origins,
        },
    )
}
