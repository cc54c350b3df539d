use http::{HeaderMap, HeaderValue};

pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Decides whether a request origin may receive a non-error response.
///
/// A request without an `Origin` value is admitted unconditionally so that
/// non-browser clients (curl, Postman, health probes) keep working. This
/// means a client that simply omits the header bypasses the allow-list;
/// the policy is inherited and must not be tightened silently.
///
/// A present origin must match an allow-list entry exactly. No wildcards,
/// no scheme or host normalization, no case folding.
pub fn origin_allowed(origin: Option<&str>, allowed_origins: &[String]) -> bool {
    match origin {
        Some(origin) => allowed_origins.iter().any(|allowed| allowed == origin),
        None => true,
    }
}

/// Assembles the CORS response headers: the three fixed preflight headers,
/// plus an `Access-Control-Allow-Origin` echo of the request origin only
/// when it is present and admitted. Never a wildcard, since credentials
/// are enabled.
pub fn cors_headers(origin: Option<&str>, allowed_origins: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(4);

    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        "Access-Control-Allow-Credentials",
        HeaderValue::from_static("true"),
    );

    if let Some(origin) = origin.filter(|origin| origin_allowed(Some(origin), allowed_origins)) {
        if let Ok(value) = HeaderValue::from_str(origin) {
            headers.insert("Access-Control-Allow-Origin", value);
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list() -> Vec<String> {
        vec![
            "http://localhost:3000".to_owned(),
            "http://127.0.0.1:8080".to_owned(),
        ]
    }

    #[test]
    fn absent_origin_is_always_admitted() {
        assert!(origin_allowed(None, &allow_list()));
        assert!(origin_allowed(None, &[]));
    }

    #[test]
    fn exact_match_is_admitted() {
        assert!(origin_allowed(Some("http://localhost:3000"), &allow_list()));
    }

    #[test]
    fn case_variant_is_rejected() {
        assert!(!origin_allowed(Some("http://LOCALHOST:3000"), &allow_list()));
    }

    #[test]
    fn substring_and_superstring_are_rejected() {
        assert!(!origin_allowed(Some("http://localhost:300"), &allow_list()));
        assert!(!origin_allowed(
            Some("http://localhost:3000/extra"),
            &allow_list()
        ));
    }

    #[test]
    fn unlisted_origin_is_rejected() {
        assert!(!origin_allowed(Some("http://evil.example"), &allow_list()));
    }

    #[test]
    fn fixed_headers_are_always_present() {
        let headers = cors_headers(None, &allow_list());

        assert_eq!(
            headers.get("Access-Control-Allow-Methods").unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type, Authorization"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Credentials").unwrap(),
            "true"
        );
        assert!(headers.get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn admitted_origin_is_echoed_verbatim() {
        let headers = cors_headers(Some("http://localhost:3000"), &allow_list());

        assert_eq!(
            headers.get("Access-Control-Allow-Origin").unwrap(),
            "http://localhost:3000"
        );
    }

    #[test]
    fn rejected_origin_gets_no_allow_origin_header() {
        let headers = cors_headers(Some("http://evil.example"), &allow_list());

        assert!(headers.get("Access-Control-Allow-Origin").is_none());
        assert_eq!(headers.len(), 3);
    }
}
