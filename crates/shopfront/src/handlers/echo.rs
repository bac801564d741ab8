//! Catch-all handler for requests that match no route.
//!
//! Responds 404 with the inbound request serialized as JSON, using the field
//! names of an API Gateway proxy event so the echo reads the same locally and
//! behind Lambda.

use std::collections::{BTreeMap, HashMap};

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        MatchedPath, Path, Query,
    },
    http::{HeaderMap, Method, StatusCode, Uri},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::handlers::{AppError, RequestError};

/// The parts of an inbound request reflected back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedRequest {
    /// Route template the path matched, when only the method was unsupported.
    pub resource: Option<String>,
    pub http_method: String,
    pub path: String,
    /// Last value of each header.
    pub headers: BTreeMap<String, String>,
    pub multi_value_headers: BTreeMap<String, Vec<String>>,
    /// Last value of each query parameter.
    pub query_string_parameters: BTreeMap<String, String>,
    pub multi_value_query_string_parameters: BTreeMap<String, Vec<String>>,
    pub path_parameters: BTreeMap<String, String>,
    pub body: Option<String>,
    /// Set when `body` holds base64 because the raw body was not UTF-8.
    pub is_base64_encoded: bool,
}

impl EchoedRequest {
    /// Capture the parts of a request.
    pub fn new(
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        resource: Option<&str>,
        path_parameters: HashMap<String, String>,
        body: &[u8],
    ) -> Self {
        let mut single_headers = BTreeMap::new();
        let mut multi_value_headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in headers {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            single_headers.insert(name.as_str().to_string(), value.clone());
            multi_value_headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(value);
        }

        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        let mut query_string_parameters = BTreeMap::new();
        let mut multi_value_query_string_parameters: BTreeMap<String, Vec<String>> =
            BTreeMap::new();
        for (key, value) in pairs {
            query_string_parameters.insert(key.clone(), value.clone());
            multi_value_query_string_parameters
                .entry(key)
                .or_default()
                .push(value);
        }

        let (body, is_base64_encoded) = match std::str::from_utf8(body) {
            Ok("") => (None, false),
            Ok(text) => (Some(text.to_string()), false),
            Err(_) => (Some(STANDARD.encode(body)), true),
        };

        Self {
            resource: resource.map(str::to_string),
            http_method: method.to_string(),
            path: uri.path().to_string(),
            headers: single_headers,
            multi_value_headers,
            query_string_parameters,
            multi_value_query_string_parameters,
            path_parameters: path_parameters.into_iter().collect(),
            body,
            is_base64_encoded,
        }
    }
}

/// Echo an unmatched request back with status 404.
///
/// Bodies over the router's body limit are refused with 413 rather than echoed
/// partially.
pub async fn echo_request(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    matched_path: Option<MatchedPath>,
    path_parameters: Result<Path<HashMap<String, String>>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<EchoedRequest>), AppError> {
    let body = body.map_err(RequestError::from)?;
    let path_parameters = path_parameters
        .map(|Path(params)| params)
        .unwrap_or_default();

    let echoed = EchoedRequest::new(
        &method,
        &uri,
        &headers,
        matched_path.as_ref().map(MatchedPath::as_str),
        path_parameters,
        &body,
    );

    tracing::debug!(
        method = %echoed.http_method,
        path = %echoed.path,
        body_bytes = body.len(),
        "No route matched"
    );

    Ok((StatusCode::NOT_FOUND, Json(echoed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_headers_and_query_keys() {
        let mut headers = HeaderMap::new();
        headers.append("accept", "text/html".parse().unwrap());
        headers.append("accept", "application/json".parse().unwrap());
        let uri: Uri = "/orders?tag=a&tag=b&limit=5".parse().unwrap();

        let echoed = EchoedRequest::new(&Method::GET, &uri, &headers, None, HashMap::new(), b"");

        assert_eq!(echoed.headers["accept"], "application/json");
        assert_eq!(
            echoed.multi_value_headers["accept"],
            vec!["text/html", "application/json"]
        );
        assert_eq!(echoed.query_string_parameters["tag"], "b");
        assert_eq!(echoed.multi_value_query_string_parameters["tag"], vec!["a", "b"]);
        assert_eq!(echoed.query_string_parameters["limit"], "5");
        assert_eq!(echoed.body, None);
        assert!(!echoed.is_base64_encoded);
    }

    #[test]
    fn test_binary_body_is_base64_encoded() {
        let uri: Uri = "/upload".parse().unwrap();
        let body = [0xff, 0x00, 0xfe];

        let echoed = EchoedRequest::new(
            &Method::POST,
            &uri,
            &HeaderMap::new(),
            None,
            HashMap::new(),
            &body,
        );

        assert_eq!(echoed.body.as_deref(), Some("/wD+"));
        assert!(echoed.is_base64_encoded);
    }

    #[test]
    fn test_text_body_is_kept_verbatim() {
        let uri: Uri = "/upload".parse().unwrap();

        let echoed = EchoedRequest::new(
            &Method::POST,
            &uri,
            &HeaderMap::new(),
            Some("/products/{id}"),
            HashMap::from([("id".to_string(), "p-1".to_string())]),
            "héllo".as_bytes(),
        );

        assert_eq!(echoed.body.as_deref(), Some("héllo"));
        assert!(!echoed.is_base64_encoded);
        assert_eq!(echoed.resource.as_deref(), Some("/products/{id}"));
        assert_eq!(echoed.path_parameters["id"], "p-1");
    }
}
