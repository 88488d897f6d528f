//! Decoding of the mesh header set by the edge gateway.

use axum::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::Host;

/// Name of the header carrying the JSON client context.
pub const SOAJS_HEADER: &str = "soajsinjectobj";

/// Error returned when the mesh header is present but cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("unable to parse SOAJS header")]
    Unparsable,
}

/// Client context injected by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderInfo {
    pub tenant: Tenant,
    pub key: String,
    pub application: Application,
    pub device: String,
    pub geo: Geo,
    pub urac: Option<Urac>,
    /// Gateway the request came through.
    pub awareness: Option<Host>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tenant {
    pub id: String,
    pub code: String,
    pub locale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Application {
    pub product: String,
    pub package: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Geo {
    pub ip: String,
}

/// Authenticated user record, present only for logged-in requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Urac {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub groups: Vec<String>,
}

/// Read and decode the mesh header of `req`.
///
/// An absent or empty header yields `Ok(None)`.
pub fn header_data<B>(req: &Request<B>) -> Result<Option<HeaderInfo>, HeaderError> {
    let Some(value) = req.headers().get(SOAJS_HEADER) else {
        return Ok(None);
    };
    if value.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(value.as_bytes())
        .map(Some)
        .map_err(|_| HeaderError::Unparsable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;

    fn request(header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("http://localhost:8080/");
        if let Some(value) = header {
            builder = builder.header(SOAJS_HEADER, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(header_data(&request(Some(""))), Ok(None));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(header_data(&request(None)), Ok(None));
    }

    #[test]
    fn test_bad_header() {
        let err = header_data(&request(Some("nil"))).unwrap_err();
        assert_eq!(err.to_string(), "unable to parse SOAJS header");
    }

    #[test]
    fn test_json_null_is_rejected() {
        assert_eq!(header_data(&request(Some("null"))), Err(HeaderError::Unparsable));
    }

    #[test]
    fn test_device_only() {
        let info = header_data(&request(Some(r#"{"device":"iPhone"}"#))).unwrap();
        assert_eq!(
            info,
            Some(HeaderInfo {
                device: "iPhone".into(),
                ..HeaderInfo::default()
            })
        );
    }

    #[test]
    fn test_full_header() {
        let raw = r#"{
            "tenant": {"id": "t1", "code": "TNT", "locale": "en"},
            "key": "ext-key",
            "application": {"product": "DSBRD", "package": "DSBRD_MAIN"},
            "device": "Android",
            "geo": {"ip": "10.1.1.1"},
            "urac": {"_id": "u1", "username": "jane", "email": "jane@example.com", "groups": ["admin"]},
            "awareness": {"host": "gateway", "port": 4000}
        }"#
        .replace('\n', " ");
        let info = header_data(&request(Some(raw.as_str()))).unwrap().unwrap();
        assert_eq!(info.tenant.code, "TNT");
        assert_eq!(info.urac.as_ref().unwrap().username, "jane");
        assert_eq!(info.awareness, Some(Host::new("gateway", 4000)));
    }

    #[test]
    fn test_non_ascii_header() {
        let raw = r#"{"device":"iPhone","tenant":{"locale":"pt-BR"},"urac":{"username":"José"}}"#;
        let req = Request::builder()
            .header(SOAJS_HEADER, HeaderValue::from_bytes(raw.as_bytes()).unwrap())
            .body(Body::empty())
            .unwrap();
        let info = header_data(&req).unwrap().unwrap();
        assert_eq!(info.device, "iPhone");
        assert_eq!(info.urac.unwrap().username, "José");
    }

    #[test]
    fn test_invalid_utf8_header() {
        let req = Request::builder()
            .header(SOAJS_HEADER, HeaderValue::from_bytes(b"{\"device\":\"\xff\"}").unwrap())
            .body(Body::empty())
            .unwrap();
        assert_eq!(header_data(&req), Err(HeaderError::Unparsable));
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        let req = Request::builder()
            .header("SoajsInjectObj", r#"{"device":"iPad"}"#)
            .body(Body::empty())
            .unwrap();
        assert_eq!(header_data(&req).unwrap().unwrap().device, "iPad");
    }
}
