//! Client IP extractor
//!
//! Resolves the requesting client's IP address for claim records,
//! honoring reverse-proxy headers before the socket address.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// The client's IP address, if one could be determined
///
/// Checks `X-Forwarded-For` (first entry), then `X-Real-IP`, then the
/// connection's peer address. Absent all three, claims are recorded
/// without an address.
#[derive(Debug, Clone)]
pub struct ClientIp(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get(FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(ip) = forwarded {
            return Ok(Self(Some(ip)));
        }

        let real_ip = parts
            .headers
            .get(REAL_IP)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(ip) = real_ip {
            return Ok(Self(Some(ip)));
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self(peer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(req: Request<()>) -> ClientIp {
        let (mut parts, ()) = req.into_parts();
        ClientIp::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_forwarded_for_takes_first_entry() {
        let req = Request::builder()
            .header(FORWARDED_FOR, "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();
        let ip = extract(req).await;
        assert_eq!(ip.0.as_deref(), Some("203.0.113.7"));
    }

    #[tokio::test]
    async fn test_real_ip_fallback() {
        let req = Request::builder()
            .header(REAL_IP, "198.51.100.4")
            .body(())
            .unwrap();
        let ip = extract(req).await;
        assert_eq!(ip.0.as_deref(), Some("198.51.100.4"));
    }

    #[tokio::test]
    async fn test_no_source_yields_none() {
        let req = Request::builder().body(()).unwrap();
        let ip = extract(req).await;
        assert!(ip.0.is_none());
    }
}
