//! Resolves the caller every handler is keyed on.
//!
//! `x-account-id` is taken at face value. The service must only be reachable
//! through the authentication gateway that sets it and strips any copy sent by
//! the client; exposed directly, any caller can claim any account.
//!
//! Guests are keyed by network address. `x-forwarded-for` is read from the
//! right: each trusted proxy appends the peer it saw, so the entry
//! `trusted_proxy_hops` positions from the end is the first address no
//! caller-controlled hop could have written.

use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::{ConnectInfo, FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::http::request::Parts;

use crate::domain::Principal;
use crate::presentation::handlers::ErrorResponse;

/// Set by the upstream authentication gateway for signed-in callers.
pub const ACCOUNT_ID_HEADER: &str = "x-account-id";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Number of reverse proxies in front of the service. Zero ignores
/// `x-forwarded-for` and uses the connection peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedProxyHops(pub usize);

impl Default for TrustedProxyHops {
    fn default() -> Self {
        Self(1)
    }
}

impl TrustedProxyHops {
    /// The address the outermost trusted proxy saw, if the header carries
    /// enough hops.
    pub fn client_address(&self, forwarded_for: &str) -> Option<IpAddr> {
        let hops = self.0.checked_sub(1)?;
        forwarded_for
            .rsplit(',')
            .nth(hops)
            .and_then(|entry| entry.trim().parse::<IpAddr>().ok())
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
    TrustedProxyHops: FromRef<S>,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        if let Some(account_id) = header(ACCOUNT_ID_HEADER) {
            return Ok(Principal::account(account_id));
        }

        let trusted_hops = TrustedProxyHops::from_ref(state);
        if let Some(addr) =
            header(FORWARDED_FOR_HEADER).and_then(|list| trusted_hops.client_address(list))
        {
            return Ok(Principal::guest(addr));
        }

        if let Some(ConnectInfo(peer)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            return Ok(Principal::guest(peer.ip()));
        }

        tracing::warn!("Unable to identify caller");
        Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Unable to identify caller")),
        ))
    }
}
