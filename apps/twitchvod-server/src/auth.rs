use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::{error::ApiError, state::AppState};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Default, Deserialize)]
pub struct SecretParam {
    #[serde(default)]
    secret: String,
}

/// Lets a request through only when its `secret` query parameter matches the configured one.
pub async fn require_secret(
    State(state): State<Arc<AppState>>,
    Query(param): Query<SecretParam>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !secret_matches(&state.secret, &param.secret) {
        return Err(ApiError::InvalidSecret);
    }

    Ok(next.run(request).await)
}

/// Both sides are run through the same keyed MAC so the comparison is constant-time and doesn't
/// depend on either length.
fn secret_matches(expected: &str, provided: &str) -> bool {
    let tag = |value: &str| {
        // HMAC accepts keys of any length.
        let mut mac = HmacSha256::new_from_slice(expected.as_bytes()).ok()?;
        mac.update(value.as_bytes());
        Some(mac)
    };

    let (Some(expected_mac), Some(provided_mac)) = (tag(expected), tag(provided)) else {
        return false;
    };

    provided_mac
        .verify_slice(&expected_mac.finalize().into_bytes())
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_secret_passes() {
        assert!(secret_matches("s3cret", "s3cret"));
    }

    #[test]
    fn different_secrets_fail() {
        assert!(!secret_matches("s3cret", "s3cres"));
        assert!(!secret_matches("s3cret", "s3cret-longer"));
        assert!(!secret_matches("s3cret", ""));
    }
}
