//! Revocation gate: reject requests carrying a revoked bearer token.
//!
//! Tokens are revoked out-of-band (logout invalidates a token before its
//! natural expiry); this middleware only asks the revocation list whether
//! the presented token is on it.
//!
//! Decision per request:
//! - no `Authorization` header, or a non-bearer scheme: forward untouched,
//!   the revocation list is never consulted.
//! - bearer token present and revoked: 401 with the standard JSON envelope,
//!   the rest of the pipeline never runs.
//! - bearer token present and not revoked: forward, response unmodified.
//! - lookup failure: fail closed (503). An outage of the revocation store
//!   must not grant access.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Length of the `Bearer ` scheme prefix (scheme token + one space).
const BEARER_PREFIX_LEN: usize = 7;

/// Apply the revocation gate to the given Router.
///
/// axum 0.8's `from_fn` cannot take a State extractor, so state is passed
/// explicitly via `from_fn_with_state`.
pub fn apply(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, revocation_gate))
}

async fn revocation_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Fast path: only requests presenting a bearer credential pay for the
    // lookup round-trip.
    let Some(token) = bearer_token(&req) else {
        return Ok(next.run(req).await);
    };
    let token = token.to_owned();

    match state.revocation.is_revoked(&token).await {
        Ok(true) => {
            tracing::info!("rejected request carrying a revoked token");
            Err(AppError::TokenRevoked)
        }
        Ok(false) => Ok(next.run(req).await),
        Err(err) => {
            tracing::error!(error = ?err, "revocation lookup failed");
            Err(err.into())
        }
    }
}

/// Extract the bearer credential from the `Authorization` header.
///
/// The scheme token is compared case-insensitively; the remainder is
/// trimmed. An empty remainder is still a credential and gets checked like
/// any other (no special case beyond the scheme match).
fn bearer_token(req: &Request<Body>) -> Option<&str> {
    let auth = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, rest) = auth.split_at_checked(BEARER_PREFIX_LEN)?;
    scheme.eq_ignore_ascii_case("Bearer ").then(|| rest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn no_header_yields_no_token() {
        assert_eq!(bearer_token(&request(None)), None);
    }

    #[test]
    fn non_bearer_scheme_yields_no_token() {
        assert_eq!(bearer_token(&request(Some("Basic dXNlcjpwdw=="))), None);
    }

    #[test]
    fn bearer_scheme_extracts_token() {
        assert_eq!(
            bearer_token(&request(Some("Bearer abc123"))),
            Some("abc123")
        );
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        assert_eq!(bearer_token(&request(Some("bearer xyz"))), Some("xyz"));
        assert_eq!(bearer_token(&request(Some("BEARER xyz"))), Some("xyz"));
    }

    #[test]
    fn token_is_trimmed() {
        assert_eq!(
            bearer_token(&request(Some("Bearer   spaced-token  "))),
            Some("spaced-token")
        );
    }

    #[test]
    fn scheme_without_trailing_space_is_not_bearer() {
        // "Bearer" alone never matches the 7-byte prefix, so no credential
        // is constructed and the request passes through unchecked.
        assert_eq!(bearer_token(&request(Some("Bearer"))), None);
    }

    #[test]
    fn empty_credential_is_still_a_credential() {
        assert_eq!(bearer_token(&request(Some("Bearer "))), Some(""));
        assert_eq!(bearer_token(&request(Some("Bearer    "))), Some(""));
    }
}
