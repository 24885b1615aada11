//! Bearer-token (JWT, HMAC family) verification and issuance.
//!
//! Tokens are stateless: validity depends only on the signing key and the
//! token itself. Issued tokens carry no claims and never expire; rotating
//! the key revokes them all.

use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use probekit_core::error::{ProbeError, Result};

use super::{find_scheme, AuthDecision, Verifier};

/// Accepted signing algorithms. Anything else (RSA, EC, `none`) is rejected.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

type Claims = Map<String, Value>;

fn validation() -> Validation {
    let mut v = Validation::new(Algorithm::HS256);
    v.algorithms = HMAC_ALGORITHMS.to_vec();
    // exp/nbf are checked only when present
    v.required_spec_claims.clear();
    v.validate_nbf = true;
    v.validate_aud = false;
    v.leeway = 0;
    v
}

/// Extract the token from `Bearer <token>`: exactly one space-separated
/// scheme/token pair.
pub fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    let (scheme, token) = (parts.next()?, parts.next()?);
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}

pub struct BearerVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl BearerVerifier {
    pub fn new(signing_key: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(signing_key.as_bytes()),
            validation: validation(),
        }
    }

    pub fn verify(&self, token: &str) -> Result<()> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|_| ())
            .map_err(|e| ProbeError::Token(e.to_string()))
    }
}

impl Verifier for BearerVerifier {
    fn scheme(&self) -> &'static str {
        "bearer"
    }

    fn check(&self, headers: &HeaderMap) -> AuthDecision {
        let Some(value) = find_scheme(headers, "bearer") else {
            return AuthDecision::Deny { reason: "missing bearer token" };
        };
        let Some(token) = bearer_token(value) else {
            return AuthDecision::Deny { reason: "malformed bearer header" };
        };
        match self.verify(token) {
            Ok(()) => AuthDecision::Allow,
            Err(e) => {
                tracing::debug!(error = %e, "bearer token rejected");
                AuthDecision::Deny { reason: "invalid bearer token" }
            }
        }
    }
}

/// Sign a new claim-less HS256 token with `signing_key`.
pub fn issue_token(signing_key: &str) -> Result<String> {
    encode(
        &Header::new(Algorithm::HS256),
        &Claims::new(),
        &EncodingKey::from_secret(signing_key.as_bytes()),
    )
    .map_err(|e| ProbeError::Token(format!("token creation failed: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderValue};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn forged(alg: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(format!(r#"{{"alg":"{alg}","typ":"JWT"}}"#));
        let claims = URL_SAFE_NO_PAD.encode("{}");
        format!("{header}.{claims}.c2lnbmF0dXJl")
    }

    #[test]
    fn issued_token_validates_with_same_key_only() {
        let token = issue_token("S").unwrap();
        assert!(BearerVerifier::new("S").verify(&token).is_ok());
        assert!(BearerVerifier::new("S2").verify(&token).is_err());
    }

    #[test]
    fn other_hmac_sizes_accepted() {
        let token = encode(
            &Header::new(Algorithm::HS512),
            &Claims::new(),
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap();
        assert!(BearerVerifier::new("k").verify(&token).is_ok());
    }

    #[test]
    fn unexpected_algorithms_rejected() {
        let v = BearerVerifier::new("k");
        assert!(v.verify(&forged("none")).is_err());
        assert!(v.verify(&forged("RS256")).is_err());
    }

    #[test]
    fn expired_claims_rejected() {
        let mut claims = Claims::new();
        claims.insert("exp".into(), Value::from(1_000));
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"k")).unwrap();
        assert!(BearerVerifier::new("k").verify(&token).is_err());
    }

    #[test]
    fn header_shape() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bEaReR abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer  abc"), None);
        assert_eq!(bearer_token("Bearer abc def"), None);
        assert_eq!(bearer_token("Token abc"), None);
    }

    #[test]
    fn check_reads_authorization_header() {
        let v = BearerVerifier::new("k");
        let token = issue_token("k").unwrap();

        let mut h = HeaderMap::new();
        assert!(matches!(v.check(&h), AuthDecision::Deny { .. }));

        h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("bearer {token}")).unwrap());
        assert_eq!(v.check(&h), AuthDecision::Allow);

        h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token} extra")).unwrap());
        assert_eq!(v.check(&h), AuthDecision::Deny { reason: "malformed bearer header" });
    }
}
