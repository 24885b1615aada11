use axum::http::HeaderMap;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{find_scheme, AuthDecision, Verifier};

pub const CHALLENGE: &str = r#"Basic realm="Restricted""#;

/// Exact, case-sensitive username/password match.
pub struct BasicVerifier {
    username: String,
    password: String,
}

impl BasicVerifier {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Decode `Basic base64(user:pass)`.
pub fn parse_basic(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let raw = STANDARD.decode(encoded.trim()).ok()?;
    let raw = String::from_utf8(raw).ok()?;
    let (user, pass) = raw.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

impl Verifier for BasicVerifier {
    fn scheme(&self) -> &'static str {
        "basic"
    }

    fn check(&self, headers: &HeaderMap) -> AuthDecision {
        let Some((user, pass)) = find_scheme(headers, "basic").and_then(parse_basic) else {
            return AuthDecision::Deny { reason: "missing basic credentials" };
        };
        if user != self.username || pass != self.password {
            return AuthDecision::Deny { reason: "basic credentials mismatch" };
        }
        AuthDecision::Allow
    }

    fn challenge(&self) -> Option<&'static str> {
        Some(CHALLENGE)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderValue};

    fn headers(value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        h
    }

    fn encoded(user_pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(user_pass))
    }

    #[test]
    fn parse_handles_colons_in_password() {
        assert_eq!(
            parse_basic(&encoded("admin:a:b")),
            Some(("admin".to_string(), "a:b".to_string()))
        );
        assert_eq!(parse_basic("Basic !!!"), None);
        assert_eq!(parse_basic(&encoded("nocolon")), None);
    }

    #[test]
    fn exact_match_only() {
        let v = BasicVerifier::new("admin", "Secret");
        assert_eq!(v.check(&headers(&encoded("admin:Secret"))), AuthDecision::Allow);
        assert_eq!(
            v.check(&headers(&encoded("admin:Secret").replacen("Basic", "basic", 1))),
            AuthDecision::Allow
        );
        assert!(matches!(v.check(&headers(&encoded("admin:secret"))), AuthDecision::Deny { .. }));
        assert!(matches!(v.check(&headers(&encoded("Admin:Secret"))), AuthDecision::Deny { .. }));
        assert!(matches!(v.check(&HeaderMap::new()), AuthDecision::Deny { .. }));
    }
}
