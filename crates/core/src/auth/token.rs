//! Access token authentication.

use async_trait::async_trait;

use super::{AuthError, AuthRequest, Authenticator, Identity};

/// Authenticator that maps configured access tokens to users.
///
/// Accepts the token in either:
/// - `Authorization: Bearer <token>` header
/// - `X-Access-Token: <token>` header
pub struct TokenAuthenticator {
    grants: Vec<(String, Identity)>,
}

impl TokenAuthenticator {
    pub fn new(grants: Vec<(String, Identity)>) -> Self {
        Self { grants }
    }

    fn extract_token<'a>(&self, request: &'a AuthRequest) -> Option<&'a str> {
        if let Some(header) = request.headers.get("authorization") {
            let token = header
                .strip_prefix("Bearer ")
                .or_else(|| header.strip_prefix("bearer "));
            if let Some(token) = token {
                return Some(token.trim());
            }
        }

        request
            .headers
            .get("x-access-token")
            .map(|token| token.trim())
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Identity, AuthError> {
        let provided = self
            .extract_token(request)
            .ok_or(AuthError::NotAuthenticated)?;

        // Compare against every grant so timing does not reveal which one
        // matched.
        let mut matched = None;
        for (token, identity) in &self.grants {
            if constant_time_eq(provided.as_bytes(), token.as_bytes()) && matched.is_none() {
                matched = Some(identity);
            }
        }

        matched
            .cloned()
            .ok_or_else(|| AuthError::InvalidCredentials("Unknown access token".to_string()))
    }

    fn method_name(&self) -> &'static str {
        "token"
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
