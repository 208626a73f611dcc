mod token;
mod traits;
mod types;

pub use token::*;
pub use traits::*;
pub use types::*;

use crate::config::{AuthConfig, AuthMethod};
use crate::users::UserStore;

/// Factory function to create authenticator from config.
///
/// Every user named in the token table is created in `users` if it does not
/// exist yet.
pub fn create_authenticator(
    config: &AuthConfig,
    users: &dyn UserStore,
) -> Result<Box<dyn Authenticator>, AuthError> {
    match config.method {
        AuthMethod::Token => {
            if config.tokens.is_empty() {
                return Err(AuthError::ConfigurationError(
                    "at least one token must be configured for the token auth method"
                        .to_string(),
                ));
            }

            let mut grants = Vec::with_capacity(config.tokens.len());
            for grant in &config.tokens {
                let user = users.ensure_user(&grant.username)?;
                grants.push((
                    grant.token.clone(),
                    Identity {
                        user_id: user.id,
                        username: user.username,
                    },
                ));
            }

            Ok(Box::new(TokenAuthenticator::new(grants)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenGrant;
    use crate::store::SqliteStore;
    use std::collections::HashMap;
    use std::net::IpAddr;

    fn config(tokens: Vec<(&str, &str)>) -> AuthConfig {
        AuthConfig {
            method: AuthMethod::Token,
            tokens: tokens
                .into_iter()
                .map(|(token, username)| TokenGrant {
                    token: token.to_string(),
                    username: username.to_string(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_create_authenticator_provisions_users() {
        let store = SqliteStore::in_memory().unwrap();
        let auth =
            create_authenticator(&config(vec![("a", "alice"), ("b", "bob")]), &store).unwrap();
        assert_eq!(auth.method_name(), "token");

        let request = AuthRequest {
            headers: HashMap::from([("authorization".to_string(), "Bearer b".to_string())]),
            source_ip: "127.0.0.1".parse::<IpAddr>().unwrap(),
        };
        let identity = auth.authenticate(&request).await.unwrap();

        let bob = store.ensure_user("bob").unwrap();
        assert_eq!(identity.user_id, bob.id);
        assert_eq!(identity.username, "bob");
    }

    #[tokio::test]
    async fn test_tokens_sharing_a_user() {
        let store = SqliteStore::in_memory().unwrap();
        let auth =
            create_authenticator(&config(vec![("a", "alice"), ("b", "alice")]), &store).unwrap();

        let mut ids = Vec::new();
        for token in ["a", "b"] {
            let request = AuthRequest {
                headers: HashMap::from([("x-access-token".to_string(), token.to_string())]),
                source_ip: "127.0.0.1".parse::<IpAddr>().unwrap(),
            };
            ids.push(auth.authenticate(&request).await.unwrap().user_id);
        }

        let alice = store.ensure_user("alice").unwrap();
        assert_eq!(ids, vec![alice.id, alice.id]);
    }

    #[test]
    fn test_create_authenticator_without_tokens() {
        let store = SqliteStore::in_memory().unwrap();
        let result = create_authenticator(&config(vec![]), &store);
        assert!(matches!(result, Err(AuthError::ConfigurationError(_))));
    }
}
