use std::collections::HashSet;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Auth section exists (enforced by serde)
/// - At least one token, none empty or duplicated, each naming a user
/// - Server port is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.auth.tokens.is_empty() {
        return Err(ConfigError::ValidationError(
            "auth.tokens must contain at least one token".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (index, grant) in config.auth.tokens.iter().enumerate() {
        if grant.token.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "auth.tokens[{}].token cannot be empty",
                index
            )));
        }
        if grant.username.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "auth.tokens[{}].username cannot be empty",
                index
            )));
        }
        if !seen.insert(grant.token.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "auth.tokens[{}] duplicates an earlier token",
                index
            )));
        }
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AuthConfig, AuthMethod, DatabaseConfig, SearchConfig, ServerConfig, TokenGrant,
    };

    fn grant(token: &str, username: &str) -> TokenGrant {
        TokenGrant {
            token: token.to_string(),
            username: username.to_string(),
        }
    }

    fn config_with(tokens: Vec<TokenGrant>) -> Config {
        Config {
            auth: AuthConfig {
                method: AuthMethod::Token,
                tokens,
            },
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            search: SearchConfig::default(),
        }
    }

    fn assert_invalid(config: &Config) {
        let err = validate_config(config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_valid_config() {
        let config = config_with(vec![grant("a", "alice"), grant("b", "alice")]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_no_tokens_fails() {
        assert_invalid(&config_with(vec![]));
    }

    #[test]
    fn test_validate_empty_token_fails() {
        assert_invalid(&config_with(vec![grant("  ", "alice")]));
    }

    #[test]
    fn test_validate_empty_username_fails() {
        assert_invalid(&config_with(vec![grant("a", "")]));
    }

    #[test]
    fn test_validate_duplicate_token_fails() {
        assert_invalid(&config_with(vec![grant("a", "alice"), grant("a", "bob")]));
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let mut config = config_with(vec![grant("a", "alice")]);
        config.server.port = 0;
        assert_invalid(&config);
    }
}
