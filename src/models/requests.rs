use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Path parameters for `/profile/{username}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfilePath {
    #[validate(length(min = 1, max = 39), custom(function = "validate_github_username"))]
    pub username: String,
}

/// Path parameters for the two-user endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPairPath {
    #[validate(length(min = 1, max = 39), custom(function = "validate_github_username"))]
    pub username1: String,
    #[validate(length(min = 1, max = 39), custom(function = "validate_github_username"))]
    pub username2: String,
}

/// Query parameters for `/recent-users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentUsersQuery {
    pub limit: Option<usize>,
}

/// GitHub logins are ASCII alphanumerics and hyphens, never starting or ending with a hyphen
///
/// Consecutive hyphens are accepted since older accounts still carry them.
pub fn validate_github_username(username: &str) -> Result<(), ValidationError> {
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if !valid_chars || username.starts_with('-') || username.ends_with('-') {
        return Err(ValidationError::new("github_username"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_github_username("octocat").is_ok());
        assert!(validate_github_username("mona-lisa").is_ok());
        assert!(validate_github_username("a1").is_ok());
        assert!(validate_github_username("legacy--name").is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_github_username("-octocat").is_err());
        assert!(validate_github_username("octocat-").is_err());
        assert!(validate_github_username("octo cat").is_err());
        assert!(validate_github_username("octo/cat").is_err());
    }

    #[test]
    fn test_path_length_validation() {
        let empty = ProfilePath { username: String::new() };
        assert!(empty.validate().is_err());

        let too_long = ProfilePath { username: "a".repeat(40) };
        assert!(too_long.validate().is_err());

        let pair = UserPairPath {
            username1: "octocat".to_string(),
            username2: "torvalds".to_string(),
        };
        assert!(pair.validate().is_ok());
    }
}
