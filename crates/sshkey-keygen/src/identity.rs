// ABOUTME: Current user and host lookup used for default key comments.
// ABOUTME: IdentityProvider is injectable so tests can pin the user@host value.

/// Source of the current user name and host name.
pub trait IdentityProvider {
    /// Name of the user running the process, if known.
    fn username(&self) -> Option<String>;

    /// Host name of the machine, if known.
    fn hostname(&self) -> Option<String>;

    /// Default key comment: `"<user>@<host>\n"`, or empty when either lookup fails.
    fn default_comment(&self) -> String {
        match (self.username(), self.hostname()) {
            (Some(user), Some(host)) => format!("{user}@{host}\n"),
            _ => String::new(),
        }
    }
}

/// Identity read from the process environment and the OS host name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl IdentityProvider for SystemIdentity {
    fn username(&self) -> Option<String> {
        ["USER", "USERNAME", "LOGNAME"]
            .iter()
            .filter_map(std::env::var_os)
            .map(|name| name.to_string_lossy().into_owned())
            .find(|name| !name.is_empty())
    }

    fn hostname(&self) -> Option<String> {
        hostname::get()
            .ok()
            .map(|h| h.to_string_lossy().into_owned())
            .filter(|h| !h.is_empty())
    }
}

/// Fixed identity, handy for reproducible comments.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    pub username: Option<String>,
    pub hostname: Option<String>,
}

impl StaticIdentity {
    pub fn new(username: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            hostname: Some(hostname.into()),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn username(&self) -> Option<String> {
        self.username.clone()
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_comment_format() {
        let identity = StaticIdentity::new("alice", "workstation");
        assert_eq!(identity.default_comment(), "alice@workstation\n");
    }

    #[test]
    fn test_default_comment_empty_without_user() {
        let identity = StaticIdentity {
            username: None,
            hostname: Some("workstation".to_string()),
        };
        assert_eq!(identity.default_comment(), "");
    }

    #[test]
    fn test_default_comment_empty_without_host() {
        let identity = StaticIdentity {
            username: Some("alice".to_string()),
            hostname: None,
        };
        assert_eq!(identity.default_comment(), "");
    }

    #[test]
    fn test_system_identity_comment_shape() {
        let comment = SystemIdentity.default_comment();
        // Either lookup may legitimately fail inside a sandbox
        if !comment.is_empty() {
            assert!(comment.contains('@'));
            assert!(comment.ends_with('\n'));
        }
    }
}
