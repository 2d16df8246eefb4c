//! Basic-Auth credentials for the Sensu API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Username and password sent as a `Basic` authorization header.
///
/// Both parts lose one trailing line terminator before encoding, since
/// credentials are often mounted from files that end in a newline.
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: SecretString,
}

impl BasicAuth {
    /// Build credentials. A missing password is sent as empty.
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        let username = username.into();
        let password = password.unwrap_or_default();

        Self {
            username: chomp(&username).to_string(),
            password: SecretString::new(chomp(&password).to_string()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Strip a single trailing `\r\n`, `\n` or `\r`.
fn chomp(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .or_else(|| value.strip_suffix('\r'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let auth = BasicAuth::new("admin", Some("secret".into()));
        // base64("admin:secret")
        assert_eq!(auth.header_value(), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn test_trailing_newlines_are_trimmed() {
        let auth = BasicAuth::new("admin\n", Some("secret\r\n".into()));
        assert_eq!(auth.username(), "admin");
        assert_eq!(auth.header_value(), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn test_only_one_newline_is_trimmed() {
        assert_eq!(chomp("secret\n\n"), "secret\n");
        assert_eq!(chomp("secret\r"), "secret");
        assert_eq!(chomp("secret"), "secret");
    }

    #[test]
    fn test_missing_password_is_empty() {
        let auth = BasicAuth::new("admin", None);
        // base64("admin:")
        assert_eq!(auth.header_value(), "Basic YWRtaW46");
    }

    #[test]
    fn test_debug_redacts_password() {
        let auth = BasicAuth::new("admin", Some("hunter2".into()));
        let debug = format!("{:?}", auth);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
