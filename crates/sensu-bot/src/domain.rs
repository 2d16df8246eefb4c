//! Client name qualification.

/// Append the configured domain to a client name.
///
/// Names that already contain the domain are returned unchanged, as are
/// all names when no (or an empty) domain is configured.
pub fn add_domain(client: &str, domain: Option<&str>) -> String {
    match domain {
        Some(domain) if !domain.is_empty() && !client.contains(domain) => {
            if domain.starts_with('.') {
                format!("{}{}", client, domain)
            } else {
                format!("{}.{}", client, domain)
            }
        }
        _ => client.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_domain() {
        assert_eq!(add_domain("web01", None), "web01");
        assert_eq!(add_domain("web01", Some("")), "web01");
    }

    #[test]
    fn test_appends_with_dot() {
        assert_eq!(add_domain("web01", Some("example.com")), "web01.example.com");
    }

    #[test]
    fn test_leading_dot_domain() {
        assert_eq!(add_domain("web01", Some(".example.com")), "web01.example.com");
    }

    #[test]
    fn test_already_qualified() {
        assert_eq!(
            add_domain("web01.example.com", Some("example.com")),
            "web01.example.com"
        );
        assert_eq!(
            add_domain("web01.example.com", Some(".example.com")),
            "web01.example.com"
        );
    }

    #[test]
    fn test_substring_match_anywhere() {
        // Containment, not suffix: the domain may appear mid-name.
        assert_eq!(
            add_domain("example.com-proxy", Some("example.com")),
            "example.com-proxy"
        );
    }
}
