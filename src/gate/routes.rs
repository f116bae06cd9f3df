//! Route classification.
//!
//! Pure, path-only: no method or body inspection. Every path maps to
//! exactly one class.

use crate::config::GateConfig;

/// Static-asset extensions served without authentication.
pub const STATIC_ASSET_EXTENSIONS: &[&str] =
    &[".ico", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// The class a request path falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Exempt from authentication: login page, issuance API, framework
    /// internals, static assets.
    Public,
    /// Browser-facing console page; rejection redirects to login.
    ProtectedPage,
    /// API route; rejection answers 401 with a JSON body.
    ProtectedApi,
}

/// Classify a request path.
pub fn classify(path: &str, config: &GateConfig) -> RouteClass {
    if path == config.login_path
        || path.starts_with(&config.auth_api_prefix)
        || path.starts_with(&config.asset_prefix)
        || has_static_extension(path)
    {
        return RouteClass::Public;
    }

    if path.starts_with(&config.api_prefix) {
        RouteClass::ProtectedApi
    } else {
        RouteClass::ProtectedPage
    }
}

fn has_static_extension(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    STATIC_ASSET_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GateConfig {
        GateConfig::with_secret("s3cret")
    }

    #[test]
    fn test_login_page_is_public() {
        assert_eq!(classify("/login", &config()), RouteClass::Public);
    }

    #[test]
    fn test_login_subpath_is_not_public() {
        // Exact match only for the login page itself
        assert_eq!(classify("/login/help", &config()), RouteClass::ProtectedPage);
    }

    #[test]
    fn test_auth_api_is_public() {
        assert_eq!(classify("/api/auth/session", &config()), RouteClass::Public);
    }

    #[test]
    fn test_framework_assets_are_public() {
        assert_eq!(classify("/_next/chunk.js", &config()), RouteClass::Public);
    }

    #[test]
    fn test_favicon_is_public() {
        assert_eq!(classify("/favicon.ico", &config()), RouteClass::Public);
    }

    #[test]
    fn test_image_extensions_are_public() {
        for path in ["/logo.png", "/hero.jpg", "/chart.svg", "/anim.webp"] {
            assert_eq!(classify(path, &config()), RouteClass::Public, "{}", path);
        }
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(classify("/LOGO.PNG", &config()), RouteClass::Public);
    }

    #[test]
    fn test_api_routes_are_protected_api() {
        assert_eq!(
            classify("/api/blocklist", &config()),
            RouteClass::ProtectedApi
        );
        assert_eq!(classify("/api/threats", &config()), RouteClass::ProtectedApi);
    }

    #[test]
    fn test_pages_are_protected() {
        assert_eq!(classify("/dashboard", &config()), RouteClass::ProtectedPage);
        assert_eq!(classify("/", &config()), RouteClass::ProtectedPage);
        assert_eq!(
            classify("/certificates", &config()),
            RouteClass::ProtectedPage
        );
    }

    #[test]
    fn test_api_bare_prefix_is_page() {
        // "/api" without the trailing slash does not match the API prefix
        assert_eq!(classify("/api", &config()), RouteClass::ProtectedPage);
    }
}
