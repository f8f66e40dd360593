//! Route gating for protected pages.
//!
//! The gate is advisory: a child may still start a request before the redirect
//! lands, and the backend's 401 remains the real boundary.

/// Where unauthenticated visitors are sent.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Routes under this prefix are reachable without a session.
pub const PUBLIC_PREFIX: &str = "/auth";

/// What a protected subtree should do for the current session and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the children unchanged.
    Render,
    /// Show a loading indicator and navigate to [`LOGIN_ROUTE`].
    RedirectToLogin,
}

/// True for `/auth` and anything below it, but not for e.g. `/authors`.
pub fn is_public(path: &str) -> bool {
    match path.strip_prefix(PUBLIC_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

pub fn check_access(is_authenticated: bool, path: &str) -> Access {
    if is_authenticated || is_public(path) {
        Access::Render
    } else {
        Access::RedirectToLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_always_renders() {
        assert_eq!(check_access(true, "/home/documents"), Access::Render);
        assert_eq!(check_access(true, LOGIN_ROUTE), Access::Render);
    }

    #[test]
    fn test_anonymous_redirected_from_protected_routes() {
        assert_eq!(check_access(false, "/"), Access::RedirectToLogin);
        assert_eq!(check_access(false, "/home/dashboard"), Access::RedirectToLogin);
        assert_eq!(check_access(false, "/home/chats/42"), Access::RedirectToLogin);
    }

    #[test]
    fn test_anonymous_may_visit_auth_pages() {
        assert_eq!(check_access(false, "/auth"), Access::Render);
        assert_eq!(check_access(false, LOGIN_ROUTE), Access::Render);
        assert_eq!(check_access(false, "/auth/register"), Access::Render);
        assert_eq!(check_access(false, "/auth?next=/home"), Access::Render);
    }

    #[test]
    fn test_prefix_match_respects_segments() {
        assert!(!is_public("/authors"));
        assert_eq!(check_access(false, "/authors"), Access::RedirectToLogin);
    }
}
