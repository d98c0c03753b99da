//! Route definitions: pure domain model, no DOM or web_sys dependency.

use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Sign-in page (default, and the universal unauthenticated target).
    #[default]
    SignIn,
    Dashboard,
    Facilities,
    Users,
    Roles,
    Profile,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/signin" => Self::SignIn,
            "/dashboard" => Self::Dashboard,
            "/facilities" => Self::Facilities,
            "/users" => Self::Users,
            "/roles" => Self::Roles,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(self) -> &'static str {
        match self {
            Self::SignIn => "/",
            Self::Dashboard => "/dashboard",
            Self::Facilities => "/facilities",
            Self::Users => "/users",
            Self::Roles => "/roles",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Guard predicate: every feature page requires a session.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::SignIn | Self::NotFound)
    }

    /// An authenticated user landing on the sign-in page is forwarded on.
    pub fn should_redirect_when_authenticated(self) -> bool {
        matches!(self, Self::SignIn)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::SignIn
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// Where an authentication flip should send the user, if anywhere.
    /// Returns `None` when the current route is already acceptable, so a
    /// sign-out or expiry produces at most one navigation.
    pub fn auth_change_redirect(is_authenticated: bool, current: Self) -> Option<Self> {
        if is_authenticated {
            current
                .should_redirect_when_authenticated()
                .then(Self::auth_success_redirect)
        } else {
            current.requires_auth().then(Self::auth_failure_redirect)
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::AppRoute;

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Facilities,
            AppRoute::Users,
            AppRoute::Roles,
            AppRoute::Profile,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path("/signin"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn only_feature_pages_are_guarded() {
        assert!(!AppRoute::SignIn.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Facilities.requires_auth());
        assert!(AppRoute::Users.requires_auth());
        assert!(AppRoute::Roles.requires_auth());
        assert!(AppRoute::Profile.requires_auth());
    }

    #[test]
    fn sign_in_is_the_universal_redirect_target() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::SignIn);
        assert!(AppRoute::SignIn.should_redirect_when_authenticated());
        assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
    }

    #[test]
    fn losing_auth_redirects_guarded_routes_once() {
        assert_eq!(
            AppRoute::auth_change_redirect(false, AppRoute::Dashboard),
            Some(AppRoute::SignIn)
        );
        assert_eq!(
            AppRoute::auth_change_redirect(false, AppRoute::Profile),
            Some(AppRoute::SignIn)
        );
        // Already on sign-in: nothing further to push.
        assert_eq!(AppRoute::auth_change_redirect(false, AppRoute::SignIn), None);
        assert_eq!(
            AppRoute::auth_change_redirect(false, AppRoute::NotFound),
            None
        );
    }

    #[test]
    fn gaining_auth_only_leaves_the_sign_in_page() {
        assert_eq!(
            AppRoute::auth_change_redirect(true, AppRoute::SignIn),
            Some(AppRoute::Dashboard)
        );
        assert_eq!(AppRoute::auth_change_redirect(true, AppRoute::Dashboard), None);
        assert_eq!(AppRoute::auth_change_redirect(true, AppRoute::Users), None);
    }
}
