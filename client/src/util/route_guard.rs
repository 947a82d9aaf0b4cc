//! Route guard deciding which route tree is reachable.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::AppContent` derives a `GuardState` from the bootstrap flag and the
//! session, renders only routes that `resolve` allows, and navigates
//! (replacing history) whenever `resolve` asks for a redirect.
//!
//! Booting lasts until both the bootstrap timer has fired and the session
//! has been restored. After that the guard simply mirrors the session.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::session::Session;

/// Guard state derived from startup progress and the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Booting,
    Unauthenticated,
    Authenticated,
}

impl GuardState {
    #[must_use]
    pub fn from_parts(bootstrap_finished: bool, session: &Session) -> Self {
        match session {
            _ if !bootstrap_finished => Self::Booting,
            Session::Initializing => Self::Booting,
            Session::Anonymous => Self::Unauthenticated,
            Session::Authenticated(_) => Self::Authenticated,
        }
    }

    /// Destination used when the requested path is not reachable.
    #[must_use]
    pub fn default_route(self) -> Option<AppRoute> {
        match self {
            Self::Booting => None,
            Self::Unauthenticated => Some(AppRoute::Login),
            Self::Authenticated => Some(AppRoute::Dashboard),
        }
    }
}

/// Every named destination in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Signup,
    Dashboard,
    SpotAnalyzer,
    CatchLog,
    Forecast,
    Profile,
}

impl AppRoute {
    pub const ALL: [Self; 7] = [
        Self::Login,
        Self::Signup,
        Self::Dashboard,
        Self::SpotAnalyzer,
        Self::CatchLog,
        Self::Forecast,
        Self::Profile,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/",
            Self::SpotAnalyzer => "/spot-analyzer",
            Self::CatchLog => "/catch-log",
            Self::Forecast => "/forecast",
            Self::Profile => "/profile",
        }
    }

    /// Match a location pathname. A trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Whether this destination belongs to the signed-in route tree.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    /// Whether the route is reachable in `state`.
    #[must_use]
    pub fn reachable_in(self, state: GuardState) -> bool {
        match state {
            GuardState::Booting => false,
            GuardState::Unauthenticated => !self.requires_auth(),
            GuardState::Authenticated => self.requires_auth(),
        }
    }
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Still booting; show the loading screen.
    Placeholder,
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Decide what a request for `path` shows in `state`.
#[must_use]
pub fn resolve(state: GuardState, path: &str) -> Resolution {
    let Some(fallback) = state.default_route() else {
        return Resolution::Placeholder;
    };
    match AppRoute::from_path(path) {
        Some(route) if route.reachable_in(state) => Resolution::Render(route),
        _ => Resolution::Redirect(fallback),
    }
}
