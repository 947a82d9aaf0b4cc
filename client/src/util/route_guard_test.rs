use super::*;
use crate::net::types::Identity;

fn authenticated() -> Session {
    Session::Authenticated(Identity {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "A".to_owned(),
        avatar: None,
    })
}

const UNKNOWN_PATHS: [&str; 4] = ["/nope", "/login/extra", "/catch", "/PROFILE"];

// =============================================================
// GuardState
// =============================================================

#[test]
fn booting_until_bootstrap_finishes() {
    assert_eq!(GuardState::from_parts(false, &Session::Anonymous), GuardState::Booting);
    assert_eq!(GuardState::from_parts(false, &authenticated()), GuardState::Booting);
}

#[test]
fn booting_while_session_initializing() {
    assert_eq!(GuardState::from_parts(true, &Session::Initializing), GuardState::Booting);
}

#[test]
fn fresh_install_lands_on_login() {
    let state = GuardState::from_parts(true, &Session::Anonymous);
    assert_eq!(state, GuardState::Unauthenticated);
    assert_eq!(state.default_route(), Some(AppRoute::Login));
    assert_eq!(resolve(state, "/"), Resolution::Redirect(AppRoute::Login));
}

#[test]
fn returning_user_lands_on_dashboard() {
    let state = GuardState::from_parts(true, &authenticated());
    assert_eq!(state, GuardState::Authenticated);
    assert_eq!(state.default_route(), Some(AppRoute::Dashboard));
    assert_eq!(resolve(state, "/"), Resolution::Render(AppRoute::Dashboard));
}

// =============================================================
// AppRoute
// =============================================================

#[test]
fn paths_roundtrip_for_every_route() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(AppRoute::from_path("/catch-log/"), Some(AppRoute::CatchLog));
    assert_eq!(AppRoute::from_path(""), Some(AppRoute::Dashboard));
}

#[test]
fn unknown_paths_do_not_match() {
    assert_eq!(AppRoute::from_path("/nope"), None);
    assert_eq!(AppRoute::from_path("/PROFILE"), None);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn booting_shows_placeholder_for_any_path() {
    for route in AppRoute::ALL {
        assert_eq!(resolve(GuardState::Booting, route.path()), Resolution::Placeholder);
    }
    assert_eq!(resolve(GuardState::Booting, "/nope"), Resolution::Placeholder);
}

#[test]
fn unauthenticated_never_exposes_signed_in_routes() {
    for route in AppRoute::ALL {
        let resolution = resolve(GuardState::Unauthenticated, route.path());
        if route.requires_auth() {
            assert_eq!(resolution, Resolution::Redirect(AppRoute::Login));
        } else {
            assert_eq!(resolution, Resolution::Render(route));
        }
    }
}

#[test]
fn authenticated_never_exposes_signed_out_routes() {
    for route in AppRoute::ALL {
        let resolution = resolve(GuardState::Authenticated, route.path());
        if route.requires_auth() {
            assert_eq!(resolution, Resolution::Render(route));
        } else {
            assert_eq!(resolution, Resolution::Redirect(AppRoute::Dashboard));
        }
    }
}

#[test]
fn unknown_paths_redirect_to_state_default() {
    for path in UNKNOWN_PATHS {
        assert_eq!(
            resolve(GuardState::Unauthenticated, path),
            Resolution::Redirect(AppRoute::Login)
        );
        assert_eq!(
            resolve(GuardState::Authenticated, path),
            Resolution::Redirect(AppRoute::Dashboard)
        );
    }
}

#[test]
fn logout_sends_next_navigation_to_login() {
    let before = GuardState::from_parts(true, &authenticated());
    assert_eq!(resolve(before, "/forecast"), Resolution::Render(AppRoute::Forecast));
    let after = GuardState::from_parts(true, &Session::Anonymous);
    assert_eq!(resolve(after, "/forecast"), Resolution::Redirect(AppRoute::Login));
}
