//! Signed-in chrome: sidebar navigation plus the greeting header.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::Guarded` wraps every route that requires auth in `Layout`. Signing
//! out only clears the session; the guard's redirect effect then moves the
//! user to `/login`.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::profile::greeting;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::route_guard::AppRoute;

/// Sidebar entries, in display order.
pub const NAV_ITEMS: [(AppRoute, &str); 5] = [
    (AppRoute::Dashboard, "Dashboard"),
    (AppRoute::SpotAnalyzer, "Spot Analyzer"),
    (AppRoute::CatchLog, "Catch Log"),
    (AppRoute::Forecast, "Forecast"),
    (AppRoute::Profile, "Profile"),
];

/// Local hour of day for the header greeting.
fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Header/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::auth::logout(&session).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    let sidebar_class = move || {
        if ui.get().sidebar_open { "sidebar sidebar--open" } else { "sidebar" }
    };

    view! {
        <nav class=sidebar_class>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"🐟"</span>
                <span class="sidebar__name">"FishCast"</span>
            </div>
            <ul class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(route, label)| {
                        view! {
                            <li on:click=move |_| ui.update(UiState::close_sidebar)>
                                <A href=route.path()>{label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="sidebar__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </nav>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let title = move || {
        session.with(|store| {
            let first = store.identity().map(|i| i.first_name().to_owned()).unwrap_or_default();
            greeting(current_hour(), &first)
        })
    };
    let name = move || session.with(|store| store.identity().map(|i| i.name.clone()).unwrap_or_default());
    let avatar = move || session.with(|store| store.identity().and_then(|i| i.avatar.clone()));

    let on_toggle_theme = move |_| {
        let current = ui.get_untracked().dark_mode;
        let next = crate::util::dark_mode::toggle(&crate::util::storage::BrowserStorage, current);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="header">
            <button class="header__menu" aria-label="Toggle navigation" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                "☰"
            </button>
            <h1 class="header__title">{title}</h1>
            <div class="header__actions">
                <button class="header__theme" aria-label="Toggle theme" on:click=on_toggle_theme>
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <div class="header__user">
                    {move || avatar().map(|src| view! { <img class="header__avatar" src=src alt=name()/> })}
                    <span class="header__name">{name}</span>
                </div>
            </div>
        </header>
    }
}
