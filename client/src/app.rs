//! Root application component with routing, startup, and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session store, the bootstrap phase, and UI state. The route
//! list is static so server-side route generation sees every path; each route
//! body goes through `Guarded`, which consults `util::route_guard::resolve`
//! before rendering anything. `AppContent` lives inside the router and turns
//! `Resolution::Redirect` into a history-replacing navigation.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::layout::Layout;
use crate::components::loading_screen::LoadingScreen;
use crate::net::identity::MockIdentityProvider;
use crate::pages::{
    catch_log::CatchLogPage, dashboard::DashboardPage, forecast::ForecastPage, login::LoginPage,
    profile::ProfilePage, signup::SignupPage, spot_analyzer::SpotAnalyzerPage,
};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::bootstrap::BootstrapPhase;
use crate::util::route_guard::{AppRoute, GuardState, Resolution, resolve};
use crate::util::storage::BrowserStorage;

/// Identity provider wired into the running app.
pub type AppIdentityProvider = MockIdentityProvider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state, restores the persisted session, and starts the
/// bootstrap timer. Both startup steps run only in the browser; the server
/// always renders the loading screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new(Arc::new(BrowserStorage)));
    let bootstrap = RwSignal::new(BootstrapPhase::default());
    let ui = RwSignal::new(UiState::default());
    let guard = Memo::new(move |_| {
        session.with(|store| GuardState::from_parts(bootstrap.get().is_finished(), store.session()))
    });

    provide_context(session);
    provide_context(bootstrap);
    provide_context(ui);
    provide_context(guard);
    provide_context(AppIdentityProvider::default());

    #[cfg(feature = "hydrate")]
    {
        // After hydration, so the first client render matches the server's.
        leptos::task::spawn_local(async move {
            crate::state::auth::restore(&session).await;
            let dark = crate::util::dark_mode::read_preference(&BrowserStorage);
            crate::util::dark_mode::apply(dark);
            ui.update(|u| u.dark_mode = dark);
        });

        let handle = crate::util::bootstrap::start(move || bootstrap.set(BootstrapPhase::Finished));
        on_cleanup(move || handle.cancel());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/fishcast.css"/>
        <Title text="FishCast"/>

        <Router>
            <AppContent/>
        </Router>
    }
}

/// Route table plus the redirect effect. Must be rendered inside `<Router>`.
#[component]
fn AppContent() -> impl IntoView {
    let guard = expect_context::<Memo<GuardState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        if let Resolution::Redirect(target) = resolve(guard.get(), &path) {
            log::debug!("guard redirect {path} -> {}", target.path());
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Routes fallback=|| view! { <Unmatched/> }>
            <Route path=StaticSegment("login") view=|| view! { <Guarded route=AppRoute::Login/> }/>
            <Route path=StaticSegment("signup") view=|| view! { <Guarded route=AppRoute::Signup/> }/>
            <Route path=StaticSegment("") view=|| view! { <Guarded route=AppRoute::Dashboard/> }/>
            <Route
                path=StaticSegment("spot-analyzer")
                view=|| view! { <Guarded route=AppRoute::SpotAnalyzer/> }
            />
            <Route path=StaticSegment("catch-log") view=|| view! { <Guarded route=AppRoute::CatchLog/> }/>
            <Route path=StaticSegment("forecast") view=|| view! { <Guarded route=AppRoute::Forecast/> }/>
            <Route path=StaticSegment("profile") view=|| view! { <Guarded route=AppRoute::Profile/> }/>
        </Routes>
    }
}

/// Render `route` only when the guard allows it.
#[component]
fn Guarded(route: AppRoute) -> impl IntoView {
    let guard = expect_context::<Memo<GuardState>>();

    move || match resolve(guard.get(), route.path()) {
        Resolution::Placeholder => view! { <LoadingScreen/> }.into_any(),
        Resolution::Render(route) if route.requires_auth() => {
            view! { <Layout>{page(route)}</Layout> }.into_any()
        }
        Resolution::Render(route) => page(route),
        Resolution::Redirect(_) => view! { <RedirectNotice/> }.into_any(),
    }
}

/// Paths outside the route table: loading while booting, otherwise a notice
/// until the redirect effect navigates away.
#[component]
fn Unmatched() -> impl IntoView {
    let guard = expect_context::<Memo<GuardState>>();

    move || match guard.get() {
        GuardState::Booting => view! { <LoadingScreen/> }.into_any(),
        _ => view! { <RedirectNotice/> }.into_any(),
    }
}

#[component]
fn RedirectNotice() -> impl IntoView {
    view! { <div class="redirect-notice">"Redirecting..."</div> }
}

fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage/> }.into_any(),
        AppRoute::Signup => view! { <SignupPage/> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage/> }.into_any(),
        AppRoute::SpotAnalyzer => view! { <SpotAnalyzerPage/> }.into_any(),
        AppRoute::CatchLog => view! { <CatchLogPage/> }.into_any(),
        AppRoute::Forecast => view! { <ForecastPage/> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage/> }.into_any(),
    }
}
