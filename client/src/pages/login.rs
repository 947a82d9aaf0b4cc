//! Sign-in page: email + password, or Google.
//!
//! SYSTEM CONTEXT
//! ==============
//! Success only commits the identity to the session store. The route guard
//! sees the session flip to authenticated and redirects away from `/login`,
//! so this page never navigates on its own.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppIdentityProvider;
use crate::error::ValidationError;
use crate::state::session::SessionStore;
use crate::util::route_guard::AppRoute;

/// Check the sign-in form before contacting the provider.
///
/// Returns the trimmed email.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` for a blank email or password.
pub fn validate_login_input(email: &str, password: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    Ok(email.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let session = expect_context::<RwSignal<SessionStore>>();
    let provider = expect_context::<AppIdentityProvider>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_login_input(&email.get(), &password.get()) {
            Ok(value) => value,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::state::auth::login(&provider, &session, &email_value, &password_value).await {
                    error.set(Some(e.to_string()));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, provider, session);
    };

    let on_google = move |_| {
        if busy.get() {
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::state::auth::login_with_google(&provider, &session).await {
                error.set(Some(e.to_string()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (provider, session);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"🐟"</div>
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your FishCast account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <div class="auth-input-row">
                        <input
                            id="password"
                            class="auth-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-input-row__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="auth-divider">"Or continue with"</div>
                <button class="auth-button auth-button--google" disabled=move || busy.get() on:click=on_google>
                    "Continue with Google"
                </button>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href=AppRoute::Signup.path()>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
