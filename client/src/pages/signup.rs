//! Account creation page.
//!
//! Input is validated into a `SignupRequest` before the provider is called;
//! a password mismatch never reaches the provider.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppIdentityProvider;
use crate::error::ValidationError;
use crate::state::auth::SignupRequest;
use crate::state::session::SessionStore;
use crate::util::route_guard::AppRoute;

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
    pub accepted_terms: bool,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns the first field `ValidationError` found, then
    /// `ValidationError::TermsNotAccepted` when the terms box is unchecked.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let request = SignupRequest::new(&self.email, &self.password, &self.confirmation, &self.name)?;
        if !self.accepted_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(request)
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
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
        let request = match form.with(SignupForm::validate) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::state::auth::signup(&provider, &session, request).await {
                error.set(Some(e.to_string()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, provider, session);
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__logo">"🐟"</div>
                <h1>"Create account"</h1>
                <p class="auth-card__subtitle">"Join FishCast and start your fishing journey"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Full name"</label>
                    <input
                        id="name"
                        class="auth-input"
                        type="text"
                        autocomplete="name"
                        placeholder="Enter your full name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="Enter your email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type=password_type
                        autocomplete="new-password"
                        placeholder="Create a password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <label for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        class="auth-input"
                        type=password_type
                        autocomplete="new-password"
                        placeholder="Confirm your password"
                        prop:value=move || form.with(|f| f.confirmation.clone())
                        on:input=move |ev| form.update(|f| f.confirmation = event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="auth-link"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide passwords" } else { "Show passwords" }}
                    </button>
                    <label class="auth-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accepted_terms)
                            on:change=move |ev| form.update(|f| f.accepted_terms = event_target_checked(&ev))
                        />
                        "I agree to the Terms of Service and Privacy Policy"
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=AppRoute::Login.path()>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
