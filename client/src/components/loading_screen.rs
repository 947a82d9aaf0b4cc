//! Full-screen placeholder shown while the app is booting.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__logo">"🐟"</div>
            <h1 class="loading-screen__title">"FishCast"</h1>
            <p class="loading-screen__tagline">"Your Smart Fishing Assistant"</p>
            <div class="loading-screen__dots">
                <span class="loading-screen__dot"></span>
                <span class="loading-screen__dot"></span>
                <span class="loading-screen__dot"></span>
            </div>
        </div>
    }
}
