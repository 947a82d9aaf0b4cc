//! Spot analyzer: pick a photo, preview it, and ask the service for advice.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::analyzer::AnalyzerState` holds everything the view shows. The
//! chosen `web_sys::File` and its object-URL preview are browser-only and
//! live in a local `StoredValue`; previews are revoked when replaced, on
//! reset, and on unmount.

use leptos::prelude::*;

use crate::state::analyzer::AnalyzerState;
#[cfg(feature = "hydrate")]
use crate::state::analyzer::SelectedImage;

#[cfg(feature = "hydrate")]
fn revoke_preview(url: Option<String>) {
    if let Some(url) = url {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size(file: &web_sys::File) -> u64 {
    file.size().max(0.0) as u64
}

#[component]
pub fn SpotAnalyzerPage() -> impl IntoView {
    let state = RwSignal::new(AnalyzerState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "hydrate")]
    let file_slot = StoredValue::new_local(None::<web_sys::File>);

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        revoke_preview(state.try_with_untracked(|s| s.preview_url().map(str::to_owned)).flatten());
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let preview = web_sys::Url::create_object_url_with_blob(&file).ok();
            let image = SelectedImage {
                name: file.name(),
                content_type: file.type_(),
                size: file_size(&file),
                preview_url: preview.clone(),
            };
            let previous = state.with_untracked(|s| s.preview_url().map(str::to_owned));
            match state.try_update(|s| s.select(image)) {
                Some(Ok(())) => {
                    revoke_preview(previous);
                    file_slot.set_value(Some(file));
                }
                _ => revoke_preview(preview),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_choose = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_analyze = move |_| {
        if !state.try_update(AnalyzerState::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_slot.get_value() else {
                state.update(AnalyzerState::reset);
                return;
            };
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::analyze_spot(&file).await;
                state.update(|s| s.finish(outcome));
            });
        }
    };

    let on_reset = move |_| {
        #[cfg(feature = "hydrate")]
        {
            revoke_preview(state.with_untracked(|s| s.preview_url().map(str::to_owned)));
            file_slot.set_value(None);
        }
        state.update(AnalyzerState::reset);
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let has_selection = move || state.with(|s| s.selected.is_some());
    let loading = move || state.with(|s| s.loading);

    view! {
        <div class="spot-analyzer">
            <h1>"AI Spot Analyzer"</h1>
            <p class="spot-analyzer__intro">
                "Upload a photo of your fishing spot and get AI-powered recommendations "
                "on where to cast, what bait to use, and the best fishing techniques."
            </p>

            <section class="spot-analyzer__upload">
                <h2>"Upload Fishing Spot Photo"</h2>
                <Show
                    when=has_selection
                    fallback=move || {
                        view! {
                            <div class="upload-drop" on:click=on_choose>
                                <p>"Click to upload"</p>
                                <p class="upload-drop__hint">"PNG, JPG, GIF up to 10MB"</p>
                            </div>
                        }
                    }
                >
                    <div class="upload-preview">
                        {move || {
                            state
                                .with(|s| s.preview_url().map(str::to_owned))
                                .map(|src| view! { <img src=src alt="Fishing spot"/> })
                        }}
                        <button class="upload-preview__clear" aria-label="Remove photo" on:click=on_reset>
                            "×"
                        </button>
                    </div>
                </Show>
                <input
                    node_ref=file_input
                    class="upload-input"
                    type="file"
                    accept="image/*"
                    on:change=on_file_change
                />
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="spot-analyzer__error" role="alert">
                        {move || state.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <div class="spot-analyzer__buttons">
                    <button class="button" on:click=on_choose>
                        "Choose Photo"
                    </button>
                    <Show when=has_selection>
                        <button class="button button--primary" disabled=loading on:click=on_analyze>
                            {move || if loading() { "Analyzing..." } else { "Analyze Spot" }}
                        </button>
                    </Show>
                </div>
            </section>

            <section class="spot-analyzer__results">
                <h2>"AI Analysis Results"</h2>
                {move || {
                    let (analysis, busy) = state.with(|s| (s.analysis.clone(), s.loading));
                    match (analysis, busy) {
                        (_, true) => view! { <p class="spot-analyzer__pending">"Analyzing your fishing spot..."</p> }.into_any(),
                        (Some(text), false) => view! { <div class="spot-analyzer__analysis">{text}</div> }.into_any(),
                        (None, false) => {
                            view! { <p class="spot-analyzer__empty">"Upload a photo to get AI-powered fishing recommendations"</p> }
                                .into_any()
                        }
                    }
                }}
            </section>
        </div>
    }
}
