//! Catch log: stats, filters, list/grid view, and the "log new catch" form.
//!
//! The list is sample data. A submitted catch is validated and logged, then
//! the form closes; the list does not change.

#[cfg(test)]
#[path = "catch_log_test.rs"]
mod catch_log_test;

use leptos::prelude::*;

use crate::state::catches::{
    CatchDraft, CatchEntry, CatchFilter, CatchView, LOCATION_FILTERS, SPECIES_FILTERS, catch_stats, sample_catches,
    short_date,
};

/// Map a `<select>` value onto a filter slot; the empty option means "all".
#[must_use]
pub fn filter_choice(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Id for the next catch: one past the largest in `entries`.
#[must_use]
pub fn next_catch_id(entries: &[CatchEntry]) -> u32 {
    entries.iter().map(|e| e.id).max().map_or(1, |max| max.saturating_add(1))
}

/// A draft pre-filled with the current date and time where available.
fn fresh_draft() -> CatchDraft {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        CatchDraft {
            date: String::from(now.to_iso_string()).chars().take(10).collect(),
            time: format!("{:02}:{:02}", now.get_hours(), now.get_minutes()),
            ..CatchDraft::default()
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CatchDraft::default()
    }
}

#[component]
pub fn CatchLogPage() -> impl IntoView {
    let entries = StoredValue::new(sample_catches());
    let filter = RwSignal::new(CatchFilter::default());
    let view_mode = RwSignal::new(CatchView::default());
    let show_form = RwSignal::new(false);

    let stats = entries.with_value(|all| catch_stats(all));
    let heaviest = stats.heaviest_lbs.map_or_else(|| "-".to_owned(), |w| format!("{w:.1} lbs"));

    let visible = move || {
        let current = filter.get();
        entries.with_value(|all| current.apply(all).into_iter().cloned().collect::<Vec<_>>())
    };

    let list_class = move || match view_mode.get() {
        CatchView::List => "catch-list catch-list--list",
        CatchView::Grid => "catch-list catch-list--grid",
    };

    view! {
        <div class="catch-log">
            <div class="catch-log__header">
                <div>
                    <h1>"Catch Log"</h1>
                    <p>"Track your fishing success and build your angling history"</p>
                </div>
                <button class="button button--primary" on:click=move |_| show_form.set(true)>
                    "Log New Catch"
                </button>
            </div>

            <section class="catch-log__stats">
                <div class="stat-card"><p class="stat-card__label">"Total Catches"</p><p class="stat-card__value">{stats.total}</p></div>
                <div class="stat-card"><p class="stat-card__label">"Species"</p><p class="stat-card__value">{stats.species}</p></div>
                <div class="stat-card"><p class="stat-card__label">"Locations"</p><p class="stat-card__value">{stats.locations}</p></div>
                <div class="stat-card"><p class="stat-card__label">"Biggest Catch"</p><p class="stat-card__value">{heaviest}</p></div>
            </section>

            <section class="catch-log__toolbar">
                <select on:change=move |ev| filter.update(|f| f.species = filter_choice(&event_target_value(&ev)))>
                    <option value="">"All Species"</option>
                    {SPECIES_FILTERS.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| filter.update(|f| f.location = filter_choice(&event_target_value(&ev)))>
                    <option value="">"All Locations"</option>
                    {LOCATION_FILTERS.into_iter().map(|l| view! { <option value=l>{l}</option> }).collect_view()}
                </select>
                <div class="catch-log__view-toggle">
                    <button
                        class:active=move || view_mode.get() == CatchView::List
                        aria-label="List view"
                        on:click=move |_| view_mode.set(CatchView::List)
                    >
                        "List"
                    </button>
                    <button
                        class:active=move || view_mode.get() == CatchView::Grid
                        aria-label="Grid view"
                        on:click=move |_| view_mode.set(CatchView::Grid)
                    >
                        "Grid"
                    </button>
                </div>
            </section>

            <ul class=list_class>
                <For each=visible key=|entry| entry.id let:entry>
                    <CatchCard entry=entry/>
                </For>
            </ul>
            <Show when=move || visible().is_empty()>
                <p class="catch-log__empty">"No catches match these filters."</p>
            </Show>

            <Show when=move || show_form.get()>
                <CatchForm next_id=entries.with_value(|all| next_catch_id(all)) on_close=move || show_form.set(false)/>
            </Show>
        </div>
    }
}

#[component]
fn CatchCard(entry: CatchEntry) -> impl IntoView {
    let weight = format!("{:.1} lbs", entry.weight_lbs);
    let length = format!("{:.1} in", entry.length_in);
    let date = short_date(&entry.date);

    view! {
        <li class="catch-card">
            {entry.photo_url.clone().map(|src| view! { <img class="catch-card__photo" src=src alt=entry.species.clone()/> })}
            <div class="catch-card__body">
                <h3>{entry.species.clone()}</h3>
                <p class="catch-card__size">{weight} " · " {length}</p>
                <p class="catch-card__meta">{entry.location.clone()} " · " {date} " " {entry.time.clone()}</p>
                <p class="catch-card__detail">"Bait: " {entry.bait.clone()} " · " {entry.weather.clone()}</p>
                <p class="catch-card__notes">{entry.notes.clone()}</p>
            </div>
        </li>
    }
}

type DraftGet = fn(&CatchDraft) -> &String;
type DraftSet = fn(&mut CatchDraft) -> &mut String;

fn draft_input(
    draft: RwSignal<CatchDraft>,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: DraftGet,
    set: DraftSet,
) -> impl IntoView {
    view! {
        <label class="catch-form__field">
            <span>{label}</span>
            <input
                type=input_type
                step="0.1"
                placeholder=placeholder
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| *set(d) = event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn CatchForm(next_id: u32, on_close: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let draft = RwSignal::new(fresh_draft());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with(|d| d.submit(next_id)) {
            Ok(_) => on_close(),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>"Log New Catch"</h2>
                    <button aria-label="Close" on:click=move |_| on_close()>"×"</button>
                </div>
                <form class="catch-form" on:submit=on_submit>
                    {draft_input(draft, "Species *", "text", "e.g., Largemouth Bass", |d| &d.species, |d| &mut d.species)}
                    {draft_input(draft, "Bait Used", "text", "e.g., Spinnerbait", |d| &d.bait, |d| &mut d.bait)}
                    {draft_input(draft, "Weight (lbs)", "number", "0.0", |d| &d.weight, |d| &mut d.weight)}
                    {draft_input(draft, "Length (inches)", "number", "0.0", |d| &d.length, |d| &mut d.length)}
                    {draft_input(draft, "Location *", "text", "e.g., Lake Michigan, North Shore", |d| &d.location, |d| &mut d.location)}
                    {draft_input(draft, "Date *", "date", "", |d| &d.date, |d| &mut d.date)}
                    {draft_input(draft, "Time", "time", "", |d| &d.time, |d| &mut d.time)}
                    {draft_input(draft, "Weather", "text", "e.g., Sunny, 72°F", |d| &d.weather, |d| &mut d.weather)}
                    <label class="catch-form__field">
                        <span>"Notes"</span>
                        <textarea
                            rows="3"
                            placeholder="Any additional details about your catch..."
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="catch-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="catch-form__actions">
                        <button type="button" class="button" on:click=move |_| on_close()>"Cancel"</button>
                        <button type="submit" class="button button--primary">"Log Catch"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
