//! Profile page: identity card plus overview, statistics, and achievements
//! tabs.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::profile::{ProfileTab, achievement_progress, achievements, profile_stats};
use crate::state::session::SessionStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let tab = RwSignal::new(ProfileTab::default());

    let name = move || session.with(|s| s.identity().map(|i| i.name.clone()).unwrap_or_default());
    let email = move || session.with(|s| s.identity().map(|i| i.email.clone()).unwrap_or_default());
    let avatar = move || session.with(|s| s.identity().and_then(|i| i.avatar.clone()));

    let badges = achievements();
    let (earned, total) = achievement_progress(&badges);

    view! {
        <div class="profile">
            <section class="profile__card">
                {move || avatar().map(|src| view! { <img class="profile__avatar" src=src alt=name()/> })}
                <div>
                    <h1>{name}</h1>
                    <p class="profile__email">{email}</p>
                    <p class="profile__meta">"Member since January 2024 · 24 catches logged"</p>
                </div>
            </section>

            <nav class="profile__tabs" role="tablist">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                role="tab"
                                class="profile__tab"
                                class:profile__tab--active=move || tab.get() == t
                                aria-selected=move || (tab.get() == t).to_string()
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <Show when=move || tab.get() == ProfileTab::Overview>
                <section class="profile__overview">
                    <h2>"Profile Information"</h2>
                    <label>"Full Name" <input type="text" readonly prop:value=name/></label>
                    <label>"Email" <input type="email" readonly prop:value=email/></label>
                    <label>"Favorite Fishing Spot" <input type="text" placeholder="Lake Michigan"/></label>
                    <label>
                        "Experience Level"
                        <select>
                            <option>"Intermediate"</option>
                            <option>"Beginner"</option>
                            <option>"Advanced"</option>
                            <option>"Expert"</option>
                        </select>
                    </label>
                    <label>"Bio" <textarea rows="4" placeholder="Tell us about your fishing journey..."></textarea></label>
                </section>
            </Show>
            <Show when=move || tab.get() == ProfileTab::Statistics>
                <section class="profile__stats">
                    {profile_stats().into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
                </section>
            </Show>
            <Show when=move || tab.get() == ProfileTab::Achievements>
                <section class="profile__achievements">
                    <p>{format!("{earned} of {total} earned")}</p>
                    <ul>
                        {badges
                            .iter()
                            .map(|a| {
                                view! {
                                    <li class="achievement" class:achievement--earned=a.earned>
                                        <h3>{a.name}</h3>
                                        <p>{a.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </Show>
        </div>
    }
}
