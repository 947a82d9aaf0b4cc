//! Single statistic tile used by the dashboard and profile pages.

use leptos::prelude::*;

use crate::state::profile::{StatCard as Stat, Trend};

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let change_class = match stat.trend {
        Trend::Increase => "stat-card__change stat-card__change--up",
        Trend::Neutral => "stat-card__change",
    };

    view! {
        <div class="stat-card">
            <p class="stat-card__label">{stat.label}</p>
            <p class="stat-card__value">{stat.value}</p>
            <p class=change_class>{stat.change}</p>
        </div>
    }
}
