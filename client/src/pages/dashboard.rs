//! Dashboard: quick actions, stats, current conditions, and recent catches.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the signed-in landing route (`/`). All figures are sample data
//! from `state::profile`, `state::forecast`, and `state::catches`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::stat_card::StatCard;
use crate::state::catches::{recent_catches, sample_catches, short_date};
use crate::state::forecast::{DEFAULT_FORECAST_LOCATION, forecast_for};
use crate::state::profile::dashboard_stats;
use crate::util::route_guard::AppRoute;

/// A shortcut tile on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub route: AppRoute,
    pub title: &'static str,
    pub description: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        route: AppRoute::SpotAnalyzer,
        title: "Analyze Spot",
        description: "Upload a photo to get AI-powered fishing recommendations",
    },
    QuickAction {
        route: AppRoute::CatchLog,
        title: "Log Catch",
        description: "Record your latest catch with details and photos",
    },
    QuickAction {
        route: AppRoute::Forecast,
        title: "Check Forecast",
        description: "Get personalized fishing conditions and bite predictions",
    },
];

/// Number of catches shown under "Recent Catches".
pub const RECENT_LIMIT: usize = 3;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let conditions = forecast_for(DEFAULT_FORECAST_LOCATION);
    let catches = sample_catches();
    let recent = recent_catches(&catches, RECENT_LIMIT)
        .into_iter()
        .map(|entry| {
            let size = format!("{:.1} lbs", entry.weight_lbs);
            let date = short_date(&entry.date);
            view! {
                <li class="recent-catch">
                    {entry.photo_url.clone().map(|src| view! { <img class="recent-catch__photo" src=src alt=entry.species.clone()/> })}
                    <div class="recent-catch__body">
                        <span class="recent-catch__species">{entry.species.clone()}</span>
                        <span class="recent-catch__size">{size}</span>
                        <span class="recent-catch__meta">{entry.location.clone()} " · " {date}</span>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <section class="dashboard__welcome">
                <h1>"Ready to catch some fish?"</h1>
                <p>
                    "Your smart fishing assistant is here to help you find the best spots, "
                    "track your catches, and predict the perfect fishing conditions."
                </p>
            </section>

            <section class="dashboard__actions">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|action| {
                        view! {
                            <A href=action.route.path()>
                                <div class="quick-action">
                                    <h3>{action.title}</h3>
                                    <p>{action.description}</p>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="dashboard__stats">
                {dashboard_stats().into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
            </section>

            <section class="weather-widget">
                <h2>"Current Conditions"</h2>
                <p class="weather-widget__temp">{conditions.temperature}</p>
                <p class="weather-widget__summary">{conditions.conditions}</p>
                <dl class="weather-widget__details">
                    <dt>"Wind"</dt>
                    <dd>{conditions.wind_speed}</dd>
                    <dt>"Humidity"</dt>
                    <dd>{conditions.humidity}</dd>
                    <dt>"Water"</dt>
                    <dd>{conditions.water_temp}</dd>
                </dl>
            </section>

            <section class="dashboard__recent">
                <div class="dashboard__recent-header">
                    <h2>"Recent Catches"</h2>
                    <A href=AppRoute::CatchLog.path()>"View all"</A>
                </div>
                <ul>{recent}</ul>
            </section>
        </div>
    }
}
