//! Fishing forecast: bite score, conditions, best times, 7-day outlook.

use leptos::prelude::*;

use crate::state::forecast::{DEFAULT_FORECAST_LOCATION, ScoreTier, best_day, forecast_for, weekly_forecast};

#[component]
pub fn ForecastPage() -> impl IntoView {
    let location = RwSignal::new(DEFAULT_FORECAST_LOCATION.to_owned());
    let forecast = RwSignal::new(forecast_for(DEFAULT_FORECAST_LOCATION));
    let week = weekly_forecast();
    let best = best_day(&week).map(|d| d.day);

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let next = forecast_for(&location.get());
        log::info!("forecast updated for {}", next.location);
        location.set(next.location.clone());
        forecast.set(next);
    };

    let days = week
        .iter()
        .map(|day| {
            let tier = day.tier();
            let is_best = best == Some(day.day);
            view! {
                <li class="week-day" class:week-day--best=is_best>
                    <span class="week-day__name">{day.day}</span>
                    <span class=format!("week-day__score {}", tier.css_class())>{format!("{:.1}", day.score)}</span>
                    <span class="week-day__weather">{day.weather}</span>
                    <span class="week-day__temp">{day.temp}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="forecast">
            <h1>"Fishing Forecast"</h1>
            <p class="forecast__intro">
                "Get personalized fishing predictions based on weather, moon phases, "
                "and environmental conditions to maximize your success on the water."
            </p>

            <form class="forecast__location" on:submit=on_update>
                <label for="forecast-location">"Fishing Location"</label>
                <input
                    id="forecast-location"
                    type="text"
                    placeholder="Enter lake, river, or fishing spot"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit">"Update Forecast"</button>
            </form>

            {move || {
                let f = forecast.get();
                let tier = ScoreTier::from_score(f.bite_score);
                view! {
                    <section class="forecast__current">
                        <div class=format!("bite-score {}", tier.css_class())>
                            <span class="bite-score__value">{format!("{:.1}", f.bite_score)}</span>
                            <h3>"Bite Score"</h3>
                            <p>{format!("{} conditions at {}", tier.label(), f.location)}</p>
                        </div>
                        <div class="forecast__conditions">
                            <h3>"Current Conditions"</h3>
                            <p>{f.conditions}</p>
                            <dl>
                                <dt>"Temperature"</dt>
                                <dd>{f.temperature}</dd>
                                <dt>"Water"</dt>
                                <dd>{f.water_temp}</dd>
                                <dt>"Wind"</dt>
                                <dd>{f.wind_speed}</dd>
                                <dt>"Humidity"</dt>
                                <dd>{f.humidity}</dd>
                                <dt>"Pressure"</dt>
                                <dd>{f.barometric_pressure}</dd>
                                <dt>"Moon"</dt>
                                <dd>{f.moon_phase}</dd>
                            </dl>
                        </div>
                        <div class="forecast__best-times">
                            <h3>"Best Fishing Times"</h3>
                            <ul>{f.best_times.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}</ul>
                            <p>{format!("Activity: {}", f.activity_level)}</p>
                        </div>
                        <div class="forecast__recommendation">
                            <h3>"AI Recommendations"</h3>
                            <p>{f.recommendation}</p>
                        </div>
                    </section>
                }
            }}

            <section class="forecast__week">
                <h3>"7-Day Forecast"</h3>
                <ul>{days}</ul>
            </section>
        </div>
    }
}
