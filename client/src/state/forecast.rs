//! Sample bite forecast and current-conditions data.

#[cfg(test)]
#[path = "forecast_test.rs"]
mod forecast_test;

/// Qualitative band for a 0–10 bite score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
}

impl ScoreTier {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else {
            Self::Fair
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }

    /// BEM modifier class used to colour score badges.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "score--excellent",
            Self::Good => "score--good",
            Self::Fair => "score--fair",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    pub location: String,
    pub bite_score: f64,
    pub activity_level: &'static str,
    pub conditions: &'static str,
    pub moon_phase: &'static str,
    pub best_times: Vec<&'static str>,
    pub recommendation: &'static str,
    pub water_temp: &'static str,
    pub barometric_pressure: &'static str,
    pub wind_speed: &'static str,
    pub humidity: &'static str,
    pub temperature: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayForecast {
    pub day: &'static str,
    pub score: f64,
    pub weather: &'static str,
    pub temp: &'static str,
}

impl DayForecast {
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

pub const DEFAULT_FORECAST_LOCATION: &str = "Lake Michigan";

/// Forecast for `location`. The figures are sample data and do not depend
/// on the location; a blank location falls back to the default lake.
#[must_use]
pub fn forecast_for(location: &str) -> Forecast {
    let location = location.trim();
    Forecast {
        location: if location.is_empty() { DEFAULT_FORECAST_LOCATION } else { location }.to_owned(),
        bite_score: 8.5,
        activity_level: "Excellent",
        conditions: "Partly cloudy with light winds",
        moon_phase: "Waxing Gibbous",
        best_times: vec!["6:00-8:00 AM", "6:30-8:30 PM"],
        recommendation: "Prime fishing conditions! Fish are likely to be very active. \
                         Try topwater lures during dawn and dusk.",
        water_temp: "68°F",
        barometric_pressure: "30.15 inHg",
        wind_speed: "8 mph",
        humidity: "65%",
        temperature: "72°F",
    }
}

#[must_use]
pub fn weekly_forecast() -> Vec<DayForecast> {
    [
        ("Today", 8.5, "Partly Cloudy", "72°F"),
        ("Tomorrow", 7.2, "Sunny", "75°F"),
        ("Wednesday", 6.8, "Overcast", "69°F"),
        ("Thursday", 9.1, "Light Rain", "66°F"),
        ("Friday", 8.3, "Partly Cloudy", "71°F"),
        ("Saturday", 7.9, "Sunny", "74°F"),
        ("Sunday", 6.5, "Windy", "70°F"),
    ]
    .into_iter()
    .map(|(day, score, weather, temp)| DayForecast { day, score, weather, temp })
    .collect()
}

/// Best-scoring day of the week, if any.
#[must_use]
pub fn best_day(days: &[DayForecast]) -> Option<&DayForecast> {
    days.iter().max_by(|a, b| a.score.total_cmp(&b.score))
}
