//! Sample statistics and achievements for the dashboard and profile pages,
//! plus the time-of-day greeting.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Direction of a stat's change badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

/// Tabs on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Overview,
    Statistics,
    Achievements,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Statistics, Self::Achievements];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Statistics => "Statistics",
            Self::Achievements => "Achievements",
        }
    }
}

fn stat(label: &'static str, value: &'static str, change: &'static str, trend: Trend) -> StatCard {
    StatCard { label, value, change, trend }
}

#[must_use]
pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        stat("Total Catches", "24", "+12%", Trend::Increase),
        stat("This Month", "8", "+3", Trend::Increase),
        stat("Favorite Spot", "Lake Michigan", "6 catches", Trend::Neutral),
        stat("Success Rate", "68%", "+5%", Trend::Increase),
    ]
}

#[must_use]
pub fn profile_stats() -> Vec<StatCard> {
    vec![
        stat("Total Catches", "24", "+3 this week", Trend::Increase),
        stat("Favorite Species", "Bass", "8 catches", Trend::Neutral),
        stat("Best Month", "September", "12 catches", Trend::Neutral),
        stat("Success Rate", "68%", "+5% this month", Trend::Increase),
    ]
}

#[must_use]
pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement { name: "First Catch", description: "Logged your first catch", earned: true },
        Achievement { name: "Big Fish", description: "Caught a fish over 5 lbs", earned: true },
        Achievement { name: "Explorer", description: "Fished at 10 different locations", earned: false },
        Achievement { name: "Consistent Angler", description: "Logged catches for 30 days", earned: false },
    ]
}

/// `(earned, total)` achievement counts.
#[must_use]
pub fn achievement_progress(items: &[Achievement]) -> (usize, usize) {
    (items.iter().filter(|a| a.earned).count(), items.len())
}

/// Greeting for the header, e.g. "Good morning, John!".
#[must_use]
pub fn greeting(hour: u32, first_name: &str) -> String {
    let part = match hour {
        5..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };
    if first_name.is_empty() {
        format!("Good {part}!")
    } else {
        format!("Good {part}, {first_name}!")
    }
}
