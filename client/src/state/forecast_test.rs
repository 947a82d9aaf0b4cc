use super::*;

#[test]
fn score_tiers_follow_thresholds() {
    assert_eq!(ScoreTier::from_score(8.0), ScoreTier::Excellent);
    assert_eq!(ScoreTier::from_score(7.99), ScoreTier::Good);
    assert_eq!(ScoreTier::from_score(6.0), ScoreTier::Good);
    assert_eq!(ScoreTier::from_score(5.9), ScoreTier::Fair);
}

#[test]
fn tier_labels() {
    assert_eq!(ScoreTier::Excellent.label(), "Excellent");
    assert_eq!(ScoreTier::Fair.css_class(), "score--fair");
}

#[test]
fn forecast_keeps_requested_location() {
    assert_eq!(forecast_for(" Cedar Lake ").location, "Cedar Lake");
}

#[test]
fn blank_location_uses_default() {
    assert_eq!(forecast_for("   ").location, DEFAULT_FORECAST_LOCATION);
}

#[test]
fn week_has_seven_days_starting_today() {
    let week = weekly_forecast();
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].day, "Today");
}

#[test]
fn best_day_is_thursday() {
    let week = weekly_forecast();
    assert_eq!(best_day(&week).map(|d| d.day), Some("Thursday"));
    assert_eq!(best_day(&[]), None);
}
