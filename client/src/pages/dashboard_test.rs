use super::*;

#[test]
fn quick_actions_point_at_signed_in_routes() {
    for action in QUICK_ACTIONS {
        assert!(action.route.requires_auth(), "{} should be guarded", action.title);
        assert_ne!(action.route, AppRoute::Dashboard);
    }
}

#[test]
fn quick_action_order() {
    let titles: Vec<_> = QUICK_ACTIONS.iter().map(|a| a.title).collect();
    assert_eq!(titles, ["Analyze Spot", "Log Catch", "Check Forecast"]);
}

#[test]
fn recent_list_fits_the_sample_log() {
    assert_eq!(recent_catches(&sample_catches(), RECENT_LIMIT).len(), RECENT_LIMIT);
}
