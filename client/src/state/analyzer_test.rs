use super::*;
use crate::net::api::MAX_UPLOAD_BYTES;

fn photo(content_type: &str, size: u64) -> SelectedImage {
    SelectedImage {
        name: "spot.jpg".to_owned(),
        content_type: content_type.to_owned(),
        size,
        preview_url: Some("blob:preview".to_owned()),
    }
}

#[test]
fn default_is_empty() {
    let state = AnalyzerState::default();
    assert!(state.selected.is_none());
    assert!(!state.loading);
}

#[test]
fn select_valid_photo_clears_previous_result() {
    let mut state = AnalyzerState {
        analysis: Some("old".to_owned()),
        error: Some("old error".to_owned()),
        ..AnalyzerState::default()
    };
    state.select(photo("image/jpeg", 1024)).unwrap();
    assert_eq!(state.analysis, None);
    assert_eq!(state.error, None);
    assert_eq!(state.preview_url(), Some("blob:preview"));
}

#[test]
fn select_non_image_records_error_and_keeps_selection() {
    let mut state = AnalyzerState::default();
    state.select(photo("image/png", 10)).unwrap();
    let err = state.select(photo("text/plain", 10)).unwrap_err();
    assert_eq!(err, ValidationError::NotAnImage);
    assert_eq!(state.error.as_deref(), Some("Please select a valid image file"));
    assert_eq!(state.selected.as_ref().map(|s| s.content_type.as_str()), Some("image/png"));
}

#[test]
fn select_oversized_photo_is_rejected() {
    let mut state = AnalyzerState::default();
    assert_eq!(
        state.select(photo("image/jpeg", MAX_UPLOAD_BYTES + 1)),
        Err(ValidationError::ImageTooLarge)
    );
    assert!(state.selected.is_none());
}

#[test]
fn begin_requires_selection() {
    let mut state = AnalyzerState::default();
    assert!(!state.begin());
}

#[test]
fn begin_refuses_while_loading() {
    let mut state = AnalyzerState::default();
    state.select(photo("image/jpeg", 1)).unwrap();
    assert!(state.begin());
    assert!(!state.begin());
}

#[test]
fn finish_success_sets_analysis() {
    let mut state = AnalyzerState::default();
    state.select(photo("image/jpeg", 1)).unwrap();
    state.begin();
    state.finish(Ok("Cast along the weed line.".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.analysis.as_deref(), Some("Cast along the weed line."));
}

#[test]
fn finish_failure_records_error_without_recommendation() {
    let mut state = AnalyzerState::default();
    state.select(photo("image/jpeg", 1)).unwrap();
    state.begin();
    state.finish(Err(TransportError::Network("offline".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.analysis, None);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to analyze image. Please check your connection and try again.")
    );
    assert!(state.selected.is_some());
}

#[test]
fn failed_reanalysis_keeps_prior_recommendation() {
    let mut state = AnalyzerState::default();
    state.select(photo("image/jpeg", 1)).unwrap();
    state.begin();
    state.finish(Ok("prior".to_owned()));

    assert!(state.begin());
    assert_eq!(state.analysis.as_deref(), Some("prior"));
    state.finish(Err(TransportError::Service("analysis request failed: 502".to_owned())));

    assert!(!state.loading);
    assert_eq!(state.analysis.as_deref(), Some("prior"));
    assert_eq!(state.error.as_deref(), Some("analysis request failed: 502"));
}

#[test]
fn reset_clears_everything() {
    let mut state = AnalyzerState::default();
    state.select(photo("image/jpeg", 1)).unwrap();
    state.reset();
    assert_eq!(state, AnalyzerState::default());
}
