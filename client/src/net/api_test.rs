use super::*;

#[test]
fn accepts_common_image_types() {
    assert_eq!(validate_image_upload("image/jpeg", 1024), Ok(()));
    assert_eq!(validate_image_upload("image/png", 0), Ok(()));
    assert_eq!(validate_image_upload("IMAGE/GIF", 1), Ok(()));
}

#[test]
fn rejects_non_image_types() {
    assert_eq!(validate_image_upload("application/pdf", 10), Err(ValidationError::NotAnImage));
    assert_eq!(validate_image_upload("", 10), Err(ValidationError::NotAnImage));
    assert_eq!(validate_image_upload("imag", 10), Err(ValidationError::NotAnImage));
}

#[test]
fn accepts_exactly_ten_megabytes() {
    assert_eq!(validate_image_upload("image/jpeg", MAX_UPLOAD_BYTES), Ok(()));
}

#[test]
fn rejects_over_ten_megabytes() {
    assert_eq!(
        validate_image_upload("image/jpeg", MAX_UPLOAD_BYTES + 1),
        Err(ValidationError::ImageTooLarge)
    );
}

#[test]
fn type_check_runs_before_size_check() {
    assert_eq!(
        validate_image_upload("video/mp4", MAX_UPLOAD_BYTES * 2),
        Err(ValidationError::NotAnImage)
    );
}

#[test]
fn analyze_failed_message_formats_status() {
    assert_eq!(analyze_failed_message(502), "analysis request failed: 502");
}
