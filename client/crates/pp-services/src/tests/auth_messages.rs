use crate::firebase::auth_messages::friendly_auth_message;

use googletest::prelude::*;

// =========================================================================
// Auth Message Tests
// =========================================================================

#[test]
fn given_known_code_when_mapped_then_returns_readable_text() {
    assert_that!(
        friendly_auth_message("EMAIL_EXISTS"),
        eq("The email address is already in use by another account.")
    );
    assert_that!(
        friendly_auth_message("INVALID_LOGIN_CREDENTIALS"),
        eq("Incorrect email or password.")
    );
}

#[test]
fn given_known_code_with_detail_when_mapped_then_detail_is_dropped() {
    // When
    let message =
        friendly_auth_message("WEAK_PASSWORD : Password should be at least 6 characters");

    // Then
    assert_that!(message, eq("Password should be at least 6 characters."));
}

#[test]
fn given_unknown_code_with_detail_when_mapped_then_detail_is_shown() {
    // When
    let message = friendly_auth_message("SOMETHING_NEW : The backend said no");

    // Then
    assert_that!(message, eq("The backend said no"));
}

#[test]
fn given_unknown_bare_code_when_mapped_then_code_is_shown() {
    assert_that!(friendly_auth_message("QUOTA_EXCEEDED"), eq("QUOTA_EXCEEDED"));
}
