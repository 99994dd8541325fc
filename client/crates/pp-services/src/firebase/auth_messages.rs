/// Readable text for identity-service error codes.
///
/// Codes may carry a detail suffix (`"WEAK_PASSWORD : Password should be..."`);
/// the suffix is shown when the code is not recognized.
pub(crate) fn friendly_auth_message(raw: &str) -> String {
    let (code, detail) = match raw.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (raw.trim(), None),
    };

    let known = match code {
        "EMAIL_EXISTS" => Some("The email address is already in use by another account."),
        "INVALID_EMAIL" => Some("The email address is badly formatted."),
        "MISSING_PASSWORD" => Some("Please enter a password."),
        "WEAK_PASSWORD" => Some("Password should be at least 6 characters."),
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            Some("Incorrect email or password.")
        }
        "USER_DISABLED" => Some("This account has been disabled."),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            Some("Too many attempts. Please wait a moment and try again.")
        }
        "INVALID_IDP_RESPONSE" => Some("The sign-in provider rejected the credential."),
        "OPERATION_NOT_ALLOWED" => Some("This sign-in method is not enabled."),
        _ => None,
    };

    match (known, detail) {
        (Some(message), _) => message.to_string(),
        (None, Some(detail)) => detail.to_string(),
        (None, None) => code.to_string(),
    }
}
