//! Form checks run before any request is dispatched.
//!
//! Every failure is a fixed user-facing message; callers surface it as a toast
//! (or inline on the login page) and never send the request.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Device, DeviceDraft, LoginRequest, UserDraft};

const TAG_ID_PREFIX: &str = "NFC";
const TAG_ID_SPACE: u32 = 1000;
const MIN_PASSWORD_LEN: usize = 8;

/// Trim and require both login fields.
///
/// # Errors
///
/// Returns a message when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Check a device form. `editing` is the id of the device being edited, which
/// is excluded from the duplicate tag check.
///
/// # Errors
///
/// Returns a message for missing required fields or a duplicate tag id.
pub fn validate_device(draft: &DeviceDraft, existing: &[Device], editing: Option<&str>) -> Result<(), &'static str> {
    if draft.name.trim().is_empty() || draft.location.trim().is_empty() {
        return Err("Please fill in all required fields.");
    }
    let tag_id = draft.tag_id.trim();
    if !tag_id.is_empty() && tag_taken(tag_id, existing, editing) {
        return Err("A tag with this ID already exists. Please use a different ID.");
    }
    Ok(())
}

fn tag_taken(tag_id: &str, existing: &[Device], editing: Option<&str>) -> bool {
    existing
        .iter()
        .filter(|d| editing != Some(d.id.as_str()))
        .any(|d| d.tag_id.as_deref() == Some(tag_id))
}

/// Pick an unused `NFC###` tag id. `roll` supplies random candidates; after
/// one pass of misses the lowest free number is used.
pub fn generate_tag_id<F>(existing: &[Device], mut roll: F) -> String
where
    F: FnMut() -> u32,
{
    let candidate = |n: u32| format!("{TAG_ID_PREFIX}{:03}", n % TAG_ID_SPACE);
    for _ in 0..TAG_ID_SPACE {
        let id = candidate(roll());
        if !tag_taken(&id, existing, None) {
            return id;
        }
    }
    (0..TAG_ID_SPACE)
        .map(candidate)
        .find(|id| !tag_taken(id, existing, None))
        .unwrap_or_else(|| format!("{TAG_ID_PREFIX}{}", existing.len()))
}

/// Random candidate for [`generate_tag_id`].
pub fn random_roll() -> u32 {
    let bytes = uuid::Uuid::new_v4().into_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Check a user form.
///
/// # Errors
///
/// Returns a message when a required field is blank.
pub fn validate_user(draft: &UserDraft) -> Result<(), &'static str> {
    let required = [&draft.name, &draft.email, &draft.access_level, &draft.position];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err("Please fill in all required fields.");
    }
    Ok(())
}

/// Check a password change form.
///
/// # Errors
///
/// Returns a message when the confirmation differs or the password is short.
pub fn validate_password_change(new_password: &str, confirm: &str) -> Result<(), &'static str> {
    if new_password != confirm {
        return Err("New passwords do not match.");
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    Ok(())
}

/// Turn an optional form field into `None` when blank.
pub fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
