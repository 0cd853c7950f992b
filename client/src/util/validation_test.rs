use super::*;
use crate::net::types::DeviceStatus;

fn device(id: &str, tag: Option<&str>) -> Device {
    Device {
        id: id.to_owned(),
        tag_id: tag.map(str::to_owned),
        name: Some("Gate".to_owned()),
        location: Some("Lobby".to_owned()),
        ..Device::default()
    }
}

fn draft(tag: &str) -> DeviceDraft {
    DeviceDraft {
        tag_id: tag.to_owned(),
        name: "Front door".to_owned(),
        location: "Lobby".to_owned(),
        status: DeviceStatus::Active,
        assigned_to: Vec::new(),
    }
}

#[test]
fn login_input_trims_email_and_keeps_password() {
    let request = validate_login_input("  a@b.com ", " pw ").unwrap();
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, " pw ");
}

#[test]
fn login_input_requires_both_fields() {
    assert!(validate_login_input("", "x").is_err());
    assert!(validate_login_input("a@b.com", "").is_err());
    assert!(validate_login_input("   ", "x").is_err());
}

#[test]
fn device_requires_name_and_location() {
    let mut d = draft("");
    d.location = " ".to_owned();
    assert_eq!(validate_device(&d, &[], None), Err("Please fill in all required fields."));
}

#[test]
fn device_rejects_duplicate_tag_id() {
    let existing = [device("1", Some("NFC001"))];
    assert!(validate_device(&draft("NFC001"), &existing, None).is_err());
    assert!(validate_device(&draft("NFC002"), &existing, None).is_ok());
}

#[test]
fn device_edit_may_keep_its_own_tag_id() {
    let existing = [device("1", Some("NFC001")), device("2", Some("NFC002"))];
    assert!(validate_device(&draft("NFC001"), &existing, Some("1")).is_ok());
    assert!(validate_device(&draft("NFC002"), &existing, Some("1")).is_err());
}

#[test]
fn blank_tag_id_is_not_a_duplicate() {
    let existing = [device("1", None)];
    assert!(validate_device(&draft(""), &existing, None).is_ok());
}

#[test]
fn generated_tag_id_skips_taken_numbers() {
    let existing = [device("1", Some("NFC007"))];
    let mut rolls = [7_u32, 1007, 42].into_iter();
    let id = generate_tag_id(&existing, || rolls.next().unwrap_or(0));
    assert_eq!(id, "NFC042");
}

#[test]
fn generated_tag_id_falls_back_to_lowest_free() {
    let existing = [device("1", Some("NFC000")), device("2", Some("NFC001"))];
    let id = generate_tag_id(&existing, || 0);
    assert_eq!(id, "NFC002");
}

#[test]
fn random_roll_varies() {
    let rolls: Vec<u32> = (0..8).map(|_| random_roll()).collect();
    assert!(rolls.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn user_requires_core_fields() {
    let mut user = UserDraft::new();
    assert!(validate_user(&user).is_err());
    user.name = "Ada".to_owned();
    user.email = "ada@example.com".to_owned();
    user.access_level = "Staff".to_owned();
    assert!(validate_user(&user).is_err());
    user.position = "Engineer".to_owned();
    assert!(validate_user(&user).is_ok());
}

#[test]
fn password_change_checks_match_before_length() {
    assert_eq!(validate_password_change("short", "other"), Err("New passwords do not match."));
    assert_eq!(validate_password_change("short", "short"), Err("Password must be at least 8 characters long."));
    assert_eq!(validate_password_change("longenough", "longenough"), Ok(()));
}

#[test]
fn optional_field_drops_blank_values() {
    assert_eq!(optional_field("  "), None);
    assert_eq!(optional_field(" 555 "), Some("555".to_owned()));
}
