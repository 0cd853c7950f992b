use super::*;

#[test]
fn login_response_parses_server_payload() {
    let parsed: LoginResponse = serde_json::from_str(
        r#"{"message":"Login successful","admin_id":"1","email":"a@b.com","name":"A"}"#,
    )
    .unwrap();
    assert_eq!(parsed.admin_id, "1");
    assert_eq!(parsed.name, "A");
    assert_eq!(parsed.email, "a@b.com");
}

#[test]
fn device_tolerates_sparse_document() {
    let parsed: Device = serde_json::from_str(r#"{"_id":"d1","status":"Maintenance"}"#).unwrap();
    assert_eq!(parsed.id, "d1");
    assert_eq!(parsed.status, DeviceStatus::Maintenance);
    assert!(parsed.assigned_to.is_empty());
    assert_eq!(parsed.name, None);
}

#[test]
fn device_status_parse_matches_wire_names() {
    for status in DeviceStatus::ALL {
        assert_eq!(DeviceStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(DeviceStatus::parse("Broken"), None);
}

#[test]
fn new_device_flattens_draft_and_zeroes_scans() {
    let draft = DeviceDraft {
        tag_id: "T-1".to_owned(),
        name: "Lobby".to_owned(),
        location: "HQ".to_owned(),
        status: DeviceStatus::Active,
        assigned_to: vec!["Staff".to_owned()],
    };
    let body = serde_json::to_value(NewDevice { draft: &draft, total_scans: 0 }).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "tag_id": "T-1",
            "name": "Lobby",
            "location": "HQ",
            "status": "Active",
            "assigned_to": ["Staff"],
            "total_scans": 0
        })
    );
}

#[test]
fn user_draft_omits_empty_optionals() {
    let draft = UserDraft {
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        access_level: "Staff".to_owned(),
        position: "Engineer".to_owned(),
        ..UserDraft::new()
    };
    let body = serde_json::to_value(&draft).unwrap();
    assert!(body.get("nfc_id").is_none());
    assert!(body.get("phone").is_none());
    assert_eq!(body["active"], true);
}

#[test]
fn permissions_use_camel_case_and_list_granted_areas() {
    let parsed: Permissions =
        serde_json::from_str(r#"{"mainEntrance":true,"serverRoom":false,"conferenceRoom":true}"#).unwrap();
    assert_eq!(parsed.granted(), vec!["Main Entrance", "Conference Room"]);
}

#[test]
fn verification_log_reads_nested_fields() {
    let parsed: VerificationLog = serde_json::from_str(
        r#"{
            "_id": "l1",
            "access_time": {"date": "2025-01-02", "time": "08:00:00", "unix_time": 1735804800},
            "nfc_id": "04AABB",
            "card_data": {"hex_uid": "04:AA:BB", "processed_hex": "04aabb"},
            "blockchain_data": {"tx_hash": "0xabc", "block_time": "t", "stored_value": "v"},
            "success": true,
            "name": "Ann",
            "access_status": "granted"
        }"#,
    )
    .unwrap();
    assert_eq!(parsed.access_status, AccessStatus::Granted);
    assert_eq!(parsed.access_time.unix_time, 1_735_804_800);
    assert_eq!(parsed.blockchain_data.unwrap().tx_hash, "0xabc");
}

#[test]
fn settings_round_trip_keeps_nested_shape() {
    let settings = Settings {
        organization: OrganizationSettings { name: "Acme".to_owned(), contact_email: "ops@acme.io".to_owned() },
        blockchain: BlockchainSettings { enabled: true, network_endpoint: "http://chain:8545".to_owned() },
        system: SystemSettings { maintenance_mode: false },
    };
    let body = serde_json::to_value(&settings).unwrap();
    assert_eq!(body["organization"]["contact_email"], "ops@acme.io");
    assert_eq!(body["blockchain"]["enabled"], true);
    assert_eq!(body["system"]["maintenance_mode"], false);
}

#[test]
fn overview_defaults_missing_metrics() {
    let parsed: Overview = serde_json::from_str(r#"{"total_devices": 4}"#).unwrap();
    assert_eq!(parsed.total_devices, 4);
    assert_eq!(parsed.verification_success_rate, 0.0);
    assert!(parsed.recent_access_logs.is_empty());
}
