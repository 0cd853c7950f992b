use super::*;
use crate::net::types::RecentAccessLog;

fn sample() -> Overview {
    Overview {
        response_time_ms: 120.0,
        blockchain_sync: true,
        blockchain_latency_ms: 42.5,
        total_devices: 1200,
        active_devices: 1100,
        total_users: 50,
        active_users: 45,
        total_visitors_count: 300,
        successful_verifications: 976,
        denied_verifications: 24,
        total_verifications: 1000,
        verification_success_rate: 97.6,
        recent_access_logs: vec![
            RecentAccessLog {
                timestamp: "2024-05-01T10:00:00Z".to_owned(),
                gate_name: "Gate A".to_owned(),
                location: "Lobby".to_owned(),
                nfc_id: "NFC001".to_owned(),
                name: "Ada".to_owned(),
                access_status: AccessStatus::Granted,
            },
            RecentAccessLog {
                timestamp: "2024-05-01T10:05:00Z".to_owned(),
                gate_name: "Gate B".to_owned(),
                location: "Lab".to_owned(),
                nfc_id: "NFC001".to_owned(),
                name: "Bob".to_owned(),
                access_status: AccessStatus::Denied,
            },
        ],
    }
}

#[test]
fn summary_cards_follow_overview_counts() {
    let metrics = summary_metrics(&sample());
    let values: Vec<(&str, &str)> = metrics.iter().map(|m| (m.label, m.value.as_str())).collect();
    assert_eq!(
        values,
        vec![
            ("Total NFC Tags", "1,200"),
            ("Total Visitors", "300"),
            ("Successful Verifications", "976"),
            ("Blocked Attempts", "24"),
        ]
    );
    assert_eq!(metrics[2].detail, "97.6% success rate");
}

#[test]
fn slow_response_is_flagged() {
    let mut overview = sample();
    assert_eq!(analytics_metrics(&overview)[0].health, Health::Online);
    overview.response_time_ms = 800.0;
    assert_eq!(analytics_metrics(&overview)[0].health, Health::Warning);
}

#[test]
fn lost_sync_is_an_error() {
    let mut overview = sample();
    overview.blockchain_sync = false;
    let sync = &analytics_metrics(&overview)[1];
    assert_eq!(sync.value, "Out of sync");
    assert_eq!(sync.health, Health::Error);
}

#[test]
fn activity_maps_status_and_keeps_ids_unique() {
    let entries = activity_entries(&sample());
    assert_eq!(entries.len(), 2);
    assert!(entries[0].verified);
    assert!(!entries[1].verified);
    assert_eq!(entries[0].location, "Gate A - Lobby");
    assert_eq!(entries[0].timestamp, "2024-05-01 10:00:00");
    assert_ne!(entries[0].id, entries[1].id);
}
