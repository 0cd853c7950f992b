use super::*;

fn device(id: &str, name: &str, status: DeviceStatus, levels: &[&str]) -> Device {
    Device {
        id: id.to_owned(),
        tag_id: Some(format!("NFC{id}")),
        name: Some(name.to_owned()),
        location: Some("Building A".to_owned()),
        status,
        assigned_to: levels.iter().map(|l| (*l).to_owned()).collect(),
        ..Device::default()
    }
}

fn fleet() -> Vec<Device> {
    vec![
        device("001", "Front Door", DeviceStatus::Active, &["Staff"]),
        device("002", "Server Room", DeviceStatus::Maintenance, &["Admin", "IT"]),
        device("003", "Loading Dock", DeviceStatus::Inactive, &[]),
    ]
}

#[test]
fn status_filter_round_trips_dropdown_values() {
    assert_eq!(StatusFilter::parse("All"), StatusFilter::All);
    assert_eq!(StatusFilter::parse("Maintenance"), StatusFilter::Only(DeviceStatus::Maintenance));
    assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    assert_eq!(StatusFilter::Only(DeviceStatus::Active).as_str(), "Active");
}

#[test]
fn search_covers_name_tag_location_and_levels() {
    let devices = fleet();
    let names = |q: &str| -> Vec<String> {
        filter_devices(&devices, q, StatusFilter::All).into_iter().filter_map(|d| d.name).collect()
    };
    assert_eq!(names("front"), vec!["Front Door"]);
    assert_eq!(names("nfc003"), vec!["Loading Dock"]);
    assert_eq!(names("it"), vec!["Server Room"]);
    assert_eq!(names("building").len(), 3);
}

#[test]
fn status_filter_narrows_results() {
    let devices = fleet();
    let only = filter_devices(&devices, "", StatusFilter::Only(DeviceStatus::Inactive));
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].id, "003");
    assert!(filter_devices(&devices, "front", StatusFilter::Only(DeviceStatus::Inactive)).is_empty());
}

#[test]
fn stats_count_each_status() {
    let stats = DeviceStats::of(&fleet());
    assert_eq!(stats, DeviceStats { total: 3, active: 1, inactive: 1, maintenance: 1 });
    assert_eq!(stats.metrics().len(), 4);
}

#[test]
fn level_badges_collapse_long_lists() {
    let few: Vec<String> = vec!["A".into(), "B".into(), "C".into()];
    assert_eq!(level_badges(&few), (few.clone(), None));

    let many: Vec<String> = vec!["A".into(), "B".into(), "C".into(), "D".into()];
    assert_eq!(level_badges(&many), (vec!["A".to_owned(), "B".to_owned()], Some(2)));
}

#[test]
fn csv_rows_fill_placeholders() {
    let rows = csv_rows(&fleet());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].len(), CSV_HEADERS.len());
    assert_eq!(rows[0][4], "Never restarted");
    assert_eq!(rows[0][5], "Never");
    assert_eq!(rows[0][6], "0");
    assert_eq!(rows[1][7], "Admin; IT");
    assert_eq!(rows[2][7], "No Access Levels");
}
