use super::*;

#[test]
fn header_is_first_row() {
    let out = to_csv(&["Tag ID", "Name"], Vec::<Vec<String>>::new()).unwrap();
    assert_eq!(out, "Tag ID,Name\n");
}

#[test]
fn cells_with_commas_and_quotes_are_quoted() {
    let rows = vec![vec!["NFC001", "Lobby, east"], vec!["NFC002", "say \"hi\""]];
    let out = to_csv(&["Tag ID", "Location"], rows).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "NFC001,\"Lobby, east\"");
    assert_eq!(lines[2], "NFC002,\"say \"\"hi\"\"\"");
}

#[test]
fn ragged_rows_are_rejected() {
    let rows = vec![vec!["only-one"]];
    assert!(matches!(to_csv(&["a", "b"], rows), Err(ExportError::Encode(_))));
}

#[test]
fn filename_uses_date_part_only() {
    assert_eq!(export_filename("nfc-tags", "2024-05-01T10:00:00.000Z"), "nfc-tags-2024-05-01.csv");
}

#[test]
fn download_is_unavailable_outside_browser() {
    assert!(download("x.csv", "a,b").is_err());
    assert!(export_rows("x", &["a"], vec![vec!["1".to_owned()]]).is_err());
}
