use super::*;

#[test]
fn blank_query_matches_everything() {
    assert!(matches_query("  ", [None]));
    assert!(matches_query("", [Some("x")]));
}

#[test]
fn query_is_case_insensitive_substring() {
    assert!(matches_query("LOB", [None, Some("Main lobby")]));
    assert!(!matches_query("lab", [Some("Main lobby"), None]));
}

#[test]
fn window_clamps_page_into_range() {
    let w = PageWindow::new(25, 9, 10);
    assert_eq!(w, PageWindow { page: 3, total_pages: 3, start: 20, end: 25 });
    assert!(w.has_prev());
    assert!(!w.has_next());

    let first = PageWindow::new(25, 0, 10);
    assert_eq!(first.page, 1);
    assert!(!first.has_prev());
    assert!(first.has_next());
}

#[test]
fn empty_list_has_single_empty_page() {
    let w = PageWindow::new(0, 1, 10);
    assert_eq!(w.total_pages, 1);
    assert!(w.slice::<u8>(&[]).is_empty());
    assert_eq!(w.summary(0), "No results");
}

#[test]
fn slice_and_summary_follow_window() {
    let items: Vec<u32> = (1..=12).collect();
    let w = PageWindow::new(items.len(), 2, 5);
    assert_eq!(w.slice(&items), &[6, 7, 8, 9, 10]);
    assert_eq!(w.summary(items.len()), "Showing 6 to 10 of 12 results");
}
