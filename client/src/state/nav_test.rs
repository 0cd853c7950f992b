use super::*;

#[test]
fn default_section_is_overview() {
    assert_eq!(NavState::default().current, Section::Overview);
}

#[test]
fn select_changes_current_section() {
    let mut nav = NavState::default();
    nav.select(Section::BlockchainStatus);
    assert!(nav.is_current(Section::BlockchainStatus));
    assert!(!nav.is_current(Section::Overview));
}

#[test]
fn all_sections_listed_once_in_header_order() {
    assert_eq!(Section::ALL[0], Section::Overview);
    assert_eq!(Section::ALL[5], Section::Settings);
    let titles: std::collections::HashSet<_> = Section::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(titles.len(), Section::ALL.len());
}
