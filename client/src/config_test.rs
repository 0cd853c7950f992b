use super::*;

#[test]
fn normalize_base_url_falls_back_to_default() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_URL);
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://api.example.com/")), "https://api.example.com");
    assert_eq!(normalize_base_url(Some(" https://api.example.com// ")), "https://api.example.com");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
