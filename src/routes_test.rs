use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn bundle_is_served_from_site_pkg() {
    assert_eq!(pkg_dir(Path::new("target/site")), PathBuf::from("target/site/pkg"));
}
