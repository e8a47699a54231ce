use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn assets_root_defaults_to_leptos_site_root() {
    let options = LeptosOptions::builder().output_name("portfolio").site_root("target/site").build();
    assert_eq!(assets_root(&ServerConfig::default(), &options), PathBuf::from("target/site"));
}

#[test]
fn assets_root_prefers_configured_dir() {
    let options = LeptosOptions::builder().output_name("portfolio").site_root("target/site").build();
    let config = ServerConfig { assets_dir: Some(PathBuf::from("/srv/portfolio")), ..ServerConfig::default() };
    assert_eq!(assets_root(&config, &options), PathBuf::from("/srv/portfolio"));
}

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("portfolio-{label}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn profile_photo_is_reported_missing_from_bare_site_root() {
    let dir = scratch_dir("bare");
    assert_eq!(missing_deploy_assets(&dir), ["profile.jpg"]);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn supplied_profile_photo_is_not_reported() {
    let dir = scratch_dir("supplied");
    std::fs::write(dir.join("profile.jpg"), b"jpeg").unwrap();
    assert!(missing_deploy_assets(&dir).is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}
