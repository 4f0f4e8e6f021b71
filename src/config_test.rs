use super::*;

#[test]
fn from_values_defaults_to_localhost() {
    let cfg = AppConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.google_client_id, None);
}

#[test]
fn from_values_blank_base_url_uses_default() {
    let cfg = AppConfig::from_values(Some("   "), None).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = AppConfig::from_values(Some("https://technians-backend.onrender.com//"), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://technians-backend.onrender.com");
}

#[test]
fn from_values_rejects_non_http_scheme() {
    let err = AppConfig::from_values(Some("ftp://example.test"), None).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("http(s)")));
}

#[test]
fn from_values_rejects_missing_host() {
    assert!(AppConfig::from_values(Some("https://"), None).is_err());
}

#[test]
fn from_values_keeps_google_client_id_and_drops_blank() {
    let cfg = AppConfig::from_values(None, Some(" abc.apps.googleusercontent.com ")).unwrap();
    assert_eq!(cfg.google_client_id.as_deref(), Some("abc.apps.googleusercontent.com"));

    let cfg = AppConfig::from_values(None, Some("")).unwrap();
    assert_eq!(cfg.google_client_id, None);
}

#[test]
fn fallback_matches_defaults() {
    assert_eq!(AppConfig::fallback(), AppConfig::from_values(None, None).unwrap());
}
