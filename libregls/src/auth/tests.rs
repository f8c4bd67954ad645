use super::*;
use base64::{Engine as _, engine::general_purpose};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_credentials_basic_token() {
    let creds = Credentials::basic("user", "pass");

    assert_eq!(creds.token(), "dXNlcjpwYXNz");
    assert_eq!(creds.to_header_value(), "Basic dXNlcjpwYXNz");
}

#[test]
fn test_credentials_basic_token_is_not_validated() {
    // Colons and empty strings are encoded as-is
    let creds = Credentials::basic("a:b", "");
    let decoded = general_purpose::STANDARD.decode(creds.token()).unwrap();

    assert_eq!(decoded, b"a:b:");
}

#[test]
fn test_credentials_basic_token_matches_encoding_for_many_pairs() {
    let pairs = [
        ("admin", "s3cr3t"),
        ("robot$ci", "p@ss word"),
        ("ünïcode", "パスワード"),
        ("u", "p"),
    ];

    for (username, password) in pairs {
        let expected = general_purpose::STANDARD.encode(format!("{}:{}", username, password));
        assert_eq!(Credentials::basic(username, password).token(), expected);
    }
}

#[test]
fn test_credentials_encoded_token_is_verbatim() {
    let creds = Credentials::encoded("not-even-base64");

    assert_eq!(creds.token(), "not-even-base64");
    assert_eq!(creds.to_header_value(), "Basic not-even-base64");
}

#[test]
fn test_resolve_explicit_credentials_skip_store() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("config.json");

    let creds = resolve("reg.example.com", Some("user"), Some("pass"), &missing).unwrap();

    assert_eq!(creds, Credentials::basic("user", "pass"));
}

#[test]
fn test_resolve_explicit_credentials_win_over_store() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"auths":{"reg.example.com":{"auth":"c3RvcmU6c3RvcmU="}}}"#).unwrap();

    let creds = resolve("reg.example.com", Some("user"), Some("pass"), &path).unwrap();

    assert_eq!(creds.token(), "dXNlcjpwYXNz");
}

#[test]
fn test_resolve_from_store() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"auths":{"reg.example.com:5000":{"auth":"dXNlcjpwYXNz"}}}"#,
    )
    .unwrap();

    let creds = resolve("reg.example.com:5000", None, None, &path).unwrap();

    assert_eq!(creds.to_header_value(), "Basic dXNlcjpwYXNz");
}

#[test]
fn test_resolve_empty_store_token_is_verbatim() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"auths":{"reg.example.com:5000":{"auth":""}}}"#).unwrap();

    let creds = resolve("reg.example.com:5000", None, None, &path).unwrap();

    assert_eq!(creds, Credentials::encoded(""));
}

#[test]
fn test_resolve_array_store_file_is_malformed() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "[]").unwrap();

    let err = resolve("reg.example.com", None, None, &path).unwrap_err();

    assert!(matches!(
        err,
        ReglsError::Credentials(CredentialError::Malformed { .. })
    ));
}

#[test]
fn test_resolve_host_missing_from_store() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"auths":{"other.example.com":{"auth":"eDp5"}}}"#).unwrap();

    let err = resolve("reg.example.com", None, None, &path).unwrap_err();

    match err {
        ReglsError::Credentials(CredentialError::EntryMissing {
            path: reported,
            host,
        }) => {
            assert_eq!(reported, path);
            assert_eq!(host, "reg.example.com");
        }
        other => panic!("Expected EntryMissing, got {:?}", other),
    }
}

#[test]
fn test_resolve_missing_store_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");

    let err = resolve("reg.example.com", None, None, &path).unwrap_err();

    assert!(matches!(
        err,
        ReglsError::Credentials(CredentialError::FileNotFound { .. })
    ));
}

#[test]
fn test_resolve_malformed_store_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "auths: yaml-not-json").unwrap();

    let err = resolve("reg.example.com", None, None, &path).unwrap_err();

    assert!(matches!(
        err,
        ReglsError::Credentials(CredentialError::Malformed { .. })
    ));
}

#[test]
fn test_resolve_single_credential_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"auths":{"reg":{"auth":"eDp5"}}}"#).unwrap();

    let only_user = resolve("reg", Some("user"), None, &path).unwrap_err();
    let only_pass = resolve("reg", None, Some("pass"), &path).unwrap_err();

    assert!(matches!(only_user, ReglsError::Validation { .. }));
    assert!(matches!(only_pass, ReglsError::Validation { .. }));
}
