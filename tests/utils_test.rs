use discogrify::config::AuthConfig;
use discogrify::utils::*;

fn test_config() -> AuthConfig {
    AuthConfig::with_client_id("test-client")
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier(PKCE_VERIFIER_LENGTH);

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier(PKCE_VERIFIER_LENGTH);
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_verifier_custom_length() {
    assert_eq!(generate_code_verifier(43).len(), 43);
    assert!(generate_code_verifier(0).is_empty());
}

#[test]
fn test_generate_code_challenge() {
    // base64url(sha256("abc")) without padding
    assert_eq!(
        generate_code_challenge("abc"),
        "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0"
    );

    let verifier = generate_code_verifier(PKCE_VERIFIER_LENGTH);
    let challenge = generate_code_challenge(&verifier);

    // SHA-256 digest is 32 bytes, 43 chars unpadded
    assert_eq!(challenge.len(), 43);
    assert!(!challenge.contains('='));
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );

    // Deterministic
    assert_eq!(challenge, generate_code_challenge(&verifier));
}

#[test]
fn test_authorize_url_parameters() {
    let config = test_config();
    let url = authorize_url(&config, "challenge-value").unwrap();

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("client_id".to_string(), "test-client".to_string()),
            ("response_type".to_string(), "code".to_string()),
            (
                "redirect_uri".to_string(),
                "http://127.0.0.1:8000/callback".to_string()
            ),
            (
                "scope".to_string(),
                "user-read-private user-read-email".to_string()
            ),
            ("code_challenge_method".to_string(), "S256".to_string()),
            ("code_challenge".to_string(), "challenge-value".to_string()),
        ]
    );
}

#[test]
fn test_authorize_url_uses_configured_endpoint() {
    let mut config = test_config();
    config.auth_url = "http://localhost:9999/oauth/authorize".to_string();
    config.redirect_uri = "http://localhost:3000/cb".to_string();

    let url = authorize_url(&config, "x").unwrap();
    assert_eq!(url.port(), Some(9999));
    assert_eq!(url.path(), "/oauth/authorize");
    assert!(
        url.query_pairs()
            .any(|(k, v)| k == "redirect_uri" && v == "http://localhost:3000/cb")
    );
}

#[test]
fn test_authorize_url_rejects_invalid_endpoint() {
    let mut config = test_config();
    config.auth_url = "not a url".to_string();
    assert!(authorize_url(&config, "x").is_err());
}

#[test]
fn test_token_length() {
    assert_eq!(token_length(None), 0);
    assert_eq!(token_length(Some("")), 0);
    assert_eq!(token_length(Some("BQD12345")), 8);
}
