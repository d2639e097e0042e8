mod common;

use std::net::SocketAddr;

use discogrify::config::AuthConfig;
use discogrify::management::{SessionManager, VerifierManager};
use discogrify::server::{self, AppState};
use discogrify::types::{AuthOutcome, Session};
use reqwest::{Client, StatusCode, header::LOCATION, redirect::Policy};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestApp {
    addr: SocketAddr,
    state: AppState,
    client: Client,
    _dir: TempDir,
}

impl TestApp {
    async fn spawn(spotify: &MockServer) -> Self {
        let dir = TempDir::new().unwrap();

        let mut config = AuthConfig::with_client_id("test-client");
        config.token_url = format!("{}/api/token", spotify.uri());
        config.api_url = format!("{}/v1", spotify.uri());

        let state = AppState::new(
            config,
            SessionManager::new(dir.path()),
            VerifierManager::new(dir.path()),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(server::serve(listener, state.clone()));

        let client = Client::builder().redirect(Policy::none()).build().unwrap();

        Self {
            addr,
            state,
            client,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }
}

async fn mount_spotify(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "BQDtoken" })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::profile_json()))
        .mount(server)
        .await;
}

fn location(res: &reqwest::Response) -> &str {
    res.headers().get(LOCATION).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn test_health() {
    let spotify = MockServer::start().await;
    let app = TestApp::spawn(&spotify).await;

    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "discogrify");
}

#[tokio::test]
async fn test_home_signed_out() {
    let spotify = MockServer::start().await;
    let app = TestApp::spawn(&spotify).await;

    let body = app.get("/").await.text().await.unwrap();
    assert!(body.contains("Not signed in"));
    assert!(body.contains("Login with Spotify"));
}

#[tokio::test]
async fn test_login_redirects_to_authorize() {
    let spotify = MockServer::start().await;
    let app = TestApp::spawn(&spotify).await;

    let res = app.get("/login").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(location(&res).starts_with("https://accounts.spotify.com/authorize?client_id=test-client"));
    assert!(location(&res).contains("code_challenge_method=S256"));

    assert!(app.state.verifiers.load().await.is_some());
}

#[tokio::test]
async fn test_callback_signs_in_and_strips_code() {
    let spotify = MockServer::start().await;
    mount_spotify(&spotify).await;
    let app = TestApp::spawn(&spotify).await;

    app.get("/login").await;
    let res = app.get("/callback?code=the-code").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let session = app.state.session.restore().await.unwrap();
    assert_eq!(session.access_token, "BQDtoken");
    assert_eq!(session.profile.id, "wizzler");

    assert!(matches!(
        app.state.outcome.lock().await.as_ref(),
        Some(AuthOutcome::Authenticated { .. })
    ));

    let body = app.get("/").await.text().await.unwrap();
    assert!(body.contains("Logged in as"));
    assert!(body.contains("JM Wizzler"));
    assert!(body.contains("Access token length: 8"));
}

#[tokio::test]
async fn test_callback_keeps_existing_session() {
    let spotify = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "NEW" })))
        .expect(0)
        .mount(&spotify)
        .await;
    let app = TestApp::spawn(&spotify).await;

    app.state
        .session
        .persist(&Session::new("OLD".to_string(), common::profile()))
        .await
        .unwrap();

    let res = app.get("/callback?code=the-code").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let session = app.state.session.restore().await.unwrap();
    assert_eq!(session.access_token, "OLD");
    assert!(app.state.outcome.lock().await.is_none());
}

#[tokio::test]
async fn test_callback_without_code_redirects_home() {
    let spotify = MockServer::start().await;
    let app = TestApp::spawn(&spotify).await;

    let res = app.get("/callback").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
    assert!(app.state.outcome.lock().await.is_none());
}

#[tokio::test]
async fn test_callback_failure_renders_error() {
    let spotify = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code"
        })))
        .mount(&spotify)
        .await;
    let app = TestApp::spawn(&spotify).await;

    let res = app.get("/callback?code=stale").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Error: Invalid authorization code"));

    assert!(app.state.session.restore().await.is_none());
}

#[tokio::test]
async fn test_callback_denied_renders_error() {
    let spotify = MockServer::start().await;
    let app = TestApp::spawn(&spotify).await;

    let body = app
        .get("/callback?error=access_denied")
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Error: access_denied"));
}

#[tokio::test]
async fn test_callback_accepts_extra_query_params() {
    let spotify = MockServer::start().await;
    let app = TestApp::spawn(&spotify).await;

    let body = app
        .get("/callback?error=access_denied&state=xyz")
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Error: access_denied"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let spotify = MockServer::start().await;
    let app = TestApp::spawn(&spotify).await;

    app.state
        .session
        .persist(&Session::new("BQDtoken".to_string(), common::profile()))
        .await
        .unwrap();
    assert!(app.get("/").await.text().await.unwrap().contains("JM Wizzler"));

    let res = app.client.post(app.url("/logout")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    assert!(app.state.session.restore().await.is_none());
    assert!(app.get("/").await.text().await.unwrap().contains("Not signed in"));
}

#[tokio::test]
async fn test_start_api_server_fails_when_address_is_taken() {
    let dir = TempDir::new().unwrap();
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let mut config = AuthConfig::with_client_id("test-client");
    config.server_addr = taken.local_addr().unwrap();
    let state = AppState::new(
        config,
        SessionManager::new(dir.path()),
        VerifierManager::new(dir.path()),
    );

    assert!(server::start_api_server(state).await.is_err());
}
