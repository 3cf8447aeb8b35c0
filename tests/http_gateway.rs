use std::sync::Arc;
use std::time::Duration;

use fanid_core::crypto::password_digest;
use fanid_core::validation::{LoginForm, RegistrationForm};
use fanid_core::{FanIdClient, FanIdError, GatewayConfig, HttpGateway, SessionStore, UserProfile};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FanIdClient {
    let config = GatewayConfig::default().with_base_url(server.uri());
    client_with(config)
}

fn client_with(config: GatewayConfig) -> FanIdClient {
    let token = config.app_token.clone();
    let gateway = HttpGateway::new(config).unwrap();
    FanIdClient::new(Arc::new(gateway), SessionStore::new(), token)
}

fn login_form() -> LoginForm {
    LoginForm {
        username: "x".into(),
        password: "hunter22".into(),
    }
}

fn registration_form() -> RegistrationForm {
    RegistrationForm {
        firstname: "Ana".into(),
        lastname: "Lopez".into(),
        id: "12345".into(),
        email: "ana@example.com".into(),
        username: "ana".into(),
        password: "abcdef".into(),
    }
}

fn profile_body() -> serde_json::Value {
    json!({
        "id": 7,
        "username": "x",
        "firstname": "Ana",
        "lastname": "Lopez",
        "email": "ana@example.com",
        "pfp_url": "http://x/old.png"
    })
}

async fn last_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    let request = requests.last().unwrap();
    String::from_utf8_lossy(&request.body).into_owned()
}

#[tokio::test]
async fn login_posts_token_user_and_digest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_string_contains("code37"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let profile = client.login(&login_form()).await.unwrap();
    assert_eq!(profile.id, 7);
    assert_eq!(client.session().get().map(|p| p.id), Some(7));

    let body = last_body(&server).await;
    assert!(body.contains("name=\"token\""));
    assert!(body.contains("name=\"user\""));
    assert!(body.contains("name=\"pass\""));
    assert!(body.contains(&password_digest("hunter22")));
    assert!(!body.contains("hunter22\r\n"));
}

#[tokio::test]
async fn login_rejection_in_error_status_is_authentication() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "bad" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.login(&login_form()).await.unwrap_err();
    assert!(matches!(err, FanIdError::Authentication));
    assert!(client.session().get().is_none());
}

#[tokio::test]
async fn non_json_reply_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.login(&login_form()).await.unwrap_err();
    assert!(matches!(err, FanIdError::Transport(_)));
    assert!(!err.is_user_visible());
}

#[tokio::test]
async fn stalled_request_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(profile_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = GatewayConfig::default().with_base_url(server.uri());
    config.request_timeout = Duration::from_millis(200);
    let client = client_with(config);

    let err = client.login(&login_form()).await.unwrap_err();
    assert!(matches!(err, FanIdError::Transport(_)));
    assert!(client.session().get().is_none());
}

#[tokio::test]
async fn register_sends_all_fields_and_surfaces_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "El correo ya existe" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.register(&registration_form()).await.unwrap_err();
    assert_eq!(err.to_string(), "El correo ya existe");

    let body = last_body(&server).await;
    for field in ["token", "id", "username", "pass", "email", "firstname", "lastname"] {
        assert!(body.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
    assert!(body.contains(&password_digest("abcdef")));
}

#[tokio::test]
async fn invalid_registration_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = registration_form();
    form.password = "abcde".into();
    let err = client.register(&form).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "the password must be at least 6 characters long"
    );
}

#[tokio::test]
async fn photo_upload_is_jpeg_part_and_updates_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/set_pfp"))
        .and(body_string_contains("image0ne"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "pfp_url": "http://x/y.png" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let before: UserProfile = serde_json::from_value(profile_body()).unwrap();
    client.session().set(before.clone());

    let url = client
        .upload_profile_photo(b"JPEGDATA".to_vec())
        .await
        .unwrap();
    assert_eq!(url, "http://x/y.png");

    let after = client.session().get().unwrap();
    assert_eq!(after.pfp_url, "http://x/y.png");
    assert_eq!(after.username, before.username);
    assert_eq!(after.email, before.email);
    assert_eq!(after.id, before.id);

    let body = last_body(&server).await;
    assert!(body.contains("name=\"image\""));
    assert!(body.contains("filename=\"image0ne\""));
    assert!(body.contains("image/jpeg"));
    assert!(body.contains("JPEGDATA"));
    assert!(body.contains("name=\"id\""));
    assert!(body.contains("\r\n\r\n7\r\n"));
}

#[tokio::test]
async fn photo_upload_failure_keeps_previous_photo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/set_pfp"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let before: UserProfile = serde_json::from_value(profile_body()).unwrap();
    client.session().set(before.clone());

    let err = client.upload_profile_photo(vec![1, 2, 3]).await.unwrap_err();
    assert!(matches!(err, FanIdError::Upload(_)));
    assert_eq!(client.session().get(), Some(before));
}

#[tokio::test]
async fn logout_after_login_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.login(&login_form()).await.unwrap();
    client.logout();
    assert!(client.session().get().is_none());
}
