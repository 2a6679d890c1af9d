use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use rusty_telegram::api::BotApi;
use rusty_telegram::input_file::InputFile;
use rusty_telegram::keyboard;
use rusty_telegram::methods::{self, Method, Upload};
use rusty_telegram::models::{self, ChatAction};
use rusty_telegram::Error;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const TOKEN: &str = "123:TEST";

const PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

async fn setup() -> (MockServer, BotApi, TempDir) {
    let server = MockServer::start().await;
    let cache_dir = tempfile::tempdir().unwrap();
    let api = BotApi::new(TOKEN, Duration::from_secs(5))
        .unwrap()
        .with_server_url(&server.uri())
        .unwrap()
        .with_cache_dir(cache_dir.path());
    (server, api, cache_dir)
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": true}))
}

fn method_path(method_name: &str) -> String {
    format!("/bot{}/{}", TOKEN, method_name)
}

fn query_keys(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect()
}

fn is_empty(directory: &Path) -> bool {
    fs::read_dir(directory).unwrap().next().is_none()
}

async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn get_me_ok() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("getMe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {"id": 123, "is_bot": true, "first_name": "Rusty"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let me = api.get_me().await.unwrap();
    assert_eq!(me["result"]["first_name"], "Rusty");
    assert!(single_request(&server).await.url.query().is_none());
}

#[tokio::test]
async fn send_message_omits_unset() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("sendMessage")))
        .and(query_param("chat_id", "42"))
        .and(query_param("text", "Hello, world"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let response = methods::SendMessage::new(42_i64, "Hello, world")
        .call(&api)
        .await
        .unwrap();
    assert_eq!(response, json!({"ok": true, "result": true}));
    assert_eq!(query_keys(&single_request(&server).await), ["chat_id", "text"]);
}

#[tokio::test]
async fn send_message_reply_markup() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("sendMessage")))
        .and(query_param(
            "reply_markup",
            r#"{"keyboard":[["A","B"]],"resize_keyboard":true,"one_time_keyboard":false,"selective":false}"#,
        ))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let markup = keyboard::ReplyKeyboardMarkup {
        keyboard: vec![vec!["A".to_string(), "B".to_string()]],
        resize_keyboard: true,
        one_time_keyboard: false,
        selective: false,
    };
    methods::SendMessage::new(42_i64, "Pick one")
        .parse_mode(models::ParseMode::HTML)
        .reply_markup(markup)
        .call(&api)
        .await
        .unwrap();
    assert_eq!(
        query_keys(&single_request(&server).await),
        ["chat_id", "text", "parse_mode", "reply_markup"],
    );
}

#[tokio::test]
async fn error_envelope_is_returned_as_is() {
    let (server, api, _cache_dir) = setup().await;
    let body = json!({
        "ok": false,
        "error_code": 400,
        "description": "Bad Request: chat not found",
    });
    Mock::given(method("GET"))
        .and(path(method_path("getChat")))
        .respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let response = methods::GetChat {
        chat_id: models::ChatId::UniqueId(-1),
    }
    .call(&api)
    .await
    .unwrap();
    assert_eq!(response, body);

    let result = models::Response::<Value>::from_value(response)
        .unwrap()
        .into_result();
    assert!(matches!(result, Err(Error::Api { code: 400, .. })));
}

#[tokio::test]
async fn send_chat_action_invalid_makes_no_request() {
    let (server, _api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ok())
        .expect(0)
        .mount(&server)
        .await;

    assert!(matches!(
        "dancing".parse::<ChatAction>(),
        Err(Error::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn send_chat_action_ok() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("sendChatAction")))
        .and(query_param("action", "record_video"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let action = "record_video".parse().unwrap();
    methods::SendChatAction::new(42_i64, action)
        .call(&api)
        .await
        .unwrap();
}

#[tokio::test]
async fn set_webhook_https_ok() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("setWebhook")))
        .and(query_param("url", "https://example.com/"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    assert!(matches!(
        methods::SetWebhook::new("http://example.com"),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        methods::SetWebhook::new("not a url"),
        Err(Error::InvalidArgument(_))
    ));
    methods::SetWebhook::new("https://example.com")
        .unwrap()
        .call(&api)
        .await
        .unwrap();
    assert_eq!(query_keys(&single_request(&server).await), ["url"]);
}

#[tokio::test]
async fn set_webhook_certificate_uploaded() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("POST"))
        .and(path(method_path("setWebhook")))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    let mut certificate = tempfile::Builder::new().suffix(".pem").tempfile().unwrap();
    certificate
        .write_all(b"-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n")
        .unwrap();

    methods::SetWebhook::new("https://example.com/hook")
        .unwrap()
        .certificate(certificate.path())
        .call(&api)
        .await
        .unwrap();

    let body = String::from_utf8_lossy(&single_request(&server).await.body).into_owned();
    assert!(body.contains(r#"name="url""#));
    assert!(body.contains("https://example.com/hook"));
    assert!(body.contains(r#"name="certificate""#));
    assert!(body.contains("BEGIN CERTIFICATE"));
}

#[tokio::test]
async fn send_photo_from_url() {
    let (server, api, cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path("/cat"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(method_path("sendPhoto")))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let response = methods::SendPhoto::new(42_i64, format!("{}/cat", server.uri()))
        .caption("A cat")
        .call(&api)
        .await
        .unwrap();
    assert_eq!(response["ok"], true);

    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|request| request.url.path() == method_path("sendPhoto"))
        .unwrap();
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains(r#"name="photo"; filename=""#));
    assert!(body.contains(r#".png""#));
    assert!(body.contains("image/png"));
    assert!(body.contains(r#"name="caption""#));
    assert!(body.contains(r#"name="chat_id""#));
    assert!(!body.contains(r#"name="reply_to_message_id""#));
    assert!(is_empty(cache_dir.path()));
}

#[tokio::test]
async fn send_photo_unsupported_media() {
    let (server, api, cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path("/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("just some text\n"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ok())
        .expect(0)
        .mount(&server)
        .await;

    let result = methods::SendPhoto::new(42_i64, format!("{}/notes.txt", server.uri()))
        .call(&api)
        .await;
    match result {
        Err(Error::UnsupportedMediaType { method, mime_type }) => {
            assert_eq!(method, "sendPhoto");
            assert_eq!(mime_type, "text/plain");
        }
        result => panic!("unexpected result: {:?}", result),
    }
    assert!(is_empty(cache_dir.path()));
}

#[tokio::test]
async fn send_document_accepts_any_media() {
    let (server, api, cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path("/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("just some text\n"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(method_path("sendDocument")))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    methods::SendDocument::new(42_i64, format!("{}/notes.txt", server.uri()))
        .call(&api)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|request| request.url.path() == method_path("sendDocument"))
        .unwrap();
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains(r#"name="document"; filename=""#));
    assert!(body.contains("text/plain"));
    assert!(body.contains("just some text"));
    assert!(is_empty(cache_dir.path()));
}

#[tokio::test]
async fn staged_file_removed_when_upload_fails() {
    let (server, api, cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path("/song"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(&b"ID3\x04\x00\x00\x00\x00\x00\x00"[..]))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(method_path("sendAudio")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let result = methods::SendAudio::new(42_i64, format!("{}/song", server.uri()))
        .title("Song")
        .call(&api)
        .await;
    assert!(matches!(result, Err(Error::Json(_))));
    assert!(is_empty(cache_dir.path()));
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("getMe")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(matches!(api.get_me().await, Err(Error::Json(_))));
}

#[tokio::test]
async fn send_photo_from_local_path_any_media() {
    let (server, api, cache_dir) = setup().await;
    Mock::given(method("POST"))
        .and(path(method_path("sendPhoto")))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    let mut note = tempfile::Builder::new()
        .prefix("note")
        .suffix(".txt")
        .tempfile()
        .unwrap();
    note.write_all(b"not a photo").unwrap();

    methods::SendPhoto::new(42_i64, InputFile::path(note.path()))
        .call(&api)
        .await
        .unwrap();

    let body = String::from_utf8_lossy(&single_request(&server).await.body).into_owned();
    assert!(body.contains(r#"name="photo"; filename="note"#));
    assert!(body.contains("text/plain"));
    assert!(note.path().exists());
    assert!(is_empty(cache_dir.path()));
}

#[tokio::test]
async fn send_sticker_from_local_path() {
    let (server, api, cache_dir) = setup().await;
    Mock::given(method("POST"))
        .and(path(method_path("sendSticker")))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    let mut sticker = tempfile::Builder::new()
        .prefix("sticker")
        .suffix(".png")
        .tempfile()
        .unwrap();
    sticker.write_all(PNG).unwrap();

    methods::SendSticker::new(42_i64, InputFile::path(sticker.path()))
        .call(&api)
        .await
        .unwrap();

    let body = String::from_utf8_lossy(&single_request(&server).await.body).into_owned();
    assert!(body.contains(r#"name="sticker"; filename="sticker"#));
    assert!(body.contains("image/png"));
    assert!(sticker.path().exists());
    assert!(is_empty(cache_dir.path()));
}

#[tokio::test]
async fn send_audio_by_file_id() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("sendAudio")))
        .and(query_param("audio", "CQACAgIAAxkBAAI"))
        .and(query_param("duration", "180"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    methods::SendAudio::new(42_i64, InputFile::file_id("CQACAgIAAxkBAAI"))
        .duration(180)
        .call(&api)
        .await
        .unwrap();
}

#[tokio::test]
async fn get_updates_long_polling() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(method_path("getUpdates")))
        .and(query_param("offset", "5"))
        .and(query_param("timeout", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let updates = methods::GetUpdates::default()
        .offset(5)
        .timeout(Duration::from_secs(1))
        .call(&api)
        .await
        .unwrap();
    assert_eq!(updates["result"], json!([]));
    assert_eq!(query_keys(&single_request(&server).await), ["offset", "timeout"]);
}

#[tokio::test]
async fn download_file_ok() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/file/bot{}/photos/file_1.jpg", TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(&b"\xFF\xD8\xFF\xE0"[..]))
        .expect(1)
        .mount(&server)
        .await;

    let contents = api.download_file("photos/file_1.jpg").await.unwrap();
    assert_eq!(contents, b"\xFF\xD8\xFF\xE0");
}

#[tokio::test]
async fn download_file_not_found() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(matches!(
        api.download_file("photos/missing.jpg").await,
        Err(Error::Http(_))
    ));
}

#[tokio::test]
async fn download_file_path_is_not_a_relative_url() {
    let (server, api, _cache_dir) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/file/bot{}/documents/a:b%3F.txt", TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(&b"contents"[..]))
        .expect(1)
        .mount(&server)
        .await;

    let contents = api.download_file("documents/a:b?.txt").await.unwrap();
    assert_eq!(contents, b"contents");
    assert_eq!(single_request(&server).await.url.query(), None);
}

#[tokio::test]
async fn download_file_rejects_parent_segments() {
    let (server, api, _cache_dir) = setup().await;

    assert!(matches!(
        api.download_file("../../botOTHER/getMe").await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
