use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orthodox_calendar_bot::config::CalendarVariant;
use orthodox_calendar_bot::discord::Discord;
use orthodox_calendar_bot::handler;
use orthodox_calendar_bot::orthocal::Orthocal;

fn sample_json() -> serde_json::Value {
    let body = std::fs::read_to_string("tests/sample_response.json").expect("failed to read sample_response.json");
    serde_json::from_str(&body).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn run_fetches_formats_and_posts() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gregorian/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_json()))
        .expect(1)
        .mount(&api)
        .await;
    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&hook)
        .await;

    let orthocal = Orthocal::new(format!("{}/api", api.uri()));
    let discord = Discord::new(format!("{}/hook", hook.uri()));
    let ok = tokio::task::spawn_blocking(move || handler::run(&orthocal, CalendarVariant::Gregorian, &discord))
        .await
        .unwrap();
    assert!(ok);

    let sent = hook.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&sent[0].body).unwrap();
    assert_eq!(body["embeds"][0]["title"], "April 12, 2025 - Lazarus Saturday");
    assert_eq!(body["embeds"][0]["color"], 16766720);
}

#[tokio::test(flavor = "multi_thread")]
async fn run_posts_nothing_when_fetch_fails() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api)
        .await;
    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&hook)
        .await;

    let orthocal = Orthocal::new(format!("{}/api", api.uri()));
    let discord = Discord::new(format!("{}/hook", hook.uri()));
    let ok = tokio::task::spawn_blocking(move || handler::run(&orthocal, CalendarVariant::Gregorian, &discord))
        .await
        .unwrap();
    assert!(!ok);
}

#[tokio::test(flavor = "multi_thread")]
async fn run_posts_nothing_for_empty_record() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gregorian/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&api)
        .await;
    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&hook)
        .await;

    let orthocal = Orthocal::new(format!("{}/api", api.uri()));
    let discord = Discord::new(format!("{}/hook", hook.uri()));
    let ok = tokio::task::spawn_blocking(move || handler::run(&orthocal, CalendarVariant::Gregorian, &discord))
        .await
        .unwrap();

    assert!(!ok);
    assert!(hook.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn prepare_builds_embed_without_posting() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/julian/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"fast_level": 1})))
        .mount(&api)
        .await;

    let orthocal = Orthocal::new(format!("{}/api", api.uri()));
    let embed = tokio::task::spawn_blocking(move || handler::prepare(&orthocal, CalendarVariant::Julian))
        .await
        .unwrap()
        .expect("prepare should succeed");

    assert_eq!(embed.title, "Today");
    assert_eq!(embed.description.as_deref(), Some("Fasting day"));
    let preview = embed.preview();
    assert!(preview.contains("Title: Today"), "preview was: {}", preview);
    assert!(preview.contains("Color: #58b9ff"), "preview was: {}", preview);
}
