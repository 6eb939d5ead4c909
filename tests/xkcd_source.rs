use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;
use xkcd::error::XkcdError;
use xkcd::http_client::build_client;
use xkcd::sources::xkcd::XkcdSource;
use xkcd::sources::{ComicSelector, ComicSource, MISSING_COMIC};

#[derive(Default)]
struct Stub {
    latest: u32,
    broken: Vec<u32>,
    requests: Mutex<Vec<String>>,
}

impl Stub {
    fn new(latest: u32) -> Self {
        Self {
            latest,
            ..Default::default()
        }
    }

    fn record(&self, path: String) {
        self.requests.lock().unwrap().push(path);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn payload(num: u32) -> serde_json::Value {
    json!({
        "month": "4",
        "num": num,
        "link": "",
        "year": "2013",
        "news": "",
        "safe_title": format!("Comic {}", num),
        "transcript": "",
        "alt": "A sample description",
        "img": format!("/images/{}.png", num),
        "title": format!("Comic {}", num),
        "day": "1"
    })
}

async fn latest(State(stub): State<Arc<Stub>>) -> Response {
    stub.record("/info.0.json".to_string());
    axum::Json(payload(stub.latest)).into_response()
}

async fn comic(State(stub): State<Arc<Stub>>, Path(num): Path<u32>) -> Response {
    stub.record(format!("/{}/info.0.json", num));
    if stub.broken.contains(&num) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if num == MISSING_COMIC || num == 0 || num > stub.latest {
        return StatusCode::NOT_FOUND.into_response();
    }
    axum::Json(payload(num)).into_response()
}

async fn image(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "missing.png" => StatusCode::NOT_FOUND.into_response(),
        "broken.png" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => ([(header::CONTENT_TYPE, "image/gif")], vec![7u8, 8, 9]).into_response(),
    }
}

async fn spawn_stub(stub: Arc<Stub>) -> String {
    let app = Router::new()
        .route("/info.0.json", get(latest))
        .route("/{num}/info.0.json", get(comic))
        .route("/images/{name}", get(image))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn source_for(stub: Arc<Stub>) -> (XkcdSource, String) {
    let base_url = spawn_stub(stub).await;
    let source = XkcdSource::new(build_client(5).unwrap(), base_url.clone());
    (source, base_url)
}

#[tokio::test]
async fn fetches_latest_comic() {
    let (source, _) = source_for(Arc::new(Stub::new(5))).await;
    let response = source.fetch_latest().await.unwrap().unwrap();
    assert_eq!(response.num, 5);
    assert_eq!(response.to_comic().date, "1-4-2013");
}

#[tokio::test]
async fn fetches_comic_by_number() {
    let (source, _) = source_for(Arc::new(Stub::new(5))).await;
    let response = source.fetch_comic(2).await.unwrap().unwrap();
    assert_eq!(response.title, "Comic 2");
    assert_eq!(response.safe_title, "Comic 2");
}

#[tokio::test]
async fn missing_comic_is_none() {
    let (source, _) = source_for(Arc::new(Stub::new(5))).await;
    assert!(source.fetch_comic(9).await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_is_upstream_failure() {
    let stub = Arc::new(Stub {
        broken: vec![4],
        ..Stub::new(5)
    });
    let (source, _) = source_for(stub).await;
    let err = source.fetch_comic(4).await.unwrap_err();
    let XkcdError::UpstreamFailed(msg) = &err else {
        panic!("expected upstream failure, got {err:?}");
    };
    assert!(msg.contains("/4/info.0.json"), "{msg}");
    assert!(msg.contains("500"), "{msg}");
}

#[tokio::test]
async fn random_comic_is_always_found_in_range() {
    let stub = Arc::new(Stub::new(5));
    let (source, _) = source_for(stub).await;
    for _ in 0..20 {
        let response = source.fetch_random().await.unwrap().unwrap();
        assert!((1..=5).contains(&response.num), "{}", response.num);
    }
}

#[tokio::test]
async fn random_with_single_comic_reuses_latest() {
    let stub = Arc::new(Stub::new(1));
    let (source, _) = source_for(stub.clone()).await;

    let response = source.fetch_random().await.unwrap().unwrap();

    assert_eq!(response.num, 1);
    assert_eq!(stub.requests(), vec!["/info.0.json".to_string()]);
}

#[tokio::test]
async fn random_never_requests_comic_404() {
    let stub = Arc::new(Stub::new(405));
    let (source, _) = source_for(stub.clone()).await;

    for _ in 0..200 {
        let response = source.fetch_random().await.unwrap().unwrap();
        assert_ne!(response.num, MISSING_COMIC);
    }

    let requested_404 = format!("/{}/info.0.json", MISSING_COMIC);
    assert!(!stub.requests().contains(&requested_404));
}

#[tokio::test]
async fn selector_fetches_through_source() {
    let (source, _) = source_for(Arc::new(Stub::new(5))).await;
    let selector: ComicSelector = "#1".parse().unwrap();
    let response = selector.fetch(&source).await.unwrap().unwrap();
    assert_eq!(response.num, 1);
}

#[tokio::test]
async fn downloads_image_with_content_type() {
    let (source, base_url) = source_for(Arc::new(Stub::new(5))).await;
    let (bytes, content_type) = source
        .fetch_image(&format!("{}/images/1.png", base_url))
        .await
        .unwrap();
    assert_eq!(bytes, vec![7, 8, 9]);
    assert_eq!(content_type, "image/gif");
}

#[tokio::test]
async fn missing_image_is_not_found() {
    let (source, base_url) = source_for(Arc::new(Stub::new(5))).await;
    let err = source
        .fetch_image(&format!("{}/images/missing.png", base_url))
        .await
        .unwrap_err();
    assert!(matches!(err, XkcdError::NotFound(_)));
}

#[tokio::test]
async fn failing_image_host_is_upstream_failure() {
    let (source, base_url) = source_for(Arc::new(Stub::new(5))).await;
    let err = source
        .fetch_image(&format!("{}/images/broken.png", base_url))
        .await
        .unwrap_err();
    assert!(matches!(err, XkcdError::UpstreamFailed(_)));
}
